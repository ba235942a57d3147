//! Field rendering utilities for forms

use crate::state::{FieldStatus, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the message line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a text field with its validation message underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = Style::default().fg(border_color(field.status(), is_active));
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = field.value();
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.id().label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), chunks[0]);
    frame.render_widget(Paragraph::new(status_line(field.status())), chunks[1]);
}

fn border_color(status: &FieldStatus, is_active: bool) -> Color {
    match status {
        FieldStatus::Invalid(_) => Color::Red,
        FieldStatus::Valid => Color::Green,
        FieldStatus::Untouched if is_active => Color::Cyan,
        FieldStatus::Untouched => Color::DarkGray,
    }
}

fn status_line(status: &FieldStatus) -> Line<'_> {
    match status {
        FieldStatus::Invalid(message) => Line::from(Span::styled(
            format!(" ✗ {message}"),
            Style::default().fg(Color::Red),
        )),
        FieldStatus::Valid => Line::from(Span::styled(" ✓", Style::default().fg(Color::Green))),
        FieldStatus::Untouched => Line::default(),
    }
}
