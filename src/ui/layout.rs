//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{SUBMIT_FALLBACK_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, SubmissionState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and form, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the title header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Advanced Webinar Registration",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Reserve your seat in a few keystrokes",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let state_span = match app.form.submission_state() {
        SubmissionState::Idle => Span::styled(" ● ", Style::default().fg(Color::Gray)),
        SubmissionState::Submitting => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionState::Succeeded(_) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionState::Failed(_) => Span::styled(" ● ", Style::default().fg(Color::Red)),
    };

    let spans = vec![
        state_span,
        Span::styled(
            get_focus_hints(app.state.focus),
            Style::default().fg(Color::Gray),
        ),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused control
fn get_focus_hints(focus: Focus) -> String {
    let submit = format!("{SUBMIT_SHORTCUT}/{SUBMIT_FALLBACK_SHORTCUT}:submit");
    match focus {
        Focus::Field(_) => format!("Tab:next  Esc:clear  {submit}"),
        Focus::Interest => format!("←/→:choose  Space:select  Tab:next  {submit}"),
        Focus::Submit => format!("Enter:register  Tab:next  {submit}"),
    }
}
