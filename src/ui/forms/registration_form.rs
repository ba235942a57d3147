//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Focus, Interest, SubmissionState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draw the whole registration form
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Register for the Webinar ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Progress
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Phone
            Constraint::Length(FIELD_HEIGHT),  // Organization
            Constraint::Length(3),             // Interest
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),                // Confirmation
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_progress(frame, chunks[0], app);

    for (idx, field) in app.form.fields().iter().enumerate() {
        let is_active = app.state.focus == Focus::Field(field.id());
        draw_field(frame, chunks[idx + 1], field, is_active);
    }

    draw_interest(frame, chunks[5], app);
    draw_submit(frame, chunks[6], app);
    draw_confirmation(frame, chunks[7], app);
}

fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let displayed = app.progress.displayed();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
        .percent(u16::from(displayed))
        .label(format!("{displayed}%"));
    frame.render_widget(gauge, area);
}

fn draw_interest(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == Focus::Interest;
    let highlighted = app.state.highlighted_interest();
    let selected = app.form.interest();

    let mut spans = Vec::new();
    for interest in Interest::ALL {
        let marker = if selected == Some(interest) {
            "(•)"
        } else {
            "( )"
        };
        let style = if is_focused && interest == highlighted {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if selected == Some(interest) {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {marker} {interest} "), style));
    }

    let border_color = if is_focused {
        Color::Cyan
    } else if selected.is_some() {
        Color::Green
    } else {
        Color::DarkGray
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Area of Interest ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(paragraph, area);
}

/// Label and accent color of the submit button for the current state
fn submit_label(state: &SubmissionState) -> (&'static str, Option<Color>) {
    match state {
        SubmissionState::Submitting => ("Registering...", Some(Color::Yellow)),
        SubmissionState::Succeeded(_) => ("Registered Successfully!", Some(Color::Green)),
        SubmissionState::Idle | SubmissionState::Failed(_) => ("Register Now", None),
    }
}

fn draw_submit(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.form.submission_state();
    let (label, accent) = submit_label(state);
    render_button(
        frame,
        area,
        label,
        app.state.focus == Focus::Submit,
        state.accepts_submit(),
        accent,
    );
}

fn draw_confirmation(frame: &mut Frame, area: Rect, app: &App) {
    let SubmissionState::Succeeded(info) = app.form.submission_state() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("🎉 {}", info.message),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Registration {} at {}",
                info.registration_id,
                info.registered_at.format("%Y-%m-%d %H:%M UTC")
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
