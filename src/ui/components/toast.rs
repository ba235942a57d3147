//! Toast notification overlay

use crate::state::{Notification, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render `notification` in the top-right corner
pub fn render_toast(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let (icon, color) = match notification.kind {
        NotificationKind::Error => ("⚠", Color::Red),
        NotificationKind::Success => ("✓", Color::Green),
    };

    let text = format!("{icon} {}", notification.message);
    // +4 for borders and one space of padding on each side
    let width = (text.chars().count() as u16 + 4).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: 3u16.min(area.height),
    };

    frame.render_widget(Clear, toast_area);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {text} "),
        Style::default().fg(Color::White),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(paragraph, toast_area);
}
