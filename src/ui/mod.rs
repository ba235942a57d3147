//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, form_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area);
    forms::draw_registration(frame, form_area, app);
    layout::draw_status_bar(frame, app);

    if let Some(notification) = &app.state.notification {
        components::render_toast(frame, notification);
    }
}
