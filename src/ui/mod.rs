//! User Interface Module
//!
//! Rendering for the terminal recipe browser. Everything here reads from
//! [`App`]; state changes happen in the key handlers.

pub mod browser;
pub mod components;
pub mod detail;
pub mod theme;

use crate::app::{App, InputMode};
use ratatui::Frame;

/// Draws the browser page and whichever popup is open on top of it.
pub fn render(frame: &mut Frame, app: &App) {
    browser::render(frame, app);

    if app.detail.is_some() {
        detail::render_detail_popup(frame, app);
    }
    if app.input_mode == InputMode::HelpMenu {
        components::render_help_popup(frame);
    }
}
