//! Render module - UI rendering

pub mod browser;
pub mod dialog;
pub mod editor;
pub mod format;
pub mod theme;

use ratatui::Frame;

use crate::app::frontend::Screen;

pub use browser::abbreviate_path;
pub use format::{format_relative_time, format_size};
pub use theme::{parse_color, Theme};

/// Draw a full frame for `screen`
pub fn draw_screen(frame: &mut Frame, screen: &Screen<'_>, theme: &Theme) {
    let area = frame.area();
    match screen {
        Screen::Browser {
            list,
            notice,
            status,
        } => browser::render_browser(frame, area, list, *notice, *status, theme),
        Screen::Menu { list } => dialog::render_menu(frame, area, list, theme),
        Screen::Editor(view) => editor::render_editor(frame, area, view, theme),
        Screen::Message { title, lines } => {
            dialog::render_message(frame, area, title, lines, theme)
        }
        Screen::Progress { label, tick } => {
            dialog::render_progress(frame, area, label, *tick, theme)
        }
    }
}
