//! Render functions for the TUI.
//!
//! This module lays out the feed screen top to bottom (header, controls,
//! feed, bottom navigation, status bar) and draws any open overlay on top.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::{controls, dropdown, feed, header, help, modal, nav, status};

/// Minimum terminal dimensions required for normal operation.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

const HEADER_HEIGHT: u16 = 3;
const NAV_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Main render function.
///
/// Handles terminal size validation before rendering.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        // For very small terminals (less than 3 lines), just show minimal message
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(controls::height(app)),
            Constraint::Min(0),
            Constraint::Length(NAV_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    header::render(f, app, chunks[0]);
    controls::render(f, app, chunks[1]);
    feed::render(f, app, chunks[2]);
    nav::render(f, app, chunks[3]);
    status::render(f, app, chunks[4]);

    if let Some(cursor) = app.dropdown {
        dropdown::render(f, app, cursor);
    }

    if app.prompt_visible() {
        modal::render(f, app);
    }

    // Help goes last so it covers the modal as well
    if app.show_help {
        help::render(f, app);
    }
}
