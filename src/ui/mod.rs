//! Terminal User Interface module.
//!
//! This module provides the TUI for the TrekGram feed screen, including:
//! - Main event loop (`run`)
//! - Input handling for the feed, the first-run modal and the city dropdown
//! - Rendering for every section of the screen and its overlays
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `render` - Layout and overlay dispatch
//! - `header` - Title bar with the add-post and profile icons
//! - `controls` - City picker and available treks panel
//! - `feed` - Post cards and the empty state
//! - `nav` - Bottom navigation tabs
//! - `modal` - First-run city modal
//! - `dropdown` - City dropdown overlay
//! - `help` - Keybinding help overlay
//! - `status` - Status bar widget

mod controls;
mod dropdown;
mod feed;
mod header;
mod help;
mod input;
mod loop_runner;
mod modal;
mod nav;
mod render;
mod status;

// Re-export the public API
pub use input::handle_key;
pub use loop_runner::{run, Action};
pub use render::{render, MIN_HEIGHT, MIN_WIDTH};

use ratatui::layout::Rect;

/// Create a rectangle of at most `width` x `height`, centered in `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
