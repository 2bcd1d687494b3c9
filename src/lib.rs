//! TrekGram: a single-screen trekking photo feed for the terminal.
//!
//! The feed is driven by a fixed [`catalog::Catalog`] and a small
//! [`selection::Selection`]: pick a city and the screen shows its treks and
//! the posts taken there.

pub mod app;
pub mod catalog;
pub mod config;
pub mod keybindings;
pub mod selection;
pub mod theme;
pub mod ui;
pub mod util;
