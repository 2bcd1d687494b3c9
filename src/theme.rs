//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette: semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header --
    pub header_title: Style,
    pub header_icon: Style,

    // -- Controls --
    pub picker: Style,
    pub picker_placeholder: Style,
    pub trek_heading: Style,
    pub trek_tag: Style,

    // -- Feed --
    pub post_author: Style,
    pub post_trek: Style,
    pub post_image: Style,
    pub post_action: Style,
    pub post_likes: Style,
    pub post_caption: Style,
    pub post_selected: Style,
    pub empty_state: Style,

    // -- Bottom navigation --
    pub nav_active: Style,
    pub nav_inactive: Style,

    // -- Overlays --
    pub modal_title: Style,
    pub modal_body: Style,
    pub modal_button: Style,
    pub modal_button_selected: Style,
    pub dropdown_disabled: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
    pub help_heading: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            header_icon: Style::default().fg(Color::Cyan),

            picker: Style::default().fg(Color::White),
            picker_placeholder: Style::default().fg(Color::DarkGray),
            trek_heading: Style::default().add_modifier(Modifier::BOLD),
            trek_tag: Style::default().bg(Color::DarkGray).fg(Color::White),

            post_author: Style::default().add_modifier(Modifier::BOLD),
            post_trek: Style::default().fg(Color::Cyan),
            post_image: Style::default().fg(Color::Blue),
            post_action: Style::default().fg(Color::Gray),
            post_likes: Style::default().add_modifier(Modifier::BOLD),
            post_caption: Style::default(),
            post_selected: Style::default().bg(Color::Rgb(40, 40, 40)),
            empty_state: Style::default().fg(Color::Gray),

            nav_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            nav_inactive: Style::default().fg(Color::Gray),

            modal_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            modal_body: Style::default(),
            modal_button: Style::default().fg(Color::White),
            modal_button_selected: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            dropdown_disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
            help_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light palette, adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header_icon: Style::default().fg(Color::Blue),

            picker: Style::default().fg(Color::Black),
            picker_placeholder: Style::default().fg(Color::DarkGray),
            trek_heading: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            trek_tag: Style::default().bg(Color::Blue).fg(Color::White),

            post_author: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            post_trek: Style::default().fg(Color::Blue),
            post_image: Style::default().fg(Color::Magenta),
            post_action: Style::default().fg(Color::DarkGray),
            post_likes: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            post_caption: Style::default().fg(Color::Black),
            post_selected: Style::default().bg(Color::Rgb(225, 225, 225)),
            empty_state: Style::default().fg(Color::DarkGray),

            nav_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            nav_inactive: Style::default().fg(Color::DarkGray),

            modal_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            modal_body: Style::default().fg(Color::Black),
            modal_button: Style::default().fg(Color::Black),
            modal_button_selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            dropdown_disabled: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
            help_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }
}

// ============================================================================
// Style Map: string-keyed lookup
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this resolves role names (e.g. `"post_author"`)
/// to their concrete `Style` at render time.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 25] = [
    "header_title",
    "header_icon",
    "picker",
    "picker_placeholder",
    "trek_heading",
    "trek_tag",
    "post_author",
    "post_trek",
    "post_image",
    "post_action",
    "post_likes",
    "post_caption",
    "post_selected",
    "empty_state",
    "nav_active",
    "nav_inactive",
    "modal_title",
    "modal_body",
    "modal_button",
    "modal_button_selected",
    "dropdown_disabled",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "help_heading",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 25] = [
            p.header_title,
            p.header_icon,
            p.picker,
            p.picker_placeholder,
            p.trek_heading,
            p.trek_tag,
            p.post_author,
            p.post_trek,
            p.post_image,
            p.post_action,
            p.post_likes,
            p.post_caption,
            p.post_selected,
            p.empty_state,
            p.nav_active,
            p.nav_inactive,
            p.modal_title,
            p.modal_body,
            p.modal_button,
            p.modal_button_selected,
            p.dropdown_disabled,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.help_heading,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
