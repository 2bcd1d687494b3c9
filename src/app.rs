use crate::catalog::{Catalog, Post};
use crate::config::Config;
use crate::keybindings::KeybindingRegistry;
use crate::selection::{Selection, Tab};
use crate::theme::{StyleMap, ThemeVariant};
use ratatui::style::Style;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::time::Instant;

/// Status messages disappear after this many seconds.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Application State
// ============================================================================

/// Central application state for the feed screen.
///
/// `selection` holds the three fields the screen is derived from. Everything
/// else here is terminal presentation: cursors, overlays, theme and the
/// status line.
pub struct App {
    /// Injected read-only catalog.
    pub catalog: Arc<Catalog>,
    pub selection: Selection,

    // Theme
    /// Current theme variant (for cycling).
    pub theme_variant: ThemeVariant,
    /// Active style map for all UI rendering.
    pub theme: StyleMap,

    /// Keybinding registry for action-key mapping with config overrides.
    pub keybindings: KeybindingRegistry,

    // Cursors
    /// Highlighted card in the filtered feed.
    pub selected_post: usize,
    /// Highlighted city button in the first-run modal.
    pub modal_cursor: usize,
    /// Open city dropdown and its highlighted city index.
    pub dropdown: Option<usize>,

    // Help overlay
    pub show_help: bool,
    pub help_scroll_offset: usize,

    /// Status bar message with the time it was set.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Set whenever state changes; the loop only draws when this is true.
    pub needs_redraw: bool,

    /// Log the selected city at debug level on every frame.
    pub debug_render: bool,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let theme_variant = ThemeVariant::Dark;
        Self {
            catalog,
            selection: Selection::new(),
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            keybindings: KeybindingRegistry::new(),
            selected_post: 0,
            modal_cursor: 0,
            dropdown: None,
            show_help: false,
            help_scroll_offset: 0,
            status_message: None,
            needs_redraw: true,
            debug_render: false,
        }
    }

    /// Apply theme, debug flag and keybinding overrides from config.
    ///
    /// Returns warnings for anything that could not be applied.
    pub fn apply_config(&mut self, config: &Config) -> Vec<String> {
        let mut warnings = Vec::new();

        match ThemeVariant::from_str_name(&config.theme) {
            Some(variant) => self.set_theme(variant),
            None => warnings.push(format!(
                "Unknown theme '{}', using {}",
                config.theme,
                self.theme_variant.name()
            )),
        }

        self.debug_render = config.debug_render;
        warnings.extend(self.keybindings.apply_overrides(&config.keybindings));
        warnings
    }

    // ------------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------------

    /// Resolve a semantic role to its style in the active theme.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Switch to the next theme variant and return its display name.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Choose a city from the modal or the dropdown.
    ///
    /// Hides the first-run prompt, closes the dropdown and moves the feed
    /// cursor back to the top.
    pub fn select_city(&mut self, city: &str) {
        self.selection.select_city(city);
        self.dropdown = None;
        self.selected_post = 0;
        self.needs_redraw = true;
        tracing::debug!(
            city = %city,
            known = self.catalog.is_known_city(city),
            "City selected"
        );
    }

    /// Switch the bottom navigation tab. The feed is unaffected.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.selection.set_active_tab(tab);
        self.needs_redraw = true;
    }

    pub fn filtered_posts(&self) -> Vec<&Post> {
        self.selection.filtered_posts(&self.catalog)
    }

    pub fn visible_treks(&self) -> &[String] {
        self.selection.visible_treks(&self.catalog)
    }

    pub fn prompt_visible(&self) -> bool {
        self.selection.prompt_visible()
    }

    /// The post under the feed cursor, if the feed is not empty.
    pub fn selected_post(&self) -> Option<&Post> {
        self.filtered_posts().get(self.selected_post).copied()
    }

    // ------------------------------------------------------------------------
    // Feed cursor
    // ------------------------------------------------------------------------

    pub fn feed_down(&mut self) {
        let len = self.filtered_posts().len();
        if len > 0 {
            self.selected_post = self.selected_post.saturating_add(1).min(len - 1);
        }
    }

    pub fn feed_up(&mut self) {
        self.selected_post = self.selected_post.saturating_sub(1);
    }

    /// Keep cursors inside their lists.
    pub fn clamp_selections(&mut self) {
        let posts = self.filtered_posts().len();
        self.selected_post = self.selected_post.min(posts.saturating_sub(1));

        let cities = self.catalog.cities().len();
        self.modal_cursor = self.modal_cursor.min(cities.saturating_sub(1));
        if let Some(cursor) = self.dropdown.as_mut() {
            *cursor = (*cursor).min(cities.saturating_sub(1));
        }
    }

    // ------------------------------------------------------------------------
    // First-run modal
    // ------------------------------------------------------------------------

    pub fn modal_down(&mut self) {
        let len = self.catalog.cities().len();
        if len > 0 {
            self.modal_cursor = self.modal_cursor.saturating_add(1).min(len - 1);
        }
    }

    pub fn modal_up(&mut self) {
        self.modal_cursor = self.modal_cursor.saturating_sub(1);
    }

    /// Choose the highlighted modal button.
    pub fn modal_choose(&mut self) {
        self.choose_city_at(self.modal_cursor);
    }

    /// Choose the city at `index` in catalog order. Out-of-range is ignored.
    pub fn choose_city_at(&mut self, index: usize) {
        if let Some(city) = self.catalog.cities().get(index).cloned() {
            self.select_city(&city);
        }
    }

    // ------------------------------------------------------------------------
    // City dropdown
    // ------------------------------------------------------------------------

    /// Open the dropdown with the current city highlighted.
    pub fn open_dropdown(&mut self) {
        let current = self
            .selection
            .selected_city()
            .and_then(|city| self.catalog.cities().iter().position(|c| c == city))
            .unwrap_or(0);
        self.dropdown = Some(current);
        self.needs_redraw = true;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
        self.needs_redraw = true;
    }

    pub fn dropdown_down(&mut self) {
        let len = self.catalog.cities().len();
        if let Some(cursor) = self.dropdown.as_mut() {
            if len > 0 {
                *cursor = cursor.saturating_add(1).min(len - 1);
            }
        }
    }

    pub fn dropdown_up(&mut self) {
        if let Some(cursor) = self.dropdown.as_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Choose the highlighted dropdown row and close the dropdown.
    pub fn dropdown_choose(&mut self) {
        if let Some(cursor) = self.dropdown.take() {
            self.choose_city_at(cursor);
            self.needs_redraw = true;
        }
    }

    // ------------------------------------------------------------------------
    // Placeholder controls
    // ------------------------------------------------------------------------

    // These handlers are bound to keys but deliberately change nothing: the
    // like/comment counts are catalog data and there is no post composer or
    // profile screen.

    /// Header `[+]` icon.
    pub fn add_post(&self) {
        tracing::debug!("Add post pressed (no-op)");
    }

    /// Header `[@]` icon.
    pub fn open_profile(&self) {
        tracing::debug!("Profile pressed (no-op)");
    }

    pub fn like_post(&self) {
        if let Some(post) = self.selected_post() {
            tracing::debug!(post_id = post.id, "Like pressed (no-op)");
        }
    }

    pub fn comment_on_post(&self) {
        if let Some(post) = self.selected_post() {
            tracing::debug!(post_id = post.id, "Comment pressed (no-op)");
        }
    }

    // ------------------------------------------------------------------------
    // Status bar
    // ------------------------------------------------------------------------

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear status message if expired.
    /// Returns true if a message was actually cleared
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Per-frame diagnostic, only when `debug_render` is on.
    pub fn trace_render(&self) {
        if self.debug_render {
            tracing::debug!(
                selected_city = self.selection.selected_city().unwrap_or(""),
                "Rendering feed screen"
            );
        }
    }
}
