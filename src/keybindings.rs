//! Keybinding registry: maps actions to key events with config overrides.
//!
//! Every key the feed screen reacts to goes through this registry, so user
//! overrides from config.toml apply to all of them.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    Select,
    Back,
    OpenCityPicker,
    ShowCityTab,
    ShowTrekTab,
    ToggleTab,
    Like,
    Comment,
    AddPost,
    Profile,
    OpenImage,
    CycleTheme,
    ShowHelp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::MoveDown => "Move down",
            Self::MoveUp => "Move up",
            Self::Select => "Choose highlighted city",
            Self::Back => "Close",
            Self::OpenCityPicker => "Pick a city",
            Self::ShowCityTab => "Show City Posts tab",
            Self::ShowTrekTab => "Show Trek Posts tab",
            Self::ToggleTab => "Switch tab",
            Self::Like => "Like post",
            Self::Comment => "Comment on post",
            Self::AddPost => "Add a post",
            Self::Profile => "Open profile",
            Self::OpenImage => "Open post image in browser",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context. Determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// The feed screen with no overlay open.
    Global,
    /// First-run city modal.
    CityPrompt,
    /// City dropdown opened from the controls section.
    CityDropdown,
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "Up", "Down", "Backspace"
/// - Modifier combos: "Ctrl+d", "Ctrl+u"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let rest = rest.trim();
        if rest.chars().count() == 1 {
            let c = rest.chars().next()?;
            return Some(KeySpec::ctrl(c));
        }
        return None;
    }

    // Named keys (case-insensitive)
    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    if let Some(num) = s.strip_prefix(['F', 'f']) {
        if let Ok(n) = num.parse::<u8>() {
            if (1..=12).contains(&n) {
                return Some(KeySpec::plain(KeyCode::F(n)));
            }
        }
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::plain(KeyCode::Char(c))),
        _ => None,
    }
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// The same key can map to different actions in different contexts; lookups
/// in an overlay context fall back to Global.
pub struct KeybindingRegistry {
    /// Primary lookup: (Context, KeySpec) -> Action
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings for help screen enumeration
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    /// Create a registry with the default bindings.
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn bind_chars(&mut self, context: Context, chars: &[char], action: Action) {
        for &c in chars {
            self.bind(context, KeySpec::plain(KeyCode::Char(c)), action);
        }
    }

    fn register_defaults(&mut self) {
        use Context::{CityDropdown, CityPrompt, Global};

        // === Feed screen ===
        self.bind_chars(Global, &['q'], Action::Quit);
        self.bind(Global, KeySpec::ctrl('c'), Action::Quit);

        self.bind_chars(Global, &['j'], Action::MoveDown);
        self.bind(Global, KeySpec::plain(KeyCode::Down), Action::MoveDown);
        self.bind_chars(Global, &['k'], Action::MoveUp);
        self.bind(Global, KeySpec::plain(KeyCode::Up), Action::MoveUp);

        self.bind_chars(Global, &['c'], Action::OpenCityPicker);
        self.bind(Global, KeySpec::plain(KeyCode::Enter), Action::OpenCityPicker);

        // Bottom navigation
        self.bind_chars(Global, &['1'], Action::ShowCityTab);
        self.bind_chars(Global, &['2'], Action::ShowTrekTab);
        self.bind(Global, KeySpec::plain(KeyCode::Tab), Action::ToggleTab);

        // Post actions and header icons
        self.bind_chars(Global, &['l'], Action::Like);
        self.bind_chars(Global, &['m'], Action::Comment);
        self.bind_chars(Global, &['n'], Action::AddPost);
        self.bind_chars(Global, &['p'], Action::Profile);
        self.bind_chars(Global, &['o'], Action::OpenImage);

        self.bind_chars(Global, &['T'], Action::CycleTheme);
        self.bind_chars(Global, &['?'], Action::ShowHelp);

        // === First-run modal ===
        self.bind_chars(CityPrompt, &['j'], Action::MoveDown);
        self.bind(CityPrompt, KeySpec::plain(KeyCode::Down), Action::MoveDown);
        self.bind(CityPrompt, KeySpec::plain(KeyCode::Right), Action::MoveDown);
        self.bind_chars(CityPrompt, &['k'], Action::MoveUp);
        self.bind(CityPrompt, KeySpec::plain(KeyCode::Up), Action::MoveUp);
        self.bind(CityPrompt, KeySpec::plain(KeyCode::Left), Action::MoveUp);
        self.bind(CityPrompt, KeySpec::plain(KeyCode::Enter), Action::Select);

        // === City dropdown ===
        self.bind_chars(CityDropdown, &['j'], Action::MoveDown);
        self.bind(CityDropdown, KeySpec::plain(KeyCode::Down), Action::MoveDown);
        self.bind_chars(CityDropdown, &['k'], Action::MoveUp);
        self.bind(CityDropdown, KeySpec::plain(KeyCode::Up), Action::MoveUp);
        self.bind(CityDropdown, KeySpec::plain(KeyCode::Enter), Action::Select);
        self.bind(CityDropdown, KeySpec::plain(KeyCode::Esc), Action::Back);
        self.bind_chars(CityDropdown, &['c'], Action::Back);
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "like").
    /// Values are key strings (e.g., "q", "Ctrl+d", "F5").
    ///
    /// Returns a list of warnings for unrecognized action names or unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let action = match parse_action_name(action_name) {
                Some(a) => a,
                None => {
                    warnings.push(format!("Unknown action '{}', ignoring", action_name));
                    continue;
                }
            };

            let key = match parse_key_string(key_str) {
                Some(k) => k,
                None => {
                    warnings.push(format!(
                        "Cannot parse key '{}' for action '{}', ignoring",
                        key_str, action_name
                    ));
                    continue;
                }
            };

            // Contexts the action was bound in, deduplicated, in first-seen order
            let mut contexts_for_action: Vec<Context> = Vec::new();
            for (ctx, _, a) in &self.bindings {
                if *a == action && !contexts_for_action.contains(ctx) {
                    contexts_for_action.push(*ctx);
                }
            }

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts_for_action {
                // A key holds one action per context; the override displaces the old one
                if let Some(displaced) = self.lookup.get(&(ctx, key)).copied() {
                    self.bindings
                        .retain(|(c, k, a)| !(*c == ctx && *k == key && *a == displaced));
                    warnings.push(format!(
                        "Key '{}' for action '{}' replaces {:?} in {:?}",
                        key_str, action_name, displaced, ctx
                    ));
                }
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global.
    /// Terminals report SHIFT alongside uppercase chars; the char already
    /// carries the case, so SHIFT is ignored for `KeyCode::Char`.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let modifiers = match code {
            KeyCode::Char(_) => modifiers - KeyModifiers::SHIFT,
            _ => modifiers,
        };
        let key = KeySpec::new(code, modifiers);

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, key)) {
                return Some(action);
            }
        }

        None
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "move_down" | "movedown" | "down" => Some(Action::MoveDown),
        "move_up" | "moveup" | "up" => Some(Action::MoveUp),
        "select" | "choose" => Some(Action::Select),
        "back" | "close" => Some(Action::Back),
        "open_city_picker" | "city_picker" | "city" => Some(Action::OpenCityPicker),
        "show_city_tab" | "city_tab" => Some(Action::ShowCityTab),
        "show_trek_tab" | "trek_tab" => Some(Action::ShowTrekTab),
        "toggle_tab" | "toggletab" | "tab" => Some(Action::ToggleTab),
        "like" => Some(Action::Like),
        "comment" => Some(Action::Comment),
        "add_post" | "addpost" | "post" => Some(Action::AddPost),
        "profile" => Some(Action::Profile),
        "open_image" | "openimage" | "open" => Some(Action::OpenImage),
        "cycle_theme" | "cycletheme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
