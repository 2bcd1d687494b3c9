//! Input handling for the TUI.
//!
//! This module processes keyboard input and dispatches to the appropriate
//! handler. Overlays capture keys in priority order: help, first-run modal,
//! city dropdown, then the feed screen itself.

use crate::app::App;
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crate::selection::Tab;
use crate::util::validate_url_for_open;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
///
/// Routes input to the handler for whichever layer is on top.
pub fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    // Help overlay captures all keys when visible
    if app.show_help {
        return handle_help_input(app, code);
    }

    if app.prompt_visible() {
        return handle_prompt_input(app, code, modifiers);
    }

    if app.dropdown.is_some() {
        return handle_dropdown_input(app, code, modifiers);
    }

    handle_feed_input(app, code, modifiers)
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let last = super::help::line_count(app).saturating_sub(1);
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

fn open_help(app: &mut App) {
    app.show_help = true;
    app.help_scroll_offset = 0;
}

fn cycle_theme(app: &mut App) {
    let name = app.cycle_theme();
    app.set_status(format!("Theme: {}", name));
}

/// Handle input while the first-run modal is visible.
///
/// The modal blocks the feed: only movement, choosing, help, theme and quit
/// get through. Digits 1-9 choose the matching city button directly.
fn handle_prompt_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    if let KeyCode::Char(c @ '1'..='9') = code {
        if modifiers == KeyModifiers::NONE {
            let index = (c as usize) - ('1' as usize);
            app.choose_city_at(index);
            return Action::Continue;
        }
    }

    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::CityPrompt)
    {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::MoveDown) => app.modal_down(),
        Some(KbAction::MoveUp) => app.modal_up(),
        Some(KbAction::Select) => app.modal_choose(),
        Some(KbAction::ShowHelp) => open_help(app),
        Some(KbAction::CycleTheme) => cycle_theme(app),
        _ => {}
    }
    Action::Continue
}

/// Handle input while the city dropdown is open.
fn handle_dropdown_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::CityDropdown)
    {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::MoveDown) => app.dropdown_down(),
        Some(KbAction::MoveUp) => app.dropdown_up(),
        Some(KbAction::Select) => app.dropdown_choose(),
        Some(KbAction::Back) => app.close_dropdown(),
        Some(KbAction::ShowHelp) => open_help(app),
        _ => {}
    }
    Action::Continue
}

/// Handle input on the feed screen with no overlay open.
fn handle_feed_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    let Some(action) = app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Global)
    else {
        return Action::Continue;
    };

    match action {
        KbAction::Quit => return Action::Quit,
        KbAction::MoveDown => app.feed_down(),
        KbAction::MoveUp => app.feed_up(),
        KbAction::OpenCityPicker => app.open_dropdown(),
        KbAction::ShowCityTab => app.set_active_tab(Tab::City),
        KbAction::ShowTrekTab => app.set_active_tab(Tab::Trek),
        KbAction::ToggleTab => {
            let next = app.selection.active_tab().other();
            app.set_active_tab(next);
        }
        KbAction::Like => app.like_post(),
        KbAction::Comment => app.comment_on_post(),
        KbAction::AddPost => app.add_post(),
        KbAction::Profile => app.open_profile(),
        KbAction::OpenImage => open_selected_image(app),
        KbAction::CycleTheme => cycle_theme(app),
        KbAction::ShowHelp => open_help(app),
        // Overlay-only actions
        KbAction::Select | KbAction::Back => {}
    }
    Action::Continue
}

/// Open the selected post's image in the system browser.
fn open_selected_image(app: &mut App) {
    let Some(url) = app.selected_post().map(|p| p.image_url.clone()) else {
        app.set_status("No post selected");
        return;
    };

    // Validate before open::that() so only http(s) URLs reach the system opener
    match validate_url_for_open(&url) {
        Err(e) => app.set_status(e),
        Ok(url) => match open::that(url.as_str()) {
            Ok(()) => app.set_status("Opening image..."),
            Err(e) => app.set_status(format!("Failed to open browser: {}", e)),
        },
    }
}
