//! Integration tests for the feed screen: first-run modal, city picking,
//! trek panel, feed filtering and the bottom navigation.
//!
//! Each test builds its own `App` over the built-in catalog and drives it
//! through key presses, then inspects state or a `TestBackend` frame.

use crossterm::event::{KeyCode, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::collections::HashMap;
use std::sync::Arc;
use trekgram::app::App;
use trekgram::catalog::{Catalog, CatalogError, Post};
use trekgram::config::Config;
use trekgram::selection::Tab;
use trekgram::ui::{handle_key, render, Action};

const CITIES: [&str; 5] = ["Mumbai", "Pune", "Nashik", "Bangalore", "Manali"];

fn new_app() -> App {
    App::new(Arc::new(Catalog::builtin()))
}

fn press(app: &mut App, code: KeyCode) -> Action {
    handle_key(app, code, KeyModifiers::NONE)
}

fn keys(app: &mut App, chars: &str) {
    for c in chars.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn frame(app: &mut App) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();
    buffer_lines(terminal.backend().buffer()).join("\n")
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn post_ids(app: &App) -> Vec<u32> {
    app.filtered_posts().iter().map(|p| p.id).collect()
}

// ============================================================================
// First run
// ============================================================================

#[test]
fn test_first_run_shows_modal_with_every_city() {
    let mut app = new_app();
    assert!(app.prompt_visible());

    let screen = frame(&mut app);
    assert!(screen.contains("Welcome to TrekGram!"));
    for (i, city) in CITIES.iter().enumerate() {
        assert!(
            screen.contains(&format!("{}. {}", i + 1, city)),
            "missing button for {}",
            city
        );
    }
}

#[test]
fn test_first_run_feed_lists_all_posts() {
    let app = new_app();
    assert_eq!(post_ids(&app), vec![1, 2, 3, 4]);
    assert!(app.visible_treks().is_empty());
}

// ============================================================================
// Picking a city
// ============================================================================

#[test]
fn test_choose_pune_from_modal() {
    let mut app = new_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert!(!app.prompt_visible());
    assert_eq!(app.selection.selected_city(), Some("Pune"));
    assert_eq!(app.visible_treks(), &["Sinhagad", "Rajgad", "Torna"]);
    assert_eq!(post_ids(&app), vec![1]);

    let screen = frame(&mut app);
    assert!(!screen.contains("Welcome to TrekGram!"));
    assert!(screen.contains("Available Treks in Pune"));
    assert!(screen.contains("120 likes"));
}

#[test]
fn test_choose_nashik_shows_empty_state() {
    let mut app = new_app();
    keys(&mut app, "3");

    assert!(app.filtered_posts().is_empty());
    assert_eq!(app.visible_treks(), &["Kalsubai", "Harihar Fort", "Brahmagiri"]);

    let screen = frame(&mut app);
    assert!(screen
        .contains("No posts found for Nashik. Select another city or check back later!"));
}

#[test]
fn test_every_city_shows_its_own_treks_and_posts() {
    let catalog = Catalog::builtin();
    for (i, city) in CITIES.iter().enumerate() {
        let mut app = new_app();
        keys(&mut app, &(i + 1).to_string());

        assert_eq!(app.selection.selected_city(), Some(*city));
        assert_eq!(app.visible_treks(), catalog.treks_for(city));
        assert!(app.filtered_posts().iter().all(|p| p.city == *city));
        let expected = catalog.posts().iter().filter(|p| p.city == *city).count();
        assert_eq!(app.filtered_posts().len(), expected);
    }
}

#[test]
fn test_switch_city_through_dropdown() {
    let mut app = new_app();
    keys(&mut app, "2"); // Pune
    keys(&mut app, "c");
    assert_eq!(app.dropdown, Some(1));

    keys(&mut app, "jjj"); // Manali
    press(&mut app, KeyCode::Enter);

    assert!(app.dropdown.is_none());
    assert_eq!(app.selection.selected_city(), Some("Manali"));
    assert_eq!(post_ids(&app), vec![2]);
    assert!(frame(&mut app).contains("340 likes"));
}

#[test]
fn test_modal_never_returns_after_selection() {
    let mut app = new_app();
    keys(&mut app, "1");
    keys(&mut app, "c");
    press(&mut app, KeyCode::Esc);
    keys(&mut app, "2");
    keys(&mut app, "T");
    assert!(!app.prompt_visible());
    assert!(!frame(&mut app).contains("Welcome to TrekGram!"));
}

// ============================================================================
// Bottom navigation
// ============================================================================

#[test]
fn test_tabs_only_change_highlight() {
    let mut app = new_app();
    keys(&mut app, "4"); // Bangalore
    let posts_before = post_ids(&app);
    let treks_before = app.visible_treks().to_vec();

    keys(&mut app, "2");
    assert_eq!(app.selection.active_tab(), Tab::Trek);
    assert_eq!(post_ids(&app), posts_before);
    assert_eq!(app.visible_treks(), treks_before.as_slice());

    let screen = frame(&mut app);
    assert!(screen.contains("[Trek Posts]"));
    assert!(screen.contains("210 likes"));
}

#[test]
fn test_selecting_city_leaves_tab_alone() {
    let mut app = new_app();
    keys(&mut app, "5");
    keys(&mut app, "2"); // Trek tab
    keys(&mut app, "c");
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selection.selected_city(), Some("Bangalore"));
    assert_eq!(app.selection.active_tab(), Tab::Trek);
}

// ============================================================================
// Placeholder controls
// ============================================================================

#[test]
fn test_like_and_comment_change_nothing() {
    let mut app = new_app();
    keys(&mut app, "5"); // Manali
    let before = app.selected_post().cloned();

    keys(&mut app, "lmlmnp");

    assert_eq!(app.selected_post().cloned(), before);
    let post = app.catalog.post(2).unwrap();
    assert_eq!(post.likes, 340);
    assert_eq!(post.comments, 89);
}

#[test]
fn test_quit() {
    let mut app = new_app();
    keys(&mut app, "1");
    assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_overrides_apply_to_screen() {
    let config = Config::parse(
        r#"
        theme = "light"

        [keybindings]
        open_city_picker = "s"
        "#,
    )
    .unwrap();

    let mut app = new_app();
    assert!(app.apply_config(&config).is_empty());

    keys(&mut app, "1");
    keys(&mut app, "c");
    assert!(app.dropdown.is_none());
    keys(&mut app, "s");
    assert!(app.dropdown.is_some());
}

// ============================================================================
// Custom catalogs
// ============================================================================

fn post(id: u32, city: &str, trek: &str) -> Post {
    Post {
        id,
        author: format!("hiker_{}", id),
        city: city.to_string(),
        trek: trek.to_string(),
        image_url: "https://images.unsplash.com/photo-1".to_string(),
        caption: "Misty ridge".to_string(),
        likes: id * 10,
        comments: id,
    }
}

#[test]
fn test_custom_catalog_keeps_post_order() {
    let treks = HashMap::from([
        ("Lonavala".to_string(), vec!["Rajmachi".to_string()]),
        ("Satara".to_string(), vec!["Ajinkyatara".to_string()]),
    ]);
    let catalog = Catalog::new(
        vec!["Lonavala".to_string(), "Satara".to_string()],
        treks,
        vec![
            post(7, "Satara", "Ajinkyatara"),
            post(3, "Lonavala", "Rajmachi"),
            post(5, "Satara", "Kaas Plateau"),
        ],
    )
    .unwrap();

    let mut app = App::new(Arc::new(catalog));
    keys(&mut app, "2");
    assert_eq!(post_ids(&app), vec![7, 5]);
    assert!(frame(&mut app).contains("Available Treks in Satara"));
}

#[test]
fn test_custom_catalog_rejects_unknown_post_city() {
    let treks = HashMap::from([("Lonavala".to_string(), vec!["Rajmachi".to_string()])]);
    let err = Catalog::new(
        vec!["Lonavala".to_string()],
        treks,
        vec![post(1, "Goa", "Dudhsagar")],
    )
    .unwrap_err();
    assert_eq!(
        err,
        CatalogError::UnknownPostCity {
            id: 1,
            city: "Goa".to_string()
        }
    );
}
