//! End-to-end key-driven tests
//!
//! Drives the App's key dispatch directly (no terminal) and checks that menu
//! actions mutate the catalog and the backing file the way the numeric menu
//! promises.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use cinetui::{App, AppMode, CsvStore};

fn seeded_app(dir: &TempDir) -> (App, CsvStore) {
    let store = CsvStore::new(dir.path().join("movies_data.csv"));
    store.seed_if_missing().unwrap();
    let catalog = store.load().unwrap();
    (App::new(store.clone(), catalog), store)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill the add form in prompt order, submitting with Enter after each field.
fn submit_add(app: &mut App, fields: [&str; 5]) {
    press(app, KeyCode::Char('2'));
    assert_eq!(app.state().mode, AppMode::AddMovie);
    for field in fields {
        type_text(app, field);
        press(app, KeyCode::Enter);
    }
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_flow_appends_and_persists() {
    let dir = TempDir::new().unwrap();
    let (mut app, store) = seeded_app(&dir);

    submit_add(&mut app, ["Heat", "8.3", "187.4", "1995", "Crime"]);

    assert_eq!(app.state().mode, AppMode::MainMenu);
    assert_eq!(app.catalog().len(), 6);
    assert_eq!(app.catalog().movies().last().unwrap().title, "Heat");

    // The add was saved immediately
    let on_disk = store.load().unwrap();
    assert_eq!(on_disk.len(), 6);
}

#[test]
fn test_add_with_bad_rating_is_aborted_whole() {
    let dir = TempDir::new().unwrap();
    let (mut app, store) = seeded_app(&dir);

    submit_add(&mut app, ["Heat", "very good", "187.4", "1995", "Crime"]);

    assert_eq!(app.state().mode, AppMode::MainMenu);
    assert_eq!(app.catalog().len(), 5);
    assert!(app.state().status_message.contains("invalid rating"));
    // No save happened either
    assert_eq!(store.load().unwrap().len(), 5);
}

#[test]
fn test_add_escape_cancels_without_mutation() {
    let dir = TempDir::new().unwrap();
    let (mut app, _store) = seeded_app(&dir);

    press(&mut app, KeyCode::Char('2'));
    type_text(&mut app, "Heat");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.state().mode, AppMode::MainMenu);
    assert!(app.state().add_form.is_none());
    assert_eq!(app.catalog().len(), 5);
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_flow_is_case_insensitive_and_persists() {
    let dir = TempDir::new().unwrap();
    let (mut app, store) = seeded_app(&dir);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state().mode, AppMode::DeleteMovie);
    type_text(&mut app, "inception");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.catalog().len(), 4);
    assert!(app.state().status_message.contains("deleted"));

    let on_disk = store.load().unwrap();
    assert!(!on_disk.movies().iter().any(|m| m.title == "Inception"));
}

#[test]
fn test_delete_missing_title_reports_not_found_and_skips_save() {
    let dir = TempDir::new().unwrap();
    let (mut app, store) = seeded_app(&dir);
    let before = std::fs::read_to_string(store.path()).unwrap();

    press(&mut app, KeyCode::Char('3'));
    type_text(&mut app, "Nonexistent");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.catalog().len(), 5);
    assert!(app.state().status_message.contains("not found"));
    // File untouched because nothing changed
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

// =============================================================================
// Visualize and quit
// =============================================================================

#[test]
fn test_visualize_opens_chart_and_escape_returns() {
    let dir = TempDir::new().unwrap();
    let (mut app, _store) = seeded_app(&dir);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.state().mode, AppMode::Chart);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().mode, AppMode::MainMenu);
}

#[test]
fn test_visualize_with_empty_catalog_is_refused() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("movies_data.csv"));
    let mut app = App::new(store.clone(), store.load().unwrap());

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.state().mode, AppMode::MainMenu);
    assert!(app.state().status_message.contains("No movie data"));
}

#[test]
fn test_quit_via_digit_and_via_q() {
    let dir = TempDir::new().unwrap();
    let (mut app, _store) = seeded_app(&dir);
    assert!(press(&mut app, KeyCode::Char('4')));

    let (mut app, _store) = seeded_app(&dir);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn test_menu_navigation_wraps() {
    let dir = TempDir::new().unwrap();
    let (mut app, _store) = seeded_app(&dir);

    press(&mut app, KeyCode::Up);
    assert_eq!(app.state().menu_selection, 3);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.state().menu_selection, 0);
}
