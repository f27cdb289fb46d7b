//! Tests for the CSV store
//!
//! Load/save/seed behavior against real temporary files.

use cinetui::{default_movies, Catalog, CsvStore, Movie};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> CsvStore {
    CsvStore::new(dir.path().join("movies_data.csv"))
}

#[test]
fn test_load_nonexistent_file_yields_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let catalog = store.load().unwrap();
    assert!(catalog.is_empty());
    // load() must not create the file as a side effect
    assert!(!store.path().exists());
}

#[test]
fn test_seeding_writes_the_five_named_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.seed_if_missing().unwrap());
    let catalog = store.load().unwrap();

    let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Inception",
            "The Dark Knight",
            "Interstellar",
            "The Shawshank Redemption",
            "Pulp Fiction",
        ]
    );
}

#[test]
fn test_seeding_does_not_overwrite_existing_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut catalog = Catalog::new();
    catalog.add(Movie::new("Heat", 8.3, 187.4, 1995, "Crime"));
    store.save(&catalog).unwrap();

    assert!(!store.seed_if_missing().unwrap());
    assert_eq!(store.load().unwrap(), catalog);
}

#[test]
fn test_save_load_round_trip_preserves_records() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut catalog = Catalog::from_movies(default_movies());
    catalog.add(Movie::new("M", 8.3, 0.8, 1931, "Thriller"));
    store.save(&catalog).unwrap();

    assert_eq!(store.load().unwrap(), catalog);
}

#[test]
fn test_save_of_loaded_catalog_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.seed_if_missing().unwrap();

    let before = std::fs::read_to_string(store.path()).unwrap();
    let catalog = store.load().unwrap();
    store.save(&catalog).unwrap();
    let after = std::fs::read_to_string(store.path()).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_save_overwrites_rather_than_appends() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&Catalog::from_movies(default_movies())).unwrap();
    let mut catalog = store.load().unwrap();
    catalog.delete("Inception").unwrap();
    store.save(&catalog).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 4);
}

#[test]
fn test_load_malformed_row_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        "title,average_rating,box_office,release_year,genre\nHeat,eight,187.4,1995,Crime\n",
    )
    .unwrap();

    assert!(store.load().is_err());
}
