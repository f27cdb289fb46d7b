//! cinetui library
//!
//! Core functionality for the terminal movie-catalog tool: the catalog and
//! its CSV persistence, plus the TUI application built on top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod error;
pub mod movie;
pub mod store;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{AddFormState, App, AppMode, AppState, MenuItem};
pub use catalog::Catalog;
pub use cli::Cli;
pub use error::{CineTuiError, Result};
pub use movie::{default_movies, Movie, MovieDraft};
pub use store::CsvStore;
