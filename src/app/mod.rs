//! Application module
//!
//! Owns the event loop and the session state: the loaded catalog, the store
//! it persists through, and the UI mode machine. Every successful add or
//! delete is saved immediately; store failures are reported in the status
//! line and never escape the loop.

mod state;

pub use state::{AddFormState, AppMode, AppState, MenuItem};

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::components::TextPromptState;
use crate::error::Result;
use crate::store::CsvStore;
use crate::ui::UiRenderer;

/// How long to block on the event queue before redrawing.
const TICK_RATE: Duration = Duration::from_millis(200);

/// Main application struct
pub struct App {
    state: AppState,
    catalog: Catalog,
    store: CsvStore,
    ui_renderer: UiRenderer,
}

impl App {
    pub fn new(store: CsvStore, catalog: Catalog) -> Self {
        info!(count = catalog.len(), "starting session");
        Self {
            state: AppState::default(),
            catalog,
            store,
            ui_renderer: UiRenderer::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the event loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.ui_renderer.render(f, &self.state, &self.catalog))?;

            if !event::poll(TICK_RATE)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.handle_key(key)? {
                    info!("exiting");
                    return Ok(());
                }
            }
        }
    }

    /// Dispatch a key press; returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.state.mode {
            AppMode::MainMenu => self.handle_main_menu_key(key.code),
            AppMode::Chart => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.state.mode = AppMode::MainMenu;
                }
                Ok(false)
            }
            AppMode::AddMovie => {
                self.handle_add_key(key.code);
                Ok(false)
            }
            AppMode::DeleteMovie => {
                self.handle_delete_key(key.code);
                Ok(false)
            }
        }
    }

    fn handle_main_menu_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.menu_selection =
                    (self.state.menu_selection + MenuItem::COUNT - 1) % MenuItem::COUNT;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.menu_selection = (self.state.menu_selection + 1) % MenuItem::COUNT;
            }
            KeyCode::Enter => {
                if let Some(item) = MenuItem::from_repr(self.state.menu_selection) {
                    return self.activate(item);
                }
            }
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char(c) => {
                // Digit keys keep the original numeric menu surface working
                if let Some(item) = MenuItem::from_digit(c) {
                    self.state.menu_selection = item as usize;
                    return self.activate(item);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn activate(&mut self, item: MenuItem) -> Result<bool> {
        debug!(?item, "menu item activated");
        match item {
            MenuItem::Visualize => {
                if self.catalog.is_empty() {
                    self.state.status_message = "No movie data available.".to_string();
                } else {
                    self.state.mode = AppMode::Chart;
                }
            }
            MenuItem::Add => {
                self.state.add_form = Some(AddFormState::new());
                self.state.mode = AppMode::AddMovie;
            }
            MenuItem::Delete => {
                self.state.delete_prompt = Some(TextPromptState::new("Title to delete"));
                self.state.mode = AppMode::DeleteMovie;
            }
            MenuItem::Quit => return Ok(true),
        }
        Ok(false)
    }

    fn handle_add_key(&mut self, code: KeyCode) {
        let Some(form) = self.state.add_form.as_mut() else {
            self.state.mode = AppMode::MainMenu;
            return;
        };
        match code {
            KeyCode::Esc => self.close_dialogs("Add cancelled."),
            KeyCode::Backspace => form.current_field_mut().backspace(),
            KeyCode::Char(c) => form.current_field_mut().push_char(c),
            KeyCode::Enter => {
                if form.advance() {
                    self.submit_add();
                }
            }
            _ => {}
        }
    }

    /// Parse the finished form and append on success. A parse failure aborts
    /// the whole add: no record is appended and nothing is saved.
    fn submit_add(&mut self) {
        let Some(form) = self.state.add_form.take() else {
            return;
        };
        self.state.mode = AppMode::MainMenu;
        match form.to_draft().parse() {
            Ok(movie) => {
                let title = movie.title.clone();
                self.catalog.add(movie);
                self.persist(&format!("'{title}' has been added."));
            }
            Err(e) => {
                warn!(%e, "add rejected");
                self.state.status_message = format!("{e}. Nothing was added.");
            }
        }
    }

    fn handle_delete_key(&mut self, code: KeyCode) {
        let Some(prompt) = self.state.delete_prompt.as_mut() else {
            self.state.mode = AppMode::MainMenu;
            return;
        };
        match code {
            KeyCode::Esc => self.close_dialogs("Delete cancelled."),
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Char(c) => prompt.push_char(c),
            KeyCode::Enter => {
                let title = prompt.take();
                self.submit_delete(&title);
            }
            _ => {}
        }
    }

    /// Remove the first case-insensitive title match, if any. A miss changes
    /// nothing and nothing is saved.
    fn submit_delete(&mut self, title: &str) {
        self.state.delete_prompt = None;
        self.state.mode = AppMode::MainMenu;
        match self.catalog.delete(title) {
            Some(removed) => {
                self.persist(&format!("'{}' has been deleted.", removed.title));
            }
            None => {
                warn!(title, "delete target not found");
                self.state.status_message = format!("Movie '{title}' not found.");
            }
        }
    }

    fn close_dialogs(&mut self, message: &str) {
        self.state.add_form = None;
        self.state.delete_prompt = None;
        self.state.mode = AppMode::MainMenu;
        self.state.status_message = message.to_string();
    }

    /// Save the catalog, reporting the outcome in the status line.
    fn persist(&mut self, success_message: &str) {
        match self.store.save(&self.catalog) {
            Ok(()) => {
                self.state.status_message = format!(
                    "{success_message} Saved to {}.",
                    self.store.path().display()
                );
            }
            Err(e) => {
                tracing::error!(%e, "failed to save catalog");
                self.state.status_message = format!("Failed to save catalog: {e}");
            }
        }
    }
}
