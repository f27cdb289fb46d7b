//! User interface rendering module
//!
//! Organized into submodules:
//! - `header` - banner and title rendering
//! - `menus` - main menu, catalog table and status bar
//! - `chart` - the ratings/revenue visualization
//! - `dialogs` - add-form and delete-prompt popups

mod chart;
mod dialogs;
mod header;
mod menus;

use ratatui::Frame;

use crate::app::{AppMode, AppState};
use crate::catalog::Catalog;
use header::HeaderRenderer;

/// Stateless renderer dispatching on the current application mode.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &AppState, catalog: &Catalog) {
        let area = f.area();
        match state.mode {
            AppMode::Chart => chart::render_chart(f, catalog, area),
            AppMode::MainMenu | AppMode::AddMovie | AppMode::DeleteMovie => {
                menus::render_main_screen(f, state, catalog, area, &self.header);
                // Dialogs float above the main screen
                match state.mode {
                    AppMode::AddMovie => dialogs::render_add_form(f, state),
                    AppMode::DeleteMovie => dialogs::render_delete_prompt(f, state),
                    _ => {}
                }
            }
        }
    }
}
