//! Application state definitions
//!
//! State types for the event loop: the mode the UI is in, the menu cursor,
//! the transient dialog states and the status line.

use strum::{Display, EnumIter, FromRepr};

use crate::components::TextPromptState;
use crate::movie::MovieDraft;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Main menu with the catalog table
    MainMenu,
    /// Ratings/revenue chart screen
    Chart,
    /// Add-movie form dialog
    AddMovie,
    /// Delete-by-title prompt dialog
    DeleteMovie,
}

/// Main menu entries, in the order the original numeric menu listed them.
///
/// The discriminant maps digit keys: key '1' activates `Visualize`,
/// '4' activates `Quit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(usize)]
pub enum MenuItem {
    #[strum(serialize = "Visualize Movies")]
    Visualize = 0,
    #[strum(serialize = "Add a Movie")]
    Add = 1,
    #[strum(serialize = "Delete a Movie")]
    Delete = 2,
    #[strum(serialize = "Quit")]
    Quit = 3,
}

impl MenuItem {
    pub const COUNT: usize = 4;

    /// Map a menu digit ('1'..='4') to its item.
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        Self::from_repr(n.checked_sub(1)?)
    }
}

/// Add-form dialog state: the five fields in prompt order plus a cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct AddFormState {
    pub fields: Vec<TextPromptState>,
    pub current: usize,
}

impl AddFormState {
    pub fn new() -> Self {
        Self {
            fields: vec![
                TextPromptState::new("Title"),
                TextPromptState::new("Average rating (0-10)"),
                TextPromptState::new("Box office (millions)"),
                TextPromptState::new("Release year"),
                TextPromptState::new("Genre"),
            ],
            current: 0,
        }
    }

    pub fn current_field_mut(&mut self) -> &mut TextPromptState {
        &mut self.fields[self.current]
    }

    /// Move to the next field; returns true when the last field was already
    /// active (i.e. the form is ready to submit).
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.fields.len() {
            self.current += 1;
            false
        } else {
            true
        }
    }

    pub fn to_draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.fields[0].value.clone(),
            average_rating: self.fields[1].value.clone(),
            box_office: self.fields[2].value.clone(),
            release_year: self.fields[3].value.clone(),
            genre: self.fields[4].value.clone(),
        }
    }
}

impl Default for AddFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Main menu selection index
    pub menu_selection: usize,
    /// Status message shown under the menu
    pub status_message: String,
    /// Add-movie form, present while in `AddMovie` mode
    pub add_form: Option<AddFormState>,
    /// Delete prompt, present while in `DeleteMovie` mode
    pub delete_prompt: Option<TextPromptState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::MainMenu,
            menu_selection: 0,
            status_message: "Welcome to the movie analysis tool!".to_string(),
            add_form: None,
            delete_prompt: None,
        }
    }
}
