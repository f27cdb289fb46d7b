//! Movie record types
//!
//! `Movie` is the persisted record; its serde field names define the CSV
//! header (`title,average_rating,box_office,release_year,genre`).
//! `MovieDraft` holds the raw text collected from the add form and converts
//! it into a `Movie` in one all-or-nothing step.

use serde::{Deserialize, Serialize};

use crate::error::{CineTuiError, Result};

/// One catalog entry.
///
/// Rating is intended to be 0-10 and box office is in millions, but neither
/// range is enforced beyond numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub average_rating: f64,
    pub box_office: f64,
    pub release_year: i32,
    pub genre: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        average_rating: f64,
        box_office: f64,
        release_year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            average_rating,
            box_office,
            release_year,
            genre: genre.into(),
        }
    }
}

/// The five defaults written when no backing file exists yet.
pub fn default_movies() -> Vec<Movie> {
    vec![
        Movie::new("Inception", 8.8, 836.0, 2010, "Sci-Fi"),
        Movie::new("The Dark Knight", 9.0, 1004.0, 2008, "Action"),
        Movie::new("Interstellar", 8.6, 677.0, 2014, "Sci-Fi"),
        Movie::new("The Shawshank Redemption", 9.3, 58.0, 1994, "Drama"),
        Movie::new("Pulp Fiction", 8.9, 214.0, 1994, "Crime"),
    ]
}

/// Raw add-form input, one string per field in prompt order.
#[derive(Debug, Clone, Default)]
pub struct MovieDraft {
    pub title: String,
    pub average_rating: String,
    pub box_office: String,
    pub release_year: String,
    pub genre: String,
}

impl MovieDraft {
    /// Convert the draft into a `Movie`.
    ///
    /// Fails on the first numeric field that does not parse; on failure no
    /// partial record exists, so a rejected add leaves the catalog untouched.
    pub fn parse(&self) -> Result<Movie> {
        let average_rating: f64 = self
            .average_rating
            .trim()
            .parse()
            .map_err(|_| CineTuiError::invalid_number("rating", self.average_rating.trim()))?;
        let box_office: f64 = self
            .box_office
            .trim()
            .parse()
            .map_err(|_| CineTuiError::invalid_number("box office", self.box_office.trim()))?;
        let release_year: i32 = self
            .release_year
            .trim()
            .parse()
            .map_err(|_| CineTuiError::invalid_number("release year", self.release_year.trim()))?;

        Ok(Movie {
            title: self.title.trim().to_string(),
            average_rating,
            box_office,
            release_year,
            genre: self.genre.trim().to_string(),
        })
    }
}
