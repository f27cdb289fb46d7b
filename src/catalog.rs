//! In-memory catalog operations
//!
//! The catalog is the ordered sequence of movies held for the session.
//! Order reflects file order / insertion order: adds append at the end, and
//! the only removal is delete-by-title.

use crate::movie::Movie;

/// Ordered sequence of movie records for the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The ordered records, as shown by the catalog table.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Append a record at the end. Duplicate titles are allowed.
    pub fn add(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Remove and return the first record whose title matches
    /// case-insensitively. Later duplicates are left in place.
    pub fn delete(&mut self, title: &str) -> Option<Movie> {
        let pos = self
            .movies
            .iter()
            .position(|m| m.title.eq_ignore_ascii_case(title))?;
        Some(self.movies.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::default_movies;

    #[test]
    fn test_add_appends_at_end() {
        let mut catalog = Catalog::from_movies(default_movies());
        let before = catalog.len();
        let movie = Movie::new("Heat", 8.3, 187.4, 1995, "Crime");
        catalog.add(movie.clone());
        assert_eq!(catalog.len(), before + 1);
        assert_eq!(catalog.movies().last(), Some(&movie));
    }

    #[test]
    fn test_delete_is_case_insensitive() {
        let mut catalog = Catalog::from_movies(default_movies());
        let removed = catalog.delete("inception").unwrap();
        assert_eq!(removed.title, "Inception");
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_delete_missing_title_leaves_catalog_unchanged() {
        let mut catalog = Catalog::from_movies(default_movies());
        let snapshot = catalog.clone();
        assert!(catalog.delete("Nonexistent").is_none());
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn test_delete_removes_only_first_duplicate() {
        let mut catalog = Catalog::new();
        catalog.add(Movie::new("Dune", 8.0, 402.0, 2021, "Sci-Fi"));
        catalog.add(Movie::new("DUNE", 6.1, 31.0, 1984, "Sci-Fi"));
        let removed = catalog.delete("dune").unwrap();
        assert_eq!(removed.release_year, 2021);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.movies()[0].release_year, 1984);
    }
}
