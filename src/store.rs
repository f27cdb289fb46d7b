//! CSV-backed persistence for the catalog
//!
//! The store owns the backing-file path; callers get it from the CLI rather
//! than a shared constant. `load` treats a missing file as an empty catalog,
//! `seed_if_missing` writes the five defaults on first run, and `save`
//! rewrites the whole file after every mutation. Writes are not atomic; a
//! crash mid-write can leave a partial file.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::movie::{default_movies, Movie};

/// Load/save boundary to the persisted CSV file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the five default movies when the backing file does not exist.
    ///
    /// Returns `true` when the file was created. Called once at startup,
    /// before the initial `load`.
    pub fn seed_if_missing(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        info!(path = %self.path.display(), "backing file missing, seeding defaults");
        self.write_records(&default_movies())?;
        Ok(true)
    }

    /// Read the full catalog from the backing file.
    ///
    /// A missing file is not an error: the pre-seed state is an empty
    /// catalog. Malformed rows do propagate as CSV errors.
    pub fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "backing file not found, starting empty");
            return Ok(Catalog::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut movies = Vec::new();
        for record in reader.deserialize() {
            let movie: Movie = record?;
            movies.push(movie);
        }
        debug!(count = movies.len(), "catalog loaded");
        Ok(Catalog::from_movies(movies))
    }

    /// Serialize the full catalog, overwriting the backing file.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        self.write_records(catalog.movies())?;
        debug!(count = catalog.len(), path = %self.path.display(), "catalog saved");
        Ok(())
    }

    fn write_records(&self, movies: &[Movie]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for movie in movies {
            writer.serialize(movie)?;
        }
        writer.flush()?;
        Ok(())
    }
}
