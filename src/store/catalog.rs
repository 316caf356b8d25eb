use std::fs;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
};

/// Immutable movie table, loaded once at startup
///
/// Position within the table is significant: row i of the similarity matrix
/// corresponds to the movie at position i here.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Load the catalog from a bincode artifact on disk
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            AppError::Artifact(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Decode a catalog from bincode bytes
    pub fn from_bytes(bytes: &[u8]) -> AppResult<Self> {
        let movies: Vec<Movie> = bincode::deserialize(bytes)
            .map_err(|e| AppError::Artifact(format!("Failed to decode catalog: {}", e)))?;
        Ok(Self::new(movies))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Find a movie by TMDB ID
    pub fn find_by_id(&self, id: u64) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Position of the first movie with the given title, if any
    ///
    /// Titles are assumed unique; duplicates resolve to the lowest index.
    pub fn position_by_title(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }
}
