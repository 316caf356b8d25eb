use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Precomputed similarity matrix, row i aligned to catalog position i
///
/// Produced offline by the data-preparation pipeline and consumed here as an
/// opaque artifact. Symmetric by convention, not enforced.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    /// Load the matrix from a bincode artifact on disk
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            AppError::Artifact(format!(
                "Failed to read similarity matrix {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Decode a matrix from bincode bytes
    pub fn from_bytes(bytes: &[u8]) -> AppResult<Self> {
        let rows: Vec<Vec<f32>> = bincode::deserialize(bytes)
            .map_err(|e| AppError::Artifact(format!("Failed to decode similarity matrix: {}", e)))?;
        Ok(Self::new(rows))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Check that the matrix is square with the catalog
    ///
    /// The catalog and the matrix are loaded from independent artifacts, so
    /// the positional alignment between them is only a convention. Catching a
    /// mismatch here fails startup with a usable diagnostic instead of
    /// serving misaligned recommendations.
    pub fn validate_against(&self, catalog_len: usize) -> AppResult<()> {
        if self.rows.len() != catalog_len {
            return Err(AppError::Artifact(format!(
                "Similarity matrix has {} rows but catalog has {} movies",
                self.rows.len(),
                catalog_len
            )));
        }

        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != catalog_len {
                return Err(AppError::Artifact(format!(
                    "Similarity matrix row {} has {} columns but catalog has {} movies",
                    i,
                    row.len(),
                    catalog_len
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_access() {
        let matrix = SimilarityMatrix::new(vec![vec![1.0, 0.5], vec![0.5, 1.0]]);
        assert_eq!(matrix.row(1), Some([0.5, 1.0].as_slice()));
        assert_eq!(matrix.row(2), None);
    }

    #[test]
    fn test_validate_square_matrix() {
        let matrix = SimilarityMatrix::new(vec![vec![1.0, 0.5], vec![0.5, 1.0]]);
        assert!(matrix.validate_against(2).is_ok());
    }

    #[test]
    fn test_validate_row_count_mismatch() {
        let matrix = SimilarityMatrix::new(vec![vec![1.0, 0.5], vec![0.5, 1.0]]);
        let err = matrix.validate_against(3).unwrap_err();
        assert!(err.to_string().contains("2 rows but catalog has 3"));
    }

    #[test]
    fn test_validate_ragged_row() {
        let matrix = SimilarityMatrix::new(vec![vec![1.0, 0.5], vec![0.5]]);
        let err = matrix.validate_against(2).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 columns"));
    }

    #[test]
    fn test_from_bytes() {
        let rows = vec![vec![1.0f32, 0.9], vec![0.9, 1.0]];
        let bytes = bincode::serialize(&rows).unwrap();

        let matrix = SimilarityMatrix::from_bytes(&bytes).unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.row(0), Some([1.0f32, 0.9].as_slice()));
    }
}
