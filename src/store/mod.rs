//! Read-only artifact stores
//!
//! The catalog and the similarity matrix are built offline and shipped as two
//! bincode artifacts. Both are loaded once at startup and never mutated.

pub mod catalog;
pub mod similarity;

pub use catalog::Catalog;
pub use similarity::SimilarityMatrix;

use crate::error::AppResult;

/// Load both artifacts and verify their positional alignment
pub fn load_artifacts(
    catalog_path: &str,
    similarity_path: &str,
) -> AppResult<(Catalog, SimilarityMatrix)> {
    let catalog = Catalog::load(catalog_path)?;
    let similarity = SimilarityMatrix::load(similarity_path)?;
    similarity.validate_against(catalog.len())?;

    tracing::info!(
        movies = catalog.len(),
        "Catalog and similarity matrix loaded"
    );

    Ok((catalog, similarity))
}
