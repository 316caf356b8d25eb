use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Recommendation,
    services::posters::PosterResolver,
    store::{Catalog, SimilarityMatrix},
};

/// Number of recommendations returned per query
pub const TOP_N: usize = 5;

/// Ranks catalog movies against a query title using the precomputed
/// similarity matrix and resolves a poster URL for each result
pub struct Recommender {
    catalog: Arc<Catalog>,
    similarity: Arc<SimilarityMatrix>,
    posters: Arc<dyn PosterResolver>,
    placeholder_url: String,
}

impl Recommender {
    pub fn new(
        catalog: Arc<Catalog>,
        similarity: Arc<SimilarityMatrix>,
        posters: Arc<dyn PosterResolver>,
        placeholder_url: String,
    ) -> Self {
        Self {
            catalog,
            similarity,
            posters,
            placeholder_url,
        }
    }

    /// Top-5 most similar titles for the given query title
    ///
    /// Ranking is a stable descending sort of the query's similarity row, so
    /// equal scores keep their catalog order. The query movie itself is
    /// excluded. Poster failures substitute the placeholder URL rather than
    /// failing the whole operation.
    pub async fn recommend(&self, title: &str) -> AppResult<Vec<Recommendation>> {
        let query_index = self.catalog.position_by_title(title).ok_or_else(|| {
            AppError::NotFound(format!("Movie '{}' is not in the catalog", title))
        })?;

        let row = self.similarity.row(query_index).ok_or_else(|| {
            AppError::Internal(format!("No similarity row for catalog index {}", query_index))
        })?;

        let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        // Stable sort: ties keep original index order
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut recommendations = Vec::with_capacity(TOP_N);
        for (index, score) in ranked {
            if index == query_index {
                continue;
            }
            if recommendations.len() == TOP_N {
                break;
            }

            let movie = self.catalog.get(index).ok_or_else(|| {
                AppError::Internal(format!("No catalog entry at index {}", index))
            })?;

            let poster_url = match self.posters.fetch_poster(movie.id).await {
                Some(url) => url,
                None => {
                    tracing::warn!(
                        movie_id = movie.id,
                        title = %movie.title,
                        "Poster unavailable, using placeholder"
                    );
                    self.placeholder_url.clone()
                }
            };

            tracing::debug!(
                query = %title,
                result = %movie.title,
                score,
                "Recommendation ranked"
            );

            recommendations.push(Recommendation {
                title: movie.title.clone(),
                poster_url,
            });
        }

        tracing::info!(
            query = %title,
            results = recommendations.len(),
            "Recommendations generated"
        );

        Ok(recommendations)
    }
}
