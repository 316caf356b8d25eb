use std::sync::Arc;

use crate::{
    services::{PosterResolver, Recommender},
    store::{Catalog, SimilarityMatrix},
};

/// Shared application state
///
/// Everything here is read-only after startup, so plain `Arc` sharing is
/// enough; there is no lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub posters: Arc<dyn PosterResolver>,
    pub recommender: Arc<Recommender>,
    pub placeholder_url: String,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        similarity: SimilarityMatrix,
        posters: Arc<dyn PosterResolver>,
        placeholder_url: String,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let recommender = Arc::new(Recommender::new(
            catalog.clone(),
            Arc::new(similarity),
            posters.clone(),
            placeholder_url.clone(),
        ));

        Self {
            catalog,
            posters,
            recommender,
            placeholder_url,
        }
    }
}
