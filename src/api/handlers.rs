use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{Movie, Recommendation},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: u64,
    pub title: String,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PosterResponse {
    pub movie_id: u64,
    pub poster_url: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Full catalog listing for the selection dropdown and home carousel
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<MovieResponse>> {
    let movies: Vec<MovieResponse> = state.catalog.movies().iter().map(MovieResponse::from).collect();
    Json(movies)
}

/// Resolve one movie's poster, substituting the placeholder on failure
///
/// The home carousel fetches one poster per catalog movie; keeping this
/// per-item lets the client pace those lookups instead of the server
/// serializing every upstream call in a single request.
pub async fn get_poster(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
) -> AppResult<Json<PosterResponse>> {
    let movie = state.catalog.find_by_id(movie_id).ok_or_else(|| {
        AppError::NotFound(format!("Movie {} is not in the catalog", movie_id))
    })?;

    let poster_url = state
        .posters
        .fetch_poster(movie.id)
        .await
        .unwrap_or_else(|| state.placeholder_url.clone());

    Ok(Json(PosterResponse {
        movie_id: movie.id,
        poster_url,
    }))
}

/// Top-5 similar titles for a selected movie
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
    }

    let recommendations = state.recommender.recommend(&request.title).await?;

    Ok(Json(RecommendResponse { recommendations }))
}
