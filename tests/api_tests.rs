use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;

use onlyscreen_api::api::{create_router, AppState};
use onlyscreen_api::models::Movie;
use onlyscreen_api::services::PosterResolver;
use onlyscreen_api::store::{Catalog, SimilarityMatrix};

const PLACEHOLDER: &str = "https://via.placeholder.com/500";

/// Poster stub that resolves every ID except the ones listed
struct StubPosters {
    fail_ids: Vec<u64>,
}

#[async_trait::async_trait]
impl PosterResolver for StubPosters {
    async fn fetch_poster(&self, movie_id: u64) -> Option<String> {
        if self.fail_ids.contains(&movie_id) {
            None
        } else {
            Some(format!("https://image.test/{}.jpg", movie_id))
        }
    }
}

fn test_catalog() -> (Catalog, SimilarityMatrix) {
    let catalog = Catalog::new(vec![
        Movie::new(1, "Inception"),
        Movie::new(2, "Interstellar"),
        Movie::new(3, "The Prestige"),
        Movie::new(4, "Memento"),
        Movie::new(5, "Dunkirk"),
        Movie::new(6, "Tenet"),
        Movie::new(7, "Following"),
    ]);

    let similarity = SimilarityMatrix::new(vec![
        vec![1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4],
        vec![0.9, 1.0, 0.1, 0.1, 0.1, 0.1, 0.1],
        vec![0.8, 0.1, 1.0, 0.1, 0.1, 0.1, 0.1],
        vec![0.7, 0.1, 0.1, 1.0, 0.1, 0.1, 0.1],
        vec![0.6, 0.1, 0.1, 0.1, 1.0, 0.1, 0.1],
        vec![0.5, 0.1, 0.1, 0.1, 0.1, 1.0, 0.1],
        vec![0.4, 0.1, 0.1, 0.1, 0.1, 0.1, 1.0],
    ]);

    (catalog, similarity)
}

fn create_test_server(fail_ids: Vec<u64>) -> TestServer {
    let (catalog, similarity) = test_catalog();
    let state = AppState::new(
        catalog,
        similarity,
        Arc::new(StubPosters { fail_ids }),
        PLACEHOLDER.to_string(),
    );
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(vec![]);
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_movies() {
    let server = create_test_server(vec![]);

    let response = server.get("/api/v1/movies").await;
    response.assert_status_ok();

    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 7);
    assert_eq!(movies[0]["id"], 1);
    assert_eq!(movies[0]["title"], "Inception");
}

#[tokio::test]
async fn test_recommendations_returns_top_five_in_order() {
    let server = create_test_server(vec![]);

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "title": "Inception" }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let recommendations = body["recommendations"].as_array().unwrap();

    assert_eq!(recommendations.len(), 5);
    let titles: Vec<&str> = recommendations
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Interstellar", "The Prestige", "Memento", "Dunkirk", "Tenet"]
    );
    assert!(titles.iter().all(|t| *t != "Inception"));
    assert_eq!(
        recommendations[0]["poster_url"],
        "https://image.test/2.jpg"
    );
}

#[tokio::test]
async fn test_recommendations_unknown_title_is_404() {
    let server = create_test_server(vec![]);

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "title": "Not A Movie" }))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Not A Movie"));
}

#[tokio::test]
async fn test_recommendations_empty_title_is_400() {
    let server = create_test_server(vec![]);

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "title": "  " }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommendations_substitute_placeholder_for_failed_posters() {
    let server = create_test_server(vec![2]);

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "title": "Inception" }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let recommendations = body["recommendations"].as_array().unwrap();

    assert_eq!(recommendations[0]["title"], "Interstellar");
    assert_eq!(recommendations[0]["poster_url"], PLACEHOLDER);
    assert_eq!(recommendations[1]["poster_url"], "https://image.test/3.jpg");
}

#[tokio::test]
async fn test_get_poster() {
    let server = create_test_server(vec![]);

    let response = server.get("/api/v1/movies/3/poster").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["movie_id"], 3);
    assert_eq!(body["poster_url"], "https://image.test/3.jpg");
}

#[tokio::test]
async fn test_get_poster_placeholder_on_failure() {
    let server = create_test_server(vec![3]);

    let response = server.get("/api/v1/movies/3/poster").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["poster_url"], PLACEHOLDER);
}

#[tokio::test]
async fn test_get_poster_unknown_movie_is_404() {
    let server = create_test_server(vec![]);

    let response = server.get("/api/v1/movies/999/poster").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let server = create_test_server(vec![]);

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}
