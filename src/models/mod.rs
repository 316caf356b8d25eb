use serde::{Deserialize, Serialize};

/// A catalog entry: TMDB movie ID plus display title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
}

impl Movie {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// One ranked recommendation returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub poster_url: String,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// API response from GET /movie/{id}
///
/// Only `poster_path` is consumed; TMDB returns many more fields.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_bincode_round_trip() {
        let movie = Movie::new(27205, "Inception");
        let bytes = bincode::serialize(&movie).unwrap();
        let decoded: Movie = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, movie);
    }

    #[test]
    fn test_tmdb_details_deserialization() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "poster_path": "/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg"
        }"#;

        let details: TmdbMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details.poster_path,
            Some("/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg".to_string())
        );
    }

    #[test]
    fn test_tmdb_details_missing_poster_path() {
        let json = r#"{"id": 27205, "title": "Inception"}"#;
        let details: TmdbMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
    }

    #[test]
    fn test_tmdb_details_null_poster_path() {
        let json = r#"{"id": 27205, "poster_path": null}"#;
        let details: TmdbMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
    }
}
