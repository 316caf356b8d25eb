use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the bincode catalog artifact
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the bincode similarity matrix artifact
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL for full-size poster images
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Poster URL substituted when resolution fails
    #[serde(default = "default_placeholder_poster_url")]
    pub placeholder_poster_url: String,

    /// Total poster lookup attempts before giving up
    #[serde(default = "default_poster_max_attempts")]
    pub poster_max_attempts: u32,

    /// Base delay between poster lookup attempts, doubled per retry
    #[serde(default = "default_poster_retry_base_ms")]
    pub poster_retry_base_ms: u64,

    /// Cap on the backoff delay between poster lookup attempts
    #[serde(default = "default_poster_retry_max_ms")]
    pub poster_retry_max_ms: u64,

    /// Per-request timeout for TMDB calls
    #[serde(default = "default_poster_request_timeout_ms")]
    pub poster_request_timeout_ms: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_path() -> String {
    "data/movies.bin".to_string()
}

fn default_similarity_path() -> String {
    "data/similarity.bin".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_placeholder_poster_url() -> String {
    "https://via.placeholder.com/500".to_string()
}

fn default_poster_max_attempts() -> u32 {
    3
}

fn default_poster_retry_base_ms() -> u64 {
    1000
}

fn default_poster_retry_max_ms() -> u64 {
    5000
}

fn default_poster_request_timeout_ms() -> u64 {
    10_000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
