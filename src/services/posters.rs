//! TMDB poster resolution
//!
//! Translates a catalog movie ID into a displayable poster URL via the TMDB
//! metadata API. Lookups retry with capped exponential backoff; exhausting the
//! attempts yields `None` and the caller substitutes a placeholder.

use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::TmdbMovieDetails,
};

/// Bounded retry with exponential backoff
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Delay before the first retry, doubled per subsequent retry
    pub base_delay: Duration,
    /// Cap on the backoff delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay after the given 1-based attempt
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(6);
        let multiplier = 1u32 << exponent;
        self.base_delay
            .checked_mul(multiplier)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// Trait for poster lookup backends
///
/// `None` signals resolution failure after retries are exhausted; callers are
/// responsible for substituting a placeholder URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterResolver: Send + Sync {
    async fn fetch_poster(&self, movie_id: u64) -> Option<String>;
}

/// Poster resolver backed by the TMDB movie details endpoint
#[derive(Clone)]
pub struct TmdbPosterClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
    retry: RetryPolicy,
}

impl TmdbPosterClient {
    pub fn new(
        api_key: String,
        api_url: String,
        image_base_url: String,
        retry: RetryPolicy,
        request_timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(request_timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            image_base_url,
            retry,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let retry = RetryPolicy {
            max_attempts: config.poster_max_attempts,
            base_delay: Duration::from_millis(config.poster_retry_base_ms),
            max_delay: Duration::from_millis(config.poster_retry_max_ms),
        };

        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.image_base_url.clone(),
            retry,
            Duration::from_millis(config.poster_request_timeout_ms),
        )
    }

    /// Single lookup attempt against GET /movie/{id}
    ///
    /// A 2xx response without a `poster_path` counts as a failure, same as a
    /// network error or non-2xx status.
    async fn request_poster_path(&self, movie_id: u64) -> AppResult<String> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let details: TmdbMovieDetails = response.json().await?;

        details.poster_path.ok_or_else(|| {
            AppError::ExternalApi(format!("TMDB response for movie {} has no poster_path", movie_id))
        })
    }

    fn full_poster_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url.trim_end_matches('/'),
            poster_path.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl PosterResolver for TmdbPosterClient {
    async fn fetch_poster(&self, movie_id: u64) -> Option<String> {
        for attempt in 1..=self.retry.max_attempts {
            match self.request_poster_path(movie_id).await {
                Ok(poster_path) => {
                    tracing::debug!(movie_id, attempt, "Poster resolved");
                    return Some(self.full_poster_url(&poster_path));
                }
                Err(e) => {
                    tracing::warn!(movie_id, attempt, error = %e, "Poster lookup failed");
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.delay_for(attempt)).await;
                    }
                }
            }
        }

        tracing::error!(
            movie_id,
            attempts = self.retry.max_attempts,
            "Giving up on poster lookup"
        );
        None
    }
}
