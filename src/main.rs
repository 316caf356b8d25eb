use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use onlyscreen_api::{
    api::{create_router, AppState},
    config::Config,
    services::TmdbPosterClient,
    store,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Both artifacts are read once here and shared read-only for the life of
    // the process.
    let (catalog, similarity) = store::load_artifacts(&config.catalog_path, &config.similarity_path)
        .context("Failed to load artifacts")?;

    let posters = Arc::new(TmdbPosterClient::from_config(&config)?);

    let state = AppState::new(
        catalog,
        similarity,
        posters,
        config.placeholder_poster_url.clone(),
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    tracing::info!(addr = %listener.local_addr()?, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
