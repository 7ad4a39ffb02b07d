mod config;
mod content;
mod render;
mod routes;
mod state;

use std::process::ExitCode;

use crate::config::{ConfigError, SiteConfig};
use crate::content::{ContentDocument, ContentError};

#[derive(Debug, thiserror::Error)]
enum SiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "campus-site stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), SiteError> {
    let config = SiteConfig::from_env()?;
    let content = ContentDocument::load(&config.content_path)?;
    tracing::info!(
        features = content.features.len(),
        news = content.news.len(),
        path = %config.content_path.display(),
        "content loaded"
    );

    let app = routes::app(state::AppState::new(content), &config.static_dir);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| SiteError::Bind { port, source })?;

    tracing::info!(%port, static_dir = %config.static_dir.display(), "campus-site listening");
    axum::serve(listener, app).await.map_err(SiteError::Serve)
}
