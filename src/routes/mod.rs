//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-rendered pages carry the carousel markup; the wasm controller that
//! brings it to life is served from `/pkg` (the wasm-pack output directory).
//! The JSON endpoints expose the same ordered lists the pages render.

pub mod api;
pub mod pages;


use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/berita", get(pages::news))
        .route("/berita/{slug}", get(pages::article))
        .route("/api/features", get(api::features))
        .route("/api/news", get(api::news))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(static_dir))
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
