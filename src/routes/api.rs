//! JSON content endpoints.
//!
//! Both return the lists in display order, already filtered, so a client
//! never has to re-apply the active/published rules.

use axum::Json;
use axum::extract::State;

use crate::content::{Feature, NewsArticle};
use crate::state::AppState;

/// `GET /api/features`: active features by `order`.
pub async fn features(State(state): State<AppState>) -> Json<Vec<Feature>> {
    Json(state.content.active_features().into_iter().cloned().collect())
}

/// `GET /api/news`: published articles, newest first.
pub async fn news(State(state): State<AppState>) -> Json<Vec<NewsArticle>> {
    Json(state.content.published_news().into_iter().cloned().collect())
}
