//! HTML page handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;

use crate::render;
use crate::state::AppState;

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render::home_page(&state.content))
}

pub async fn news(State(state): State<AppState>) -> Html<String> {
    Html(render::news_page(&state.content))
}

pub async fn article(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Html<String>, (StatusCode, Html<String>)> {
    match state.content.published_article(&slug) {
        Some(article) => Ok(Html(render::article_page(article))),
        None => {
            tracing::debug!(%slug, "article not found");
            Err(not_found_response())
        }
    }
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    not_found_response()
}

fn not_found_response() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render::not_found_page()))
}
