//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! content document is loaded once at startup and never mutated, so it is
//! shared behind an `Arc` without a lock.

use std::sync::Arc;

use crate::content::ContentDocument;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentDocument>,
}

impl AppState {
    #[must_use]
    pub fn new(content: ContentDocument) -> Self {
        Self { content: Arc::new(content) }
    }
}
