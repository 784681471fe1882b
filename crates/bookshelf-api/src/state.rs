//! Shared application state for the controller.
//!
//! [`AppState`] carries the store handle. It is constructed explicitly
//! at startup and injected via Axum's `State` extractor; there are no
//! process globals, so tests build isolated states freely.

use std::sync::Arc;

use bookshelf_db::BookStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The configured store backend.
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    /// Create application state over the given store backend.
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }
}
