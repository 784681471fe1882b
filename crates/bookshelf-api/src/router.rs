//! Axum router construction.
//!
//! Assembles the single route table every transport serves, with CORS
//! middleware and per-request tracing.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the book resource controller.
///
/// Routes:
/// - `GET /` -- health message
/// - `POST /books` / `GET /books`
/// - `GET`/`PUT`/`DELETE /books/{id}`
///
/// Unknown routes fall through to the framework 404. CORS is
/// configured to allow any origin for development; in production this
/// should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/books/{id}",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
