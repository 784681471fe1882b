//! Endpoint handlers for the book resource controller.
//!
//! Each handler performs exactly one store operation through the
//! shared [`AppState`] and maps the outcome to an HTTP response.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Health message |
//! | `POST` | `/books` | Create a book |
//! | `GET` | `/books` | List all books |
//! | `GET` | `/books/{id}` | Fetch one book |
//! | `PUT` | `/books/{id}` | Partial update |
//! | `DELETE` | `/books/{id}` | Delete |

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bookshelf_types::{Book, BookDraft, BookId, BookPatch};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Health string served on `GET /`.
const HEALTH_MESSAGE: &str = "Bookshelf CRUD API";

// ---------------------------------------------------------------------------
// GET / -- health message
// ---------------------------------------------------------------------------

/// Serve the service health message.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({ "message": HEALTH_MESSAGE }))
}

// ---------------------------------------------------------------------------
// POST /books -- create
// ---------------------------------------------------------------------------

/// Create a book from a `{title, author}` body.
///
/// Returns 201 with the persisted record (id and timestamps assigned
/// by the store). A missing or empty required field is a store
/// validation error, reported as 500.
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<BookDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let book = state.store.insert(draft).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

// ---------------------------------------------------------------------------
// GET /books -- list
// ---------------------------------------------------------------------------

/// List all books as a bare JSON array. Order is unspecified.
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.store.list().await?;
    Ok(Json(books))
}

// ---------------------------------------------------------------------------
// GET /books/{id} -- fetch one
// ---------------------------------------------------------------------------

/// Fetch a single book by id.
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_book_id(&id_str)?;
    let book = state.store.get(id).await?;
    Ok(Json(book))
}

// ---------------------------------------------------------------------------
// PUT /books/{id} -- partial update
// ---------------------------------------------------------------------------

/// Apply a partial update and return the post-update record.
///
/// Unsupplied fields retain their prior values; the store touches
/// `updated_at`.
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_book_id(&id_str)?;
    let book = state.store.update(id, patch).await?;
    Ok(Json(book))
}

// ---------------------------------------------------------------------------
// DELETE /books/{id} -- delete
// ---------------------------------------------------------------------------

/// Delete a book and confirm with a message body.
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_book_id(&id_str)?;
    state.store.delete(id).await?;
    Ok(Json(
        serde_json::json!({ "message": "Book deleted successfully" }),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a book id from the request path.
///
/// A malformed id is reported as [`ApiError::InvalidId`], which maps
/// to 500 (not 400): the id format belongs to the store, and a value
/// the store cannot interpret is treated like any other store failure.
fn parse_book_id(s: &str) -> Result<BookId, ApiError> {
    s.parse::<Uuid>()
        .map(BookId::from)
        .map_err(|e| ApiError::InvalidId(format!("{s}: {e}")))
}
