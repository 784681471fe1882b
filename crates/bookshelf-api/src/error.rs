//! Error types for the controller layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum converted
//! into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Status mapping: an id that resolves to no book is 404 with a
//! `{"message"}` body; every other failure (malformed id, validation,
//! store or connectivity error) is 500 with the underlying error text
//! surfaced verbatim in an `{"error"}` body. No sanitization, no
//! retries.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookshelf_db::DbError;

/// Errors that can occur in the controller layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested id does not resolve to a book.
    #[error("Book not found")]
    NotFound,

    /// The path id is not a well-formed UUID.
    #[error("invalid book id: {0}")]
    InvalidId(String),

    /// Any other store failure (validation, connectivity, query).
    #[error(transparent)]
    Store(DbError),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => {
                let body = serde_json::json!({ "message": self.to_string() });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            Self::InvalidId(_) | Self::Store(_) => {
                let body = serde_json::json!({ "error": self.to_string() });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
