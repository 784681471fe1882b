//! Error types for the data layer.
//!
//! All store failures propagate via [`DbError`]. The API layer maps
//! [`DbError::NotFound`] to HTTP 404 and every other variant to HTTP
//! 500 with the error text surfaced to the caller.

use bookshelf_types::InvalidBook;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A configuration error (missing or invalid connection string).
    #[error("configuration error: {0}")]
    Config(String),

    /// A write payload violated the required-field invariant.
    #[error(transparent)]
    Validation(#[from] InvalidBook),

    /// The requested id does not resolve to a book.
    #[error("Book not found")]
    NotFound,
}
