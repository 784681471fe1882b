//! The [`BookStore`] trait -- the seam between the HTTP controller and
//! whichever store backend is configured.
//!
//! Every method maps to exactly one store operation; there are no
//! multi-document transactions. Lookups that do not resolve return
//! [`DbError::NotFound`](crate::DbError::NotFound); writes that violate
//! the required-field invariant return
//! [`DbError::Validation`](crate::DbError::Validation).

use async_trait::async_trait;
use bookshelf_types::{Book, BookDraft, BookId, BookPatch};

use crate::error::DbError;

/// Create/read/update/delete operations over the books collection.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new book, assigning its id and timestamps.
    async fn insert(&self, draft: BookDraft) -> Result<Book, DbError>;

    /// Return all books. Order is unspecified.
    async fn list(&self) -> Result<Vec<Book>, DbError>;

    /// Fetch a single book by id.
    async fn get(&self, id: BookId) -> Result<Book, DbError>;

    /// Apply a partial update and return the post-update record.
    /// Touches `updated_at`; unsupplied fields retain prior values.
    async fn update(&self, id: BookId, patch: BookPatch) -> Result<Book, DbError>;

    /// Remove a book. Hard delete, no tombstone.
    async fn delete(&self, id: BookId) -> Result<(), DbError>;
}
