//! `PostgreSQL` book store operations.
//!
//! All queries are parameterized runtime queries against the `books`
//! table created by `migrations/0001_create_books.sql`. Writes use
//! `RETURNING` so the response always reflects post-write state, and
//! partial updates use `COALESCE` so unsupplied fields keep their
//! prior values.

use async_trait::async_trait;
use bookshelf_types::{Book, BookDraft, BookId, BookPatch};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::database::Database;
use crate::error::DbError;
use crate::store::BookStore;

/// [`BookStore`] backed by `PostgreSQL` via [`Database`].
#[derive(Debug)]
pub struct PgBookStore {
    db: Database,
}

impl PgBookStore {
    /// Create a store over a (possibly not yet connected) database.
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Close the underlying pool if it was ever opened.
    pub async fn close(&self) {
        self.db.close().await;
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn insert(&self, draft: BookDraft) -> Result<Book, DbError> {
        let (title, author) = draft.into_fields()?;
        let pool = self.db.pool().await?;

        let id = BookId::new();
        let row = sqlx::query_as::<_, BookRow>(
            r"INSERT INTO books (id, title, author)
              VALUES ($1, $2, $3)
              RETURNING id, title, author, created_at, updated_at",
        )
        .bind(id.into_inner())
        .bind(&title)
        .bind(&author)
        .fetch_one(pool.pool())
        .await?;

        tracing::debug!(%id, "Inserted book");
        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Book>, DbError> {
        let pool = self.db.pool().await?;

        // No ORDER BY: listing order is unspecified.
        let rows = sqlx::query_as::<_, BookRow>(
            r"SELECT id, title, author, created_at, updated_at FROM books",
        )
        .fetch_all(pool.pool())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn get(&self, id: BookId) -> Result<Book, DbError> {
        let pool = self.db.pool().await?;

        let row = sqlx::query_as::<_, BookRow>(
            r"SELECT id, title, author, created_at, updated_at
              FROM books
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(pool.pool())
        .await?;

        row.map(Book::from).ok_or(DbError::NotFound)
    }

    async fn update(&self, id: BookId, patch: BookPatch) -> Result<Book, DbError> {
        patch.validate()?;
        let pool = self.db.pool().await?;

        let row = sqlx::query_as::<_, BookRow>(
            r"UPDATE books
              SET title = COALESCE($2, title),
                  author = COALESCE($3, author),
                  updated_at = now()
              WHERE id = $1
              RETURNING id, title, author, created_at, updated_at",
        )
        .bind(id.into_inner())
        .bind(patch.title.as_deref())
        .bind(patch.author.as_deref())
        .fetch_optional(pool.pool())
        .await?;

        let book = row.map(Book::from).ok_or(DbError::NotFound)?;
        tracing::debug!(%id, "Updated book");
        Ok(book)
    }

    async fn delete(&self, id: BookId) -> Result<(), DbError> {
        let pool = self.db.pool().await?;

        let result = sqlx::query(r"DELETE FROM books WHERE id = $1")
            .bind(id.into_inner())
            .execute(pool.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        tracing::debug!(%id, "Deleted book");
        Ok(())
    }
}

/// A row from the `books` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: BookId::from(row.id),
            title: row.title,
            author: row.author,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
