//! In-memory book store.
//!
//! Backs the API integration tests and local development without a
//! running `PostgreSQL`. Semantics mirror [`PgBookStore`]: same
//! validation, same not-found behavior, same timestamp handling.
//!
//! [`PgBookStore`]: crate::PgBookStore

use std::collections::BTreeMap;

use async_trait::async_trait;
use bookshelf_types::{Book, BookDraft, BookId, BookPatch};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::BookStore;

/// [`BookStore`] backed by a map behind a [`RwLock`].
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: RwLock<BTreeMap<BookId, Book>>,
}

impl MemoryBookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, draft: BookDraft) -> Result<Book, DbError> {
        let (title, author) = draft.into_fields()?;

        let now = Utc::now();
        let book = Book {
            id: BookId::new(),
            title,
            author,
            created_at: now,
            updated_at: now,
        };

        let mut books = self.books.write().await;
        books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books = self.books.read().await;
        Ok(books.values().cloned().collect())
    }

    async fn get(&self, id: BookId) -> Result<Book, DbError> {
        let books = self.books.read().await;
        books.get(&id).cloned().ok_or(DbError::NotFound)
    }

    async fn update(&self, id: BookId, patch: BookPatch) -> Result<Book, DbError> {
        patch.validate()?;

        let mut books = self.books.write().await;
        let book = books.get_mut(&id).ok_or(DbError::NotFound)?;

        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(author) = patch.author {
            book.author = author;
        }
        book.updated_at = Utc::now();

        Ok(book.clone())
    }

    async fn delete(&self, id: BookId) -> Result<(), DbError> {
        let mut books = self.books.write().await;
        books.remove(&id).map(|_| ()).ok_or(DbError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use bookshelf_types::InvalidBook;

    use super::*;

    fn draft(title: &str, author: &str) -> BookDraft {
        BookDraft {
            title: Some(title.to_owned()),
            author: Some(author.to_owned()),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamps() {
        let store = MemoryBookStore::new();
        let book = store.insert(draft("Dune", "Herbert")).await.unwrap();

        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.created_at, book.updated_at);
    }

    #[tokio::test]
    async fn insert_rejects_missing_author() {
        let store = MemoryBookStore::new();
        let result = store
            .insert(BookDraft {
                title: Some("Dune".to_owned()),
                author: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(DbError::Validation(InvalidBook::MissingField("author")))
        ));
    }

    #[tokio::test]
    async fn get_returns_inserted_book() {
        let store = MemoryBookStore::new();
        let book = store.insert(draft("Dune", "Herbert")).await.unwrap();

        let fetched = store.get(book.id).await.unwrap();
        assert_eq!(fetched, book);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = MemoryBookStore::new();
        assert!(matches!(
            store.get(BookId::new()).await,
            Err(DbError::NotFound)
        ));
    }

    #[tokio::test]
    async fn list_returns_all_inserted_books() {
        let store = MemoryBookStore::new();
        let a = store.insert(draft("Dune", "Herbert")).await.unwrap();
        let b = store.insert(draft("Hyperion", "Simmons")).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&a));
        assert!(all.contains(&b));
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let store = MemoryBookStore::new();
        let book = store.insert(draft("Dune", "Herbert")).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let updated = store
            .update(
                book.id,
                BookPatch {
                    title: Some("Dune Messiah".to_owned()),
                    author: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.author, "Herbert");
        assert_eq!(updated.created_at, book.created_at);
        assert!(updated.updated_at > book.updated_at);
    }

    #[tokio::test]
    async fn update_rejects_empty_supplied_field() {
        let store = MemoryBookStore::new();
        let book = store.insert(draft("Dune", "Herbert")).await.unwrap();

        let result = store
            .update(
                book.id,
                BookPatch {
                    title: Some(String::new()),
                    author: None,
                },
            )
            .await;

        assert!(matches!(result, Err(DbError::Validation(_))));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemoryBookStore::new();
        let result = store.update(BookId::new(), BookPatch::default()).await;
        assert!(matches!(result, Err(DbError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_the_book() {
        let store = MemoryBookStore::new();
        let book = store.insert(draft("Dune", "Herbert")).await.unwrap();

        store.delete(book.id).await.unwrap();
        assert!(matches!(store.get(book.id).await, Err(DbError::NotFound)));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = MemoryBookStore::new();
        assert!(matches!(
            store.delete(BookId::new()).await,
            Err(DbError::NotFound)
        ));
    }
}
