//! The `Book` entity and its request payload shapes.
//!
//! A persisted book always has a non-empty `title` and `author`; the
//! store enforces this invariant on every write via
//! [`BookDraft::into_fields`] / [`BookPatch::validate`] (and, for the
//! `PostgreSQL` backend, matching `CHECK` constraints in the schema).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::BookId;

// ---------------------------------------------------------------------------
// Book
// ---------------------------------------------------------------------------

/// A persisted book record.
///
/// Serializes with camelCase timestamp keys (`createdAt`, `updatedAt`)
/// to match the public wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Store-generated identifier, immutable after creation.
    pub id: BookId,
    /// Title of the book. Always non-empty once persisted.
    pub title: String,
    /// Author of the book. Always non-empty once persisted.
    pub author: String,
    /// Set by the store when the record is created.
    pub created_at: DateTime<Utc>,
    /// Touched by the store on every update.
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Create payload as received on the wire.
///
/// Both fields are optional at the serde layer so that a missing
/// required field surfaces as a store validation error rather than a
/// framework decode rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookDraft {
    /// Required title; rejected by the store when absent or empty.
    pub title: Option<String>,
    /// Required author; rejected by the store when absent or empty.
    pub author: Option<String>,
}

impl BookDraft {
    /// Consume the draft, yielding `(title, author)` once both required
    /// fields are present and non-empty.
    pub fn into_fields(self) -> Result<(String, String), InvalidBook> {
        let title = require_field("title", self.title)?;
        let author = require_field("author", self.author)?;
        Ok((title, author))
    }
}

/// Partial update payload. Absent fields retain their prior values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    /// Replacement title, if supplied. Must be non-empty.
    pub title: Option<String>,
    /// Replacement author, if supplied. Must be non-empty.
    pub author: Option<String>,
}

impl BookPatch {
    /// Check that every supplied field is non-empty.
    pub fn validate(&self) -> Result<(), InvalidBook> {
        if matches!(self.title.as_deref(), Some("")) {
            return Err(InvalidBook::MissingField("title"));
        }
        if matches!(self.author.as_deref(), Some("")) {
            return Err(InvalidBook::MissingField("author"));
        }
        Ok(())
    }
}

/// A write payload violated the required-field invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBook {
    /// A required field was absent or empty.
    #[error("book validation failed: `{0}` is required and must be non-empty")]
    MissingField(&'static str),
}

/// Unwrap a required field, rejecting absent or empty values.
fn require_field(name: &'static str, value: Option<String>) -> Result<String, InvalidBook> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(InvalidBook::MissingField(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_with_both_fields_passes() {
        let draft = BookDraft {
            title: Some("Dune".to_owned()),
            author: Some("Herbert".to_owned()),
        };
        assert_eq!(
            draft.into_fields(),
            Ok(("Dune".to_owned(), "Herbert".to_owned()))
        );
    }

    #[test]
    fn draft_missing_title_is_rejected() {
        let draft = BookDraft {
            title: None,
            author: Some("Herbert".to_owned()),
        };
        assert_eq!(draft.into_fields(), Err(InvalidBook::MissingField("title")));
    }

    #[test]
    fn draft_empty_author_is_rejected() {
        let draft = BookDraft {
            title: Some("Dune".to_owned()),
            author: Some(String::new()),
        };
        assert_eq!(
            draft.into_fields(),
            Err(InvalidBook::MissingField("author"))
        );
    }

    #[test]
    fn patch_allows_absent_fields() {
        let patch = BookPatch {
            title: Some("Dune Messiah".to_owned()),
            author: None,
        };
        assert_eq!(patch.validate(), Ok(()));
    }

    #[test]
    fn patch_rejects_empty_supplied_field() {
        let patch = BookPatch {
            title: Some(String::new()),
            author: None,
        };
        assert_eq!(patch.validate(), Err(InvalidBook::MissingField("title")));
    }

    #[test]
    fn book_serializes_with_camel_case_timestamps() {
        let book = Book {
            id: BookId::new(),
            title: "Dune".to_owned(),
            author: "Herbert".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&book).unwrap_or_default();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
