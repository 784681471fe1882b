//! Type-safe identifier wrapper around [`Uuid`].
//!
//! The book identifier uses UUID v7 (time-ordered) for efficient
//! database indexing. Identifiers are generated app-side by the store
//! on insert and are immutable afterwards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for BookId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<BookId> for Uuid {
    fn from(id: BookId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_nonnil_and_distinct() {
        let a = BookId::new();
        let b = BookId::new();
        assert_ne!(a.into_inner(), Uuid::nil());
        assert_ne!(a, b);
    }

    #[test]
    fn display_matches_inner_uuid() {
        let id = BookId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
