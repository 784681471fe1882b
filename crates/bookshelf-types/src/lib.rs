//! Domain types for the Bookshelf CRUD API.
//!
//! This crate defines the single persisted entity, [`Book`], its
//! strongly-typed identifier [`BookId`], and the two request payload
//! shapes ([`BookDraft`] for create, [`BookPatch`] for partial update)
//! shared by every store backend and transport.
//!
//! # Modules
//!
//! - [`ids`] -- the [`BookId`] newtype
//! - [`book`] -- entity and payload structs plus field validation

pub mod book;
pub mod ids;

// Re-export primary types for convenience.
pub use book::{Book, BookDraft, BookPatch, InvalidBook};
pub use ids::BookId;
