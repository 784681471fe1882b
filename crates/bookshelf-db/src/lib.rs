//! Data layer for the Bookshelf CRUD API.
//!
//! The store is an opaque collaborator behind the [`BookStore`] trait:
//! the HTTP controller only ever sees `insert`/`list`/`get`/`update`/
//! `delete`. Two backends implement it:
//!
//! - [`PgBookStore`] -- `PostgreSQL` via [`sqlx`], the production
//!   backend. Connections are established lazily through [`Database`],
//!   which guards first use so concurrent callers share a single
//!   in-flight connect attempt.
//! - [`MemoryBookStore`] -- in-process map, used by the API tests and
//!   available for local development without a database.
//!
//! # Modules
//!
//! - [`database`] -- lazy process-lifetime connection manager
//! - [`postgres`] -- `PostgreSQL` pool configuration and wrapper
//! - [`store`] -- the [`BookStore`] trait
//! - [`pg_store`] -- `PostgreSQL` backend
//! - [`memory`] -- in-memory backend
//! - [`error`] -- shared [`DbError`] type

pub mod database;
pub mod error;
pub mod memory;
pub mod pg_store;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use database::Database;
pub use error::DbError;
pub use memory::MemoryBookStore;
pub use pg_store::PgBookStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use store::BookStore;
