//! Book resource controller for the Bookshelf CRUD API.
//!
//! This crate provides the Axum HTTP surface:
//!
//! - `GET /` -- health message
//! - `POST /books` -- create a book
//! - `GET /books` -- list all books
//! - `GET /books/{id}` -- fetch one book
//! - `PUT /books/{id}` -- partial update
//! - `DELETE /books/{id}` -- delete
//!
//! # Architecture
//!
//! There is exactly one route table ([`build_router`]); every
//! transport serves it. The local server ([`start_server`]) binds TCP
//! and serves the router directly. A hosting runtime instead mounts
//! the router as a tower service and never binds locally. Handlers
//! talk to the store through the injected
//! [`BookStore`](bookshelf_db::BookStore) trait object, so the
//! controller is independent of the configured backend.
//!
//! Each request is stateless; the only cross-request state is the
//! store handle inside [`AppState`].

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
