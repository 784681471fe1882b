//! Error types for the server binary.

/// Top-level failures in the server binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A configuration value was missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The local HTTP server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] bookshelf_api::ServerError),

    /// The invocation transport failed reading or writing.
    #[error("invoke transport error: {0}")]
    Io(#[from] std::io::Error),
}
