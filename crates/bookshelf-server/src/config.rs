//! Configuration for the server binary.
//!
//! All configuration is loaded from environment variables here, in the
//! binary crate; the library crates receive explicit config values.

use crate::error::AppError;

/// Complete server settings loaded from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Database connection string. Optional at load time; the
    /// connection manager reports a configuration error at the first
    /// connection attempt when it is absent.
    pub database_url: Option<String>,
    /// Host address to bind in local server mode.
    pub host: String,
    /// TCP port to listen on in local server mode.
    pub port: u16,
    /// Which transport to run.
    pub run_mode: RunMode,
    /// Which store backend to use.
    pub backend: Backend,
}

/// Transport selection for the single route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Bind a TCP listener and serve HTTP locally.
    Server,
    /// Suppress local listening; serve JSON invocation envelopes on
    /// stdin/stdout for an embedding host.
    Invoke,
}

/// Store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// `PostgreSQL` via the lazily connected pool.
    Postgres,
    /// In-process memory store (local development, no database).
    Memory,
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// Variables:
    /// - `DATABASE_URL` -- `PostgreSQL` connection string (required at
    ///   first connection, not at startup)
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- listen port (default `8080`)
    /// - `RUN_MODE` -- `server` (default) or `invoke`
    /// - `BOOKSHELF_BACKEND` -- `postgres` (default) or `memory`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// `from_env` passes process environment access here; tests pass a
    /// closure so defaults and parse errors are exercised without
    /// mutating process state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL");

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8080".to_owned())
            .parse()
            .map_err(|e| AppError::Config(format!("invalid PORT: {e}")))?;

        let run_mode =
            parse_run_mode(&lookup("RUN_MODE").unwrap_or_else(|| "server".to_owned()))?;

        let backend = parse_backend(
            &lookup("BOOKSHELF_BACKEND").unwrap_or_else(|| "postgres".to_owned()),
        )?;

        Ok(Self {
            database_url,
            host,
            port,
            run_mode,
            backend,
        })
    }
}

/// Parse the `RUN_MODE` value.
fn parse_run_mode(value: &str) -> Result<RunMode, AppError> {
    match value.to_lowercase().as_str() {
        "server" => Ok(RunMode::Server),
        "invoke" => Ok(RunMode::Invoke),
        other => Err(AppError::Config(format!("unknown RUN_MODE: {other}"))),
    }
}

/// Parse the `BOOKSHELF_BACKEND` value.
fn parse_backend(value: &str) -> Result<Backend, AppError> {
    match value.to_lowercase().as_str() {
        "postgres" => Ok(Backend::Postgres),
        "memory" => Ok(Backend::Memory),
        other => Err(AppError::Config(format!(
            "unknown BOOKSHELF_BACKEND: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn run_mode_parsing() {
        assert!(matches!(parse_run_mode("server"), Ok(RunMode::Server)));
        assert!(matches!(parse_run_mode("INVOKE"), Ok(RunMode::Invoke)));
        assert!(parse_run_mode("lambda").is_err());
    }

    #[test]
    fn backend_parsing() {
        assert!(matches!(parse_backend("postgres"), Ok(Backend::Postgres)));
        assert!(matches!(parse_backend("Memory"), Ok(Backend::Memory)));
        assert!(parse_backend("mongo").is_err());
    }

    #[test]
    fn empty_environment_yields_documented_defaults() {
        let settings = Settings::from_lookup(|_| None).unwrap();

        assert_eq!(settings.database_url, None);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.run_mode, RunMode::Server);
        assert_eq!(settings.backend, Backend::Postgres);
    }

    #[test]
    fn explicit_variables_override_defaults() {
        let settings = Settings::from_lookup(|name| match name {
            "PORT" => Some("9090".to_owned()),
            "RUN_MODE" => Some("invoke".to_owned()),
            "BOOKSHELF_BACKEND" => Some("memory".to_owned()),
            "DATABASE_URL" => Some("postgresql://localhost/bookshelf".to_owned()),
            _ => None,
        })
        .unwrap();

        assert_eq!(settings.port, 9090);
        assert_eq!(settings.run_mode, RunMode::Invoke);
        assert_eq!(settings.backend, Backend::Memory);
        assert!(settings.database_url.is_some());
    }

    #[test]
    fn malformed_port_is_a_config_error() {
        let result = Settings::from_lookup(|name| match name {
            "PORT" => Some("eight-thousand".to_owned()),
            _ => None,
        });
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
