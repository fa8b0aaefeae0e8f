//! Error types
//!
//! Every fallible library call returns [`Result`], whose error side is
//! [`ReysError`]. The binary wraps these in `anyhow` for reporting.

use thiserror::Error;

/// Errors produced by the reys library
#[derive(Debug, Error)]
pub enum ReysError {
    /// The storage file could not be opened, read or written
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Required input is missing or malformed
    #[error("invalid argument: {0}")]
    Argument(String),

    /// A statement could not be constructed
    #[error("{context}: {source}")]
    Query {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(String),
}

impl ReysError {
    /// Build a `map_err` adapter that wraps a SQLite error as [`ReysError::Storage`]
    pub(crate) fn storage(context: &'static str) -> impl FnOnce(rusqlite::Error) -> ReysError {
        move |source| ReysError::Storage {
            context: context.to_string(),
            source,
        }
    }

    /// Build a `map_err` adapter that wraps a SQLite error as [`ReysError::Query`]
    pub(crate) fn query(context: &'static str) -> impl FnOnce(rusqlite::Error) -> ReysError {
        move |source| ReysError::Query {
            context: context.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReysError>;
