//! Database connection management
//!
//! This module provides the SQLite connection wrapper used by the flight store.

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::error::{ReysError, Result};

/// Core database connection wrapper
///
/// `DatabaseConn` provides a thin wrapper around SQLite connections,
/// handling both file-based and in-memory databases with consistent
/// configuration and error handling.
pub struct DatabaseConn {
    pub conn: Connection,
}

impl DatabaseConn {
    /// Open a database at the specified path
    ///
    /// If the path is `None`, an in-memory database is created. The file is
    /// created when missing, but its parent directory must already exist.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let conn = match path {
            Some(p) => {
                debug!("opening database at {}", p.display());
                Connection::open(p).map_err(ReysError::storage("Failed to open database"))?
            }
            None => Connection::open_in_memory()
                .map_err(ReysError::storage("Failed to create in-memory database"))?,
        };

        let db = DatabaseConn { conn };
        db.configure()?;
        Ok(db)
    }

    /// Open a database at the specified path (convenience method)
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Some(path))
    }

    /// Create an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::open(None)
    }

    fn configure(&self) -> Result<()> {
        // Declared foreign keys are only checked when this is on
        self.conn
            .execute("PRAGMA foreign_keys=ON", [])
            .map_err(ReysError::storage("Failed to enable foreign keys"))?;

        Ok(())
    }
}
