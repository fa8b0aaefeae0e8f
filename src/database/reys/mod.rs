//! Reys database storage
//!
//! This module provides the persistent flight store: destinations and the
//! flights that reference them, kept in a single SQLite file.

mod flights;

pub use flights::{FlightRecord, FlightRepository};

use std::path::Path;

use tracing::{debug, info};

use crate::database::core::{DatabaseConn, SchemaManager, SchemaStatus};
use crate::error::Result;

/// Main reys database (SQLite backend)
///
/// Opening a `FlightDatabase` always runs the schema manager, so the returned
/// handle is ready for reads and writes.
pub struct FlightDatabase {
    db: DatabaseConn,
}

impl FlightDatabase {
    /// Open the flight database at the specified path
    ///
    /// If the file doesn't exist, it will be created and initialized.
    pub fn open(path: &Path) -> Result<Self> {
        let db = DatabaseConn::open_path(path)?;
        Self::initialize(db)
    }

    /// Create an in-memory flight database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let db = DatabaseConn::open_in_memory()?;
        Self::initialize(db)
    }

    fn initialize(db: DatabaseConn) -> Result<Self> {
        let schema = SchemaManager::new(&db.conn);
        match schema.check_status()? {
            SchemaStatus::Ready => debug!("flight database schema is ready"),
            SchemaStatus::NotInitialized => info!("initializing flight database schema"),
            SchemaStatus::Partial => info!("completing partial flight database schema"),
        }
        schema.ensure_schema()?;

        Ok(Self { db })
    }

    /// Get a reference to the flight repository
    pub fn flights(&self) -> FlightRepository<'_> {
        FlightRepository::new(&self.db.conn)
    }

    /// Get the underlying database connection (for advanced queries)
    pub fn connection(&self) -> &rusqlite::Connection {
        &self.db.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = FlightDatabase::open_in_memory().unwrap();
        let status = SchemaManager::new(db.connection()).check_status().unwrap();
        assert_eq!(status, SchemaStatus::Ready);
        assert!(db.flights().list_all().unwrap().is_empty());
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reys.db");

        {
            let db = FlightDatabase::open(&path).unwrap();
            db.flights().add_flight("Paris", Some("AB123"), 777).unwrap();
        }

        let db = FlightDatabase::open(&path).unwrap();
        let records = db.flights().list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].destination, "Paris");
        assert_eq!(db.flights().destination_count().unwrap(), 1);
    }
}
