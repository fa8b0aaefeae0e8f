//! Database schema management
//!
//! This module holds the table definitions for the flight store and the
//! manager that creates them on demand.

use rusqlite::Connection;
use tracing::debug;

use crate::error::{ReysError, Result};

/// Tables that must exist for the store to be usable
pub const REQUIRED_TABLES: [&str; 2] = ["posts", "workers"];

/// Schema definitions for all tables in the flight store
pub struct SchemaDefinitions;

impl SchemaDefinitions {
    /// SQL for creating the destinations table
    ///
    /// `title` is unique so a destination can only be recorded once.
    pub const DESTINATIONS_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL UNIQUE
        );
    "#;

    /// SQL for creating the flights table
    pub const FLIGHTS_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS workers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            destination_id INTEGER NOT NULL,
            flight_number TEXT,
            aircraft_type INTEGER NOT NULL,
            FOREIGN KEY(destination_id) REFERENCES posts(id)
        );
    "#;

    /// SQL for creating flight indexes
    pub const FLIGHTS_INDEXES: &'static [&'static str] = &[
        "CREATE INDEX IF NOT EXISTS idx_workers_destination_id ON workers(destination_id)",
    ];
}

/// Schema manager for the flight store
///
/// Creates the required tables when they are missing. Every statement is
/// `IF NOT EXISTS`, so running it against an initialized file changes nothing.
pub struct SchemaManager<'a> {
    conn: &'a Connection,
}

impl<'a> SchemaManager<'a> {
    /// Create a new schema manager for the given connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Create the destinations and flights tables if either is absent
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute(SchemaDefinitions::DESTINATIONS_TABLE, [])
            .map_err(ReysError::storage("Failed to create posts table"))?;

        self.conn
            .execute(SchemaDefinitions::FLIGHTS_TABLE, [])
            .map_err(ReysError::storage("Failed to create workers table"))?;

        for index_sql in SchemaDefinitions::FLIGHTS_INDEXES {
            self.conn
                .execute(index_sql, [])
                .map_err(ReysError::storage("Failed to create workers index"))?;
        }

        Ok(())
    }

    /// Check the current schema status
    pub fn check_status(&self) -> Result<SchemaStatus> {
        let mut present = 0;
        for table in REQUIRED_TABLES {
            if self.table_exists(table)? {
                present += 1;
            }
        }

        let status = match present {
            0 => SchemaStatus::NotInitialized,
            n if n == REQUIRED_TABLES.len() => SchemaStatus::Ready,
            _ => SchemaStatus::Partial,
        };
        debug!("schema status: {:?}", status);
        Ok(status)
    }

    /// Check if a table exists in the database
    pub fn table_exists(&self, table_name: &str) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table_name],
                |row| row.get(0),
            )
            .map_err(ReysError::storage("Failed to check table existence"))?;
        Ok(count > 0)
    }
}

/// Status of the database schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// None of the required tables exist (fresh database)
    NotInitialized,

    /// Some, but not all, required tables exist
    Partial,

    /// All required tables exist
    Ready,
}
