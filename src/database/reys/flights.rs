//! Flight repository
//!
//! Data access for destinations (`posts`) and the flights (`workers`) that
//! reference them.

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ReysError, Result};

/// Join of every flight with its destination, in insertion order
const SELECT_FLIGHTS: &str = "SELECT posts.title, workers.flight_number, workers.aircraft_type
     FROM workers
     INNER JOIN posts ON posts.id = workers.destination_id";

/// Repository for flight data operations
pub struct FlightRepository<'a> {
    conn: &'a Connection,
}

/// A flight joined with its destination title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub destination: String,
    pub flight_number: Option<String>,
    pub aircraft_type: i64,
}

impl<'a> FlightRepository<'a> {
    /// Create a new flight repository
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Record a flight, creating its destination on first use
    ///
    /// The destination lookup, the optional destination insert and the flight
    /// insert are committed together. Returns the row id of the new flight.
    pub fn add_flight(
        &self,
        destination_title: &str,
        flight_number: Option<&str>,
        aircraft_type: i64,
    ) -> Result<i64> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(ReysError::storage("Failed to begin transaction"))?;

        let destination_id = find_or_create_destination(&tx, destination_title)?;

        tx.execute(
            "INSERT INTO workers (destination_id, flight_number, aircraft_type) VALUES (?1, ?2, ?3)",
            params![destination_id, flight_number, aircraft_type],
        )
        .map_err(ReysError::storage("Failed to insert flight"))?;
        let flight_id = tx.last_insert_rowid();

        tx.commit()
            .map_err(ReysError::storage("Failed to commit flight"))?;

        info!(
            "stored flight {} to {} (aircraft type {})",
            flight_id, destination_title, aircraft_type
        );
        Ok(flight_id)
    }

    /// List every flight with its destination
    pub fn list_all(&self) -> Result<Vec<FlightRecord>> {
        let sql = format!("{SELECT_FLIGHTS} ORDER BY workers.id");
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(ReysError::storage("Failed to prepare flight query"))?;

        let records = stmt
            .query_map([], map_flight_row)
            .map_err(ReysError::storage("Failed to load flights"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(ReysError::storage("Failed to read flight row"))?;

        debug!("loaded {} flights", records.len());
        Ok(records)
    }

    /// List the flights whose destination title equals `title` exactly
    pub fn list_by_destination(&self, title: &str) -> Result<Vec<FlightRecord>> {
        let sql = format!("{SELECT_FLIGHTS} WHERE posts.title = ?1 ORDER BY workers.id");
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(ReysError::query("Failed to prepare destination filter"))?;

        let records = stmt
            .query_map([title], map_flight_row)
            .map_err(ReysError::storage("Failed to load flights"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(ReysError::storage("Failed to read flight row"))?;

        debug!("loaded {} flights to {}", records.len(), title);
        Ok(records)
    }

    /// Get the number of recorded destinations
    pub fn destination_count(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM posts", [], |row| row.get::<_, i64>(0))
            .map(|n| n as u64)
            .map_err(ReysError::storage("Failed to count destinations"))
    }

    /// Get the number of recorded flights
    pub fn flight_count(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM workers", [], |row| row.get::<_, i64>(0))
            .map(|n| n as u64)
            .map_err(ReysError::storage("Failed to count flights"))
    }
}

fn find_or_create_destination(conn: &Connection, title: &str) -> Result<i64> {
    let existing: Option<i64> = conn
        .query_row("SELECT id FROM posts WHERE title = ?1", [title], |row| {
            row.get(0)
        })
        .optional()
        .map_err(ReysError::storage("Failed to look up destination"))?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute("INSERT INTO posts (title) VALUES (?1)", [title])
        .map_err(ReysError::storage("Failed to insert destination"))?;
    let id = conn.last_insert_rowid();
    info!("created destination {} with id {}", title, id);
    Ok(id)
}

fn map_flight_row(row: &Row<'_>) -> rusqlite::Result<FlightRecord> {
    Ok(FlightRecord {
        destination: row.get(0)?,
        flight_number: row.get(1)?,
        aircraft_type: row.get(2)?,
    })
}
