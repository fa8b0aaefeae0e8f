//! Database module
//!
//! This module provides all database functionality for reys, organized into:
//!
//! - **core**: Core database infrastructure (SQLite connections, schema management)
//! - **reys**: The flight store (destinations and flights)
//!
//! # Architecture
//!
//! ```text
//! database/
//! ├── core/           # Foundation
//! │   ├── connection  # SQLite DatabaseConn wrapper
//! │   └── schema      # Table definitions and SchemaManager
//! │
//! └── reys/           # Persistent storage
//!     └── flights     # Destination and flight repository
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use reys::database::FlightDatabase;
//!
//! let db = FlightDatabase::open(Path::new("/home/me/reys.db"))?;
//! db.flights().add_flight("Paris", Some("AB123"), 777)?;
//!
//! for flight in db.flights().list_by_destination("Paris")? {
//!     println!("{} {:?} {}", flight.destination, flight.flight_number, flight.aircraft_type);
//! }
//! ```

pub mod core;
pub mod reys;

// SQLite connection and schema management
pub use self::core::{
    DatabaseConn, SchemaDefinitions, SchemaManager, SchemaStatus, REQUIRED_TABLES,
};

// Flight database (main entry point) and repository
pub use self::reys::{FlightDatabase, FlightRecord, FlightRepository};
