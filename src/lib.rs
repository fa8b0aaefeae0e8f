#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Reys - a personal flight log
//!
//! Reys records flights (destination, flight number, aircraft type) in a local
//! SQLite file and lists them back as tables. It can be used as both a
//! command-line application and a library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | (none) | SQLite storage, configuration, errors | `rusqlite`, `config` |
//! | `display` | Lens layer and table formatting | `tabled` |
//! | `cli` | CLI binary | All above + `clap`, `tracing-subscriber` |
//!
//! # Architecture
//!
//! - **[`database`]**: SQLite connection, schema management and the flight repository
//! - **[`lens`]**: Argument validation plus repository calls plus output formatting
//!   (requires `display`)
//! - **[`config`]**: Configuration management (database location)
//! - **[`error`]**: The [`ReysError`] type shared by every layer
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use reys::database::FlightDatabase;
//! use reys::ReysConfig;
//!
//! let config = ReysConfig::load(None)?;
//! let db = FlightDatabase::open(&config.db_path)?;
//!
//! db.flights().add_flight("Paris", Some("AB123"), 777)?;
//! db.flights().add_flight("Paris", Some("CD456"), 320)?;
//!
//! // Both flights share one destination row
//! assert_eq!(db.flights().destination_count()?, 1);
//! ```

pub mod config;
pub mod database;
pub mod error;

#[cfg(feature = "display")]
pub mod lens;

pub use crate::config::ReysConfig;
pub use crate::database::{FlightDatabase, FlightRecord};
pub use crate::error::{Result, ReysError};
