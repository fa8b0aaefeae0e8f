//! Flight lens
//!
//! This module provides the flight lens for recording and querying flights.
//! It combines argument validation, the database repository and output
//! formatting.
//!
//! # Example
//!
//! ```rust,ignore
//! use reys::database::FlightDatabase;
//! use reys::lens::flights::{FlightAddArgs, FlightLens, FlightSelectArgs};
//! use reys::lens::utils::OutputFormat;
//!
//! let db = FlightDatabase::open_in_memory()?;
//! let lens = FlightLens::new(&db);
//! lens.add(&FlightAddArgs::new("Paris", Some("AB123"), 777))?;
//!
//! let flights = lens.select(&FlightSelectArgs::new("Paris"))?;
//! println!("{}", lens.format_results(&flights, &OutputFormat::Table));
//! ```

pub mod args;
pub mod render;
pub mod types;

pub use args::{FlightAddArgs, FlightSelectArgs};
pub use render::{format_flights, render_table, COLUMN_WIDTHS, EMPTY_MESSAGE};
pub use types::{FlightRecord, FlightTableRow};

use crate::database::FlightDatabase;
use crate::error::Result;
use crate::lens::utils::OutputFormat;

/// Flight lens for recording and listing flights
pub struct FlightLens<'a> {
    db: &'a FlightDatabase,
}

impl<'a> FlightLens<'a> {
    /// Create a new flight lens
    pub fn new(db: &'a FlightDatabase) -> Self {
        Self { db }
    }

    /// Record a flight, returning its row id
    pub fn add(&self, args: &FlightAddArgs) -> Result<i64> {
        args.validate()?;
        self.db.flights().add_flight(
            &args.destination,
            args.flight_number.as_deref(),
            args.aircraft_type,
        )
    }

    /// List every recorded flight
    pub fn display(&self) -> Result<Vec<FlightRecord>> {
        self.db.flights().list_all()
    }

    /// List the flights to the requested destination
    pub fn select(&self, args: &FlightSelectArgs) -> Result<Vec<FlightRecord>> {
        args.validate()?;
        self.db.flights().list_by_destination(&args.destination)
    }

    /// Format records for output
    pub fn format_results(&self, records: &[FlightRecord], format: &OutputFormat) -> String {
        format_flights(records, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReysError;

    #[test]
    fn test_empty_database_renders_placeholder() {
        let db = FlightDatabase::open_in_memory().unwrap();
        let lens = FlightLens::new(&db);

        let flights = lens.display().unwrap();
        assert!(flights.is_empty());
        assert_eq!(render_table(&flights), EMPTY_MESSAGE);
    }

    #[test]
    fn test_add_then_display() {
        let db = FlightDatabase::open_in_memory().unwrap();
        let lens = FlightLens::new(&db);

        lens.add(&FlightAddArgs::new("Paris", Some("AB123"), 777))
            .unwrap();

        assert_eq!(
            lens.display().unwrap(),
            vec![FlightRecord {
                destination: "Paris".to_string(),
                flight_number: Some("AB123".to_string()),
                aircraft_type: 777,
            }]
        );
    }

    #[test]
    fn test_select_by_destination() {
        let db = FlightDatabase::open_in_memory().unwrap();
        let lens = FlightLens::new(&db);

        lens.add(&FlightAddArgs::new("Paris", Some("AB123"), 777))
            .unwrap();
        lens.add(&FlightAddArgs::new("Paris", Some("CD456"), 320))
            .unwrap();
        lens.add(&FlightAddArgs::new("Berlin", Some("LH400"), 320))
            .unwrap();

        let paris = lens.select(&FlightSelectArgs::new("Paris")).unwrap();
        assert_eq!(paris.len(), 2);
        assert!(paris.iter().all(|f| f.destination == "Paris"));

        let output = render_table(&paris);
        assert!(output.contains("AB123"));
        assert!(output.contains("CD456"));
        assert!(!output.contains("LH400"));

        assert!(lens
            .select(&FlightSelectArgs::new("Tokyo"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_add_rejects_empty_destination() {
        let db = FlightDatabase::open_in_memory().unwrap();
        let lens = FlightLens::new(&db);

        let result = lens.add(&FlightAddArgs::new("", Some("AB123"), 777));
        assert!(matches!(result, Err(ReysError::Argument(_))));
        assert_eq!(db.flights().flight_count().unwrap(), 0);
    }

    #[test]
    fn test_format_results_json() {
        let db = FlightDatabase::open_in_memory().unwrap();
        let lens = FlightLens::new(&db);
        lens.add(&FlightAddArgs::new("Oslo", None, 737)).unwrap();

        let flights = lens.display().unwrap();
        let output = lens.format_results(&flights, &OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["destination"], "Oslo");
        assert!(parsed[0]["flight_number"].is_null());
    }
}
