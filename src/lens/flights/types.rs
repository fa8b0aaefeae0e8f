//! Flight lens types

use tabled::Tabled;

pub use crate::database::FlightRecord;

/// One numbered line of the flight table
#[derive(Debug, Clone, Tabled)]
pub struct FlightTableRow {
    #[tabled(rename = "No")]
    pub no: usize,
    #[tabled(rename = "Destination")]
    pub destination: String,
    #[tabled(rename = "Flight Number")]
    pub flight_number: String,
    #[tabled(rename = "Type")]
    pub aircraft_type: i64,
}

impl FlightTableRow {
    /// Build the table row for the `no`-th record (1-based)
    pub fn new(no: usize, record: &FlightRecord) -> Self {
        Self {
            no,
            destination: record.destination.clone(),
            flight_number: record.flight_number.clone().unwrap_or_default(),
            aircraft_type: record.aircraft_type,
        }
    }

    /// Number a sequence of records starting at 1
    pub fn numbered(records: &[FlightRecord]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(idx, record)| Self::new(idx + 1, record))
            .collect()
    }
}
