//! Flight lens arguments
//!
//! These structs double as `clap` argument groups when the `cli` feature is
//! enabled. Flags: `-p/--pynkt` for the destination, `-n/--numb` for the
//! flight number and `-s/--samolet` for the aircraft type. Each long flag also
//! has an English alias.

use crate::error::{ReysError, Result};

/// Arguments for recording a flight
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct FlightAddArgs {
    /// Destination of the flight
    #[cfg_attr(
        feature = "cli",
        clap(short = 'p', long = "pynkt", visible_alias = "destination")
    )]
    pub destination: String,

    /// Flight number, e.g. AB123
    #[cfg_attr(
        feature = "cli",
        clap(short = 'n', long = "numb", visible_alias = "flight-number")
    )]
    pub flight_number: Option<String>,

    /// Aircraft type code, e.g. 320
    #[cfg_attr(
        feature = "cli",
        clap(short = 's', long = "samolet", visible_alias = "aircraft-type")
    )]
    pub aircraft_type: i64,
}

impl FlightAddArgs {
    pub fn new(destination: &str, flight_number: Option<&str>, aircraft_type: i64) -> Self {
        Self {
            destination: destination.to_string(),
            flight_number: flight_number.map(str::to_string),
            aircraft_type,
        }
    }

    /// Reject input that cannot be stored
    pub fn validate(&self) -> Result<()> {
        validate_destination(&self.destination)
    }
}

/// Arguments for listing the flights to one destination
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct FlightSelectArgs {
    /// Destination to filter by (exact match)
    #[cfg_attr(
        feature = "cli",
        clap(short = 'P', long = "pynkt", visible_alias = "destination")
    )]
    pub destination: String,
}

impl FlightSelectArgs {
    pub fn new(destination: &str) -> Self {
        Self {
            destination: destination.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_destination(&self.destination)
    }
}

fn validate_destination(destination: &str) -> Result<()> {
    if destination.trim().is_empty() {
        return Err(ReysError::Argument(
            "destination must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_args_valid() {
        let args = FlightAddArgs::new("Paris", Some("AB123"), 777);
        assert!(args.validate().is_ok());
        assert_eq!(args.flight_number.as_deref(), Some("AB123"));
    }

    #[test]
    fn test_add_args_without_flight_number() {
        let args = FlightAddArgs::new("Paris", None, 777);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_add_args_empty_destination() {
        let args = FlightAddArgs::new("   ", Some("AB123"), 777);
        assert!(matches!(args.validate(), Err(ReysError::Argument(_))));
    }

    #[test]
    fn test_select_args_empty_destination() {
        assert!(matches!(
            FlightSelectArgs::new("").validate(),
            Err(ReysError::Argument(_))
        ));
        assert!(FlightSelectArgs::new("Paris").validate().is_ok());
    }
}
