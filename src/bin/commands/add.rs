use anyhow::Result;
use clap::Args;
use reys::lens::flights::{FlightAddArgs, FlightLens};
use reys::FlightDatabase;

/// Arguments for the Add command
#[derive(Args)]
pub struct AddArgs {
    #[clap(flatten)]
    pub flight: FlightAddArgs,
}

impl AddArgs {
    pub fn validate(&self) -> Result<()> {
        Ok(self.flight.validate()?)
    }
}

pub fn run(db: &FlightDatabase, args: AddArgs) -> Result<()> {
    let lens = FlightLens::new(db);
    lens.add(&args.flight)?;
    Ok(())
}
