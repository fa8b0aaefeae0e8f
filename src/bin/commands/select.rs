use anyhow::Result;
use clap::Args;
use reys::lens::flights::{FlightLens, FlightSelectArgs};
use reys::lens::utils::OutputFormat;
use reys::FlightDatabase;

/// Arguments for the Select command
#[derive(Args)]
pub struct SelectArgs {
    #[clap(flatten)]
    pub filter: FlightSelectArgs,
}

impl SelectArgs {
    pub fn validate(&self) -> Result<()> {
        Ok(self.filter.validate()?)
    }
}

pub fn run(db: &FlightDatabase, args: SelectArgs, format: OutputFormat) -> Result<()> {
    let lens = FlightLens::new(db);
    let flights = lens.select(&args.filter)?;
    println!("{}", lens.format_results(&flights, &format));
    Ok(())
}
