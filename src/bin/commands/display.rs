use anyhow::Result;
use reys::lens::flights::FlightLens;
use reys::lens::utils::OutputFormat;
use reys::FlightDatabase;

pub fn run(db: &FlightDatabase, format: OutputFormat) -> Result<()> {
    let lens = FlightLens::new(db);
    let flights = lens.display()?;
    println!("{}", lens.format_results(&flights, &format));
    Ok(())
}
