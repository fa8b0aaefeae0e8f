use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use reys::lens::utils::OutputFormat;
use reys::{FlightDatabase, ReysConfig};
use tracing::{debug, Level};

mod commands;

use commands::add::AddArgs;
use commands::select::SelectArgs;

trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// configuration file path, by default $HOME/.reys.toml is used if present
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Print debug information
    #[clap(long, global = true)]
    debug: bool,

    /// The database file name, by default $HOME/reys.db
    #[clap(long, global = true)]
    db: Option<PathBuf>,

    /// Output format: table, markdown, json, psv
    #[clap(short, long, global = true, default_value = "table")]
    format: OutputFormat,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new flight
    Add(AddArgs),

    /// Display all flights
    Display,

    /// Select the flights to a destination
    Select(SelectArgs),
}

impl Validate for Commands {
    fn validate(&self) -> Result<()> {
        match self {
            Commands::Add(args) => args.validate(),
            Commands::Display => Ok(()),
            Commands::Select(args) => args.validate(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Bad arguments are reported before the database is touched
    if let Some(command) = &cli.command {
        command.validate()?;
    }

    let config = ReysConfig::load(cli.config.as_deref())?.with_db_path(cli.db);
    debug!("{}", config.summary());

    let db = FlightDatabase::open(&config.db_path)?;

    match cli.command {
        Some(Commands::Add(args)) => commands::add::run(&db, args),
        Some(Commands::Display) => commands::display::run(&db, cli.format),
        Some(Commands::Select(args)) => commands::select::run(&db, args, cli.format),
        None => Ok(()),
    }
}
