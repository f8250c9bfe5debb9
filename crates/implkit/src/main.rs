//! Shape Areas - Entry Point
//!
//! Reads a JSON array of shape descriptions and prints the area of each,
//! one per line, resolving shape types through the linked configuration
//! units.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use implkit::infrastructure::logging::init_logging;
use implkit::Result;
use implkit::infrastructure::{ConfigLoader, ContextHolder};
use implkit::shape_parser::{read_shapes, shape_areas};
use implkit::shapes;

/// Command line interface for the shape area calculator
#[derive(Parser, Debug)]
#[command(name = "shape-areas")]
#[command(about = "Shape Areas - print the area of each shape in a JSON file")]
#[command(version)]
pub struct Cli {
    /// JSON file holding an array of shape objects
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long)]
    pub log_level: Option<String>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_logging(&config.logging)?;

    // Referencing the unit entries keeps them in the linked binary
    tracing::debug!("Linked shape units: {:?}", shapes::unit_names());
    let holder = ContextHolder::from_discovery(&config.discovery);
    let input = read_shapes(&cli.input)?;
    for area in shape_areas(holder.context()?, input)? {
        println!("{}", area);
    }
    Ok(())
}
