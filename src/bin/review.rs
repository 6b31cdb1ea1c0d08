//! Command-line access to the review engine.
//!
//! Usage:
//!   cargo run --bin review -- analyze --driver-id 2 "The driver was excellent and punctual"
//!   cargo run --bin review -- generate --driver-id 1
//!   cargo run --bin review -- drivers

use anyhow::Result;
use clap::{Parser, Subcommand};
use driver_review::{config::Config, engine::ReviewEngine, init_tracing};
use serde_json::json;

#[derive(Parser)]
#[command(name = "review")]
#[command(about = "Score and generate driver reviews", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score review text for a driver and print the analysis report
    Analyze {
        #[arg(long)]
        driver_id: i64,
        /// Also print which lexicon words matched
        #[arg(long)]
        verbose: bool,
        text: String,
    },
    /// Print the deterministic synthetic review for a driver
    Generate {
        #[arg(long)]
        driver_id: i64,
    },
    /// List the configured driver directory
    Drivers,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = Config::load()?;
    let engine = ReviewEngine::from_config(&config.directory)?;

    let output = match cli.command {
        Commands::Analyze {
            driver_id,
            verbose,
            text,
        } => {
            let (report, matches) = engine.analyze_verbose(&text, driver_id);
            if verbose {
                json!({ "report": report, "matched": matches })
            } else {
                serde_json::to_value(&report)?
            }
        }
        Commands::Generate { driver_id } => serde_json::to_value(engine.generate(driver_id))?,
        Commands::Drivers => serde_json::to_value(engine.directory().iter().collect::<Vec<_>>())?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
