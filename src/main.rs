//! Hurricane Statistics - CLI
//!
//! Runs the full descriptive analysis over the hurricane table and prints
//! each report in turn:
//! 1. Normalized damage figures
//! 2. Every hurricane record
//! 3. Hurricanes grouped by year
//! 4. Affected-area tally
//! 5. Most affected area
//! 6. Deadliest hurricane
//! 7. Mortality rating
//! 8. Costliest hurricane
//! 9. Damage rating
//!
//! Usage:
//!   cargo run                                   # Embedded table, text output
//!   cargo run -- --format json                  # Whole analysis as JSON
//!   cargo run -- --data data/hurricanes.toml    # Analyze a catalog file
//!   cargo run -- --name Camille                 # Single hurricane lookup
//!   cargo run -- --year 2005                    # Hurricanes of one year
//!
//! Environment (also read from .env):
//!   HURRICANE_STATS_DATA   - default for --data
//!   HURRICANE_STATS_CONFIG - default for --config
//!   RUST_LOG               - log level override
//!
//! Exits with status 1 if the dataset or configuration is malformed.

use clap::{Parser, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use hurricane_stats::analysis::groupings::group_by_year;
use hurricane_stats::config::{AnalysisConfig, load_config};
use hurricane_stats::ingest::{DatasetSource, load_dataset};
use hurricane_stats::logging;
use hurricane_stats::report::{AnalysisReport, render_record, render_year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "hurricane_stats", version, about = "Descriptive statistics over historical Atlantic hurricanes")]
struct Cli {
    /// Hurricane catalog (TOML) to analyze instead of the embedded table
    #[arg(long, value_name = "PATH", env = "HURRICANE_STATS_DATA")]
    data: Option<PathBuf>,

    /// Severity scale configuration (TOML)
    #[arg(long, value_name = "PATH", env = "HURRICANE_STATS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show a single hurricane instead of the full analysis
    #[arg(long, value_name = "NAME", conflicts_with = "year")]
    name: Option<String>,

    /// Show the hurricanes of one year instead of the full analysis
    #[arg(long, value_name = "YEAR")]
    year: Option<i32>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Only report errors on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let source = match &cli.data {
        Some(path) => DatasetSource::Catalog(path.clone()),
        None => DatasetSource::Embedded,
    };
    let dataset = load_dataset(&source)?;
    logging::log_dataset_summary(&dataset);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };
    logging::log_config_info(&config);

    if let Some(name) = &cli.name {
        let record = dataset
            .get(name)
            .ok_or_else(|| format!("No hurricane named '{}' in {}", name, source))?;
        match cli.format {
            OutputFormat::Text => print!("{}", render_record(record)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        }
        return Ok(());
    }

    if let Some(year) = cli.year {
        let index = group_by_year(&dataset);
        let records = index.get(year);
        match cli.format {
            OutputFormat::Text => print!("{}", render_year(year, records)),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&records.unwrap_or(&[]))?)
            }
        }
        return Ok(());
    }

    let report = AnalysisReport::build(&dataset, &config);
    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.to_json())?),
    }
    Ok(())
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
