//! Main entry point for the elo-ledger augmentation tool
//!
//! Parses the command line, loads and validates configuration, runs one
//! augmentation pass, and reports the summary with proper error handling,
//! logging, and exit codes.

use anyhow::{Context, Result};
use clap::Parser;
use elo_ledger::config::{validate_config, AppConfig};
use elo_ledger::error::AugmentError;
use elo_ledger::processor::StreamProcessor;
use elo_ledger::utils::derive_output_path;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Elo Ledger - pre-match Elo feature augmentation for match CSVs
#[derive(Parser)]
#[command(
    name = "elo-ledger",
    version,
    about = "Appends pre-match Elo rating columns to a chronological match CSV",
    long_about = "Elo Ledger reads a chronologically ordered CSV of paired-competitor \
                 matches, maintains per-entity Elo ratings across the stream, and writes \
                 the same table with both sides' pre-match ratings and their difference \
                 appended to every row."
)]
struct Args {
    /// Input CSV path
    #[arg(value_name = "INPUT", help = "Chronologically ordered match CSV")]
    input: PathBuf,

    /// Output CSV path
    #[arg(
        value_name = "OUTPUT",
        help = "Output path (derived from the input path when omitted)"
    )]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// K-factor override
    #[arg(long, value_name = "K", help = "Override the Elo k-factor")]
    k_factor: Option<f64>,

    /// Initial rating override
    #[arg(
        long,
        value_name = "RATING",
        help = "Override the rating assigned to unseen competitors"
    )]
    initial_rating: Option<f64>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and schema, then exit)
    #[arg(
        long,
        help = "Validate configuration and input schema, then exit without writing output"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level.
///
/// Diagnostics go to stderr so the stdout summary stays machine-readable.
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment/file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(k_factor) = args.k_factor {
        config.rating.k_factor = k_factor;
    }

    if let Some(initial_rating) = args.initial_rating {
        config.rating.initial_rating = initial_rating;
    }

    validate_config(&config)?;
    Ok(config)
}

/// Display run information before processing starts
fn display_run_banner(config: &AppConfig, input: &Path, output: &Path) {
    info!("{} v{}", config.service.name, elo_ledger::VERSION);
    info!("   Input: {}", input.display());
    info!("   Output: {}", output.display());
    info!("   Initial rating: {}", config.rating.initial_rating);
    info!("   K-factor: {}", config.rating.k_factor);
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    if !args.input.exists() {
        return Err(AugmentError::InputNotFound {
            path: args.input.display().to_string(),
        }
        .into());
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&args.input, &config.output.path_suffix));

    let processor = StreamProcessor::new(config.clone())?;

    if args.dry_run {
        let input = fs::File::open(&args.input)
            .with_context(|| format!("Failed to open input '{}'", args.input.display()))?;
        processor.validate_schema(BufReader::new(input))?;
        info!("Configuration and schema validation successful");
        info!("Dry run completed - exiting without writing output");
        return Ok(());
    }

    display_run_banner(config, &args.input, &output_path);

    let summary = processor.augment_file(&args.input, &output_path)?;

    println!("Processed {} rows.", summary.rows_processed);
    println!("Tracked {} distinct competitors.", summary.distinct_entities);
    println!("Done. Wrote {}", output_path.display());

    Ok(())
}

fn main() {
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args, &config) {
        error!("Augmentation failed: {:#}", e);
        std::process::exit(1);
    }
}
