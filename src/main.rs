//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `photo_probe` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.
//!
//! The binary's stdout contract is a single line: the URL of the largest
//! picture. Progress, summaries, and errors all go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use photo_probe::initialization::{init_crypto_provider, init_logger_with};
use photo_probe::{run_probe, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting NASA_API_KEY in .env without exporting it manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Initialize crypto provider for the TLS listing request
    init_crypto_provider();

    match run_probe(config).await {
        Ok(report) => {
            log::info!(
                "Largest of {} image{} is {} bytes ({:.1}s)",
                report.total_images,
                if report.total_images == 1 { "" } else { "s" },
                report.largest.size,
                report.elapsed_seconds
            );
            println!("{}", report.largest.url);
            Ok(())
        }
        Err(e) => {
            eprintln!("photo_probe error: {:#}", e);
            process::exit(1);
        }
    }
}
