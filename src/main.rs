//! Binary entry point for scour.
//!
//! This binary provides the CLI interface for the scour utilities.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use scour::cli::{cmd_redact, cmd_serve};
use scour::config::ScourConfig;
use scour::observability::{self, InitOptions};
use std::process::ExitCode;

/// Scour - credential scrubbing and connectivity diagnostics.
#[derive(Parser)]
#[command(name = "scour")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Filter stdin to stdout, redacting known credentials.
    Redact,

    /// Start the diagnostic HTTP server.
    Serve,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init(InitOptions {
        verbose: cli.verbose,
    }) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: &Cli, config: &ScourConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Redact => cmd_redact().map_err(Into::into),
        Commands::Serve => cmd_serve(config).map_err(Into::into),
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> Result<ScourConfig, Box<dyn std::error::Error>> {
    // If a path is provided, load from that file
    if let Some(config_path) = path {
        return ScourConfig::load_from_file(std::path::Path::new(config_path))
            .map_err(std::convert::Into::into);
    }

    // Environment override for config path
    if let Ok(config_path) = std::env::var("SCOUR_CONFIG_PATH") {
        if !config_path.trim().is_empty() {
            return ScourConfig::load_from_file(std::path::Path::new(&config_path))
                .map_err(std::convert::Into::into);
        }
    }

    // Otherwise, load from default location
    Ok(ScourConfig::load_default())
}
