//! cryptic CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Search failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cryptic_core::{CrypticConfig, CrypticError};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const SEARCH_FAILURE: u8 = 4;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("cryptic={level},cryptic_core={level},warn"))
    });

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Enumerate(args) => commands::enumerate::execute(args).await,
        Commands::Check(args) => commands::check::execute(args).await,
        Commands::Repeats(args) => {
            // Only the search needs configuration
            let current_dir = std::env::current_dir()?;
            let config = CrypticConfig::load(cli.config.as_deref(), &current_dir)?;
            commands::repeats::execute(args, config).await
        }
        Commands::Sort(args) => commands::sort::execute(args).await,
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<CrypticError>() {
        return match err {
            CrypticError::Http(_) | CrypticError::Json(_) => ExitCodes::SEARCH_FAILURE,
            CrypticError::Config { .. }
            | CrypticError::InvalidUrl(_)
            | CrypticError::ColumnNotFound(_) => ExitCodes::INVALID_ARGS,
            CrypticError::Io(_) => ExitCodes::GENERAL_ERROR,
        };
    }

    let msg = e.to_string().to_lowercase();

    if msg.contains("validation") || msg.contains("enumeration") {
        ExitCodes::VALIDATION_FAILURE
    } else if msg.contains("search") || msg.contains("repeats") {
        ExitCodes::SEARCH_FAILURE
    } else if msg.contains("argument") || msg.contains("not found") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
