//! CLI command definitions.
//!
//! Each subcommand wraps one of the contest page helpers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod check;
pub mod enumerate;
pub mod repeats;
pub mod sort;

/// cryptic - helpers for the cryptic clue contest
#[derive(Parser)]
#[command(name = "cryptic")]
#[command(version, about = "cryptic - helpers for the cryptic clue contest")]
#[command(long_about = r#"
cryptic runs the cryptic clue contest's page helpers from the terminal.

COMMANDS:
  enumerate  → Append a letter-count enumeration to a clue
  check      → Warn when a submission is missing its enumeration
  repeats    → Look a proposed contest word up among earlier contests
  sort       → Sort a delimited table by a column

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Search failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (defaults to ./cryptic.toml when present)
    #[arg(long, global = true, env = "CRYPTIC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append an enumeration to each clue
    Enumerate(enumerate::EnumerateArgs),

    /// Check that a submission ends with an enumeration
    Check(check::CheckArgs),

    /// Check a contest word for repeats
    Repeats(repeats::RepeatsArgs),

    /// Sort a table by a column
    Sort(sort::SortArgs),
}
