//! Enumerate command - Append enumerations to clues.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use cryptic_core::enumerate;

#[derive(Args)]
pub struct EnumerateArgs {
    /// Clues to enumerate (one clue per stdin line when omitted)
    pub clues: Vec<String>,
}

pub async fn execute(args: EnumerateArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    write_enumerations(&args.clues, stdin.lock(), &mut stdout.lock())
}

/// Enumerate `clues`, or every line of `input` when there are none.
pub fn write_enumerations<R, W>(clues: &[String], input: R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if !clues.is_empty() {
        for clue in clues {
            writeln!(out, "{}", enumerate(clue))?;
        }
        return Ok(());
    }

    debug!("Reading clues from stdin");
    for line in input.lines() {
        let line = line.context("Failed to read clue from stdin")?;
        writeln!(out, "{}", enumerate(&line))?;
    }

    Ok(())
}
