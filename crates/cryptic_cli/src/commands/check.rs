//! Check command - Warn about a missing enumeration.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use cryptic_core::EnumerationWarning;

#[derive(Args)]
pub struct CheckArgs {
    /// Clue submission to check
    pub submission: String,
}

pub async fn execute(args: CheckArgs) -> Result<()> {
    check_submission(&args.submission, &mut std::io::stdout().lock())
}

/// Report on `submission`, failing when the enumeration is missing.
pub fn check_submission<W: Write>(submission: &str, out: &mut W) -> Result<()> {
    match EnumerationWarning::for_submission(submission) {
        EnumerationWarning::Hidden => {
            writeln!(out, "✅ Enumeration found")?;
            Ok(())
        }
        EnumerationWarning::Shown(message) => {
            writeln!(out, "⚠️  {}", message)?;
            anyhow::bail!("Validation failed: submission is missing an enumeration")
        }
    }
}
