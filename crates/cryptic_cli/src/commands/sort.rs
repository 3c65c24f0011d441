//! Sort command - Sort a delimited table by a column.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use cryptic_core::{SortState, Table};

#[derive(Args)]
pub struct SortArgs {
    /// Column header or 1-based position
    #[arg(short, long)]
    pub column: String,

    /// Number of header clicks to apply (even counts sort descending)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub clicks: u32,

    /// Cell delimiter
    #[arg(short, long, default_value_t = '\t')]
    pub delimiter: char,

    /// Table file (stdin when omitted)
    pub file: Option<PathBuf>,
}

pub async fn execute(args: SortArgs) -> Result<()> {
    let text = read_table(args.file.as_deref())?;
    println!("{}", sort_text(&text, &args)?);
    Ok(())
}

fn read_table(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read table {:?}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read table from stdin")?;
            Ok(buffer)
        }
    }
}

/// Sort `text` as the header clicks in `args` would.
pub fn sort_text(text: &str, args: &SortArgs) -> Result<String> {
    let mut table = Table::parse(text, args.delimiter);
    let idx = table.column_index(&args.column)?;

    let mut state = SortState::new();
    for _ in 0..args.clicks {
        let direction = state.click(&mut table, idx);
        debug!("Sorted column {} {:?}", idx, direction);
    }

    Ok(table.render(args.delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptic_core::CrypticError;
    use tempfile::tempdir;

    const LEADERBOARD: &str = "User,Wins\nalice,2\nbob,10\ncarol,1\n";

    fn args(column: &str, clicks: u32) -> SortArgs {
        SortArgs {
            column: column.to_string(),
            clicks,
            delimiter: ',',
            file: None,
        }
    }

    #[test]
    fn test_single_click_sorts_ascending() {
        assert_eq!(
            sort_text(LEADERBOARD, &args("wins", 1)).unwrap(),
            "User,Wins\ncarol,1\nalice,2\nbob,10"
        );
    }

    #[test]
    fn test_clicks_alternate_direction() {
        assert_eq!(
            sort_text(LEADERBOARD, &args("2", 2)).unwrap(),
            "User,Wins\nbob,10\nalice,2\ncarol,1"
        );
        assert_eq!(
            sort_text(LEADERBOARD, &args("2", 3)).unwrap(),
            "User,Wins\ncarol,1\nalice,2\nbob,10"
        );
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let err = sort_text(LEADERBOARD, &args("likes", 1)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CrypticError>(),
            Some(CrypticError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_reads_table_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("leaderboard.csv");
        std::fs::write(&path, LEADERBOARD).unwrap();

        let text = read_table(Some(&path)).unwrap();
        assert_eq!(
            sort_text(&text, &args("User", 2)).unwrap(),
            "User,Wins\ncarol,1\nbob,10\nalice,2"
        );
    }

    #[test]
    fn test_missing_table_file() {
        let temp = tempdir().unwrap();
        let err = read_table(Some(&temp.path().join("missing.csv"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read table"));
    }
}
