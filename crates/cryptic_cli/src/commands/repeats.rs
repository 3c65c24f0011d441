//! Repeats command - Look a contest word up among earlier contests.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cryptic_core::{check_for_repeats, CrypticConfig, HttpSearchClient, SearchClient};

#[derive(Args)]
pub struct RepeatsArgs {
    /// Proposed contest word (an existing enumeration is ignored)
    #[arg(required = true, num_args = 1..)]
    pub word: Vec<String>,

    /// Site root of the contest server
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the page markup instead of plain text
    #[arg(long)]
    pub html: bool,
}

pub async fn execute(args: RepeatsArgs, mut config: CrypticConfig) -> Result<()> {
    if let Some(base_url) = &args.base_url {
        config.search.base_url = base_url.clone();
    }

    let client =
        HttpSearchClient::new(&config.search).context("Failed to build search client")?;
    info!("Using search endpoint {}", client.endpoint());

    report_repeats(&client, &args, &mut std::io::stdout().lock()).await
}

/// Run the repeat check through `client` and print its report.
pub async fn report_repeats<C, W>(client: &C, args: &RepeatsArgs, out: &mut W) -> Result<()>
where
    C: SearchClient + ?Sized,
    W: Write,
{
    let word = args.word.join(" ");
    let Some(report) = check_for_repeats(client, &word).await? else {
        writeln!(out, "Nothing to check")?;
        return Ok(());
    };

    if args.html {
        writeln!(out, "{}", report.to_html())?;
    } else {
        writeln!(out, "{}", report)?;
    }

    if report.is_failure() {
        anyhow::bail!("Check for repeats failed");
    }

    Ok(())
}
