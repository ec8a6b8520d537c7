//! Info command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::warn;

use constellation::ConstellationClient;

use crate::output;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Print the raw response as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &ConstellationClient, args: InfoArgs) -> Result<()> {
    let info = client
        .api_info()
        .await
        .context("Failed to fetch service info")?;

    if args.json {
        return output::json_pretty(&info);
    }

    output::field("Service", client.base_url());
    output::field("Days indexed", info.days_indexed);
    output::field("DIDs", info.stats.dids);
    output::field("Targetables", info.stats.targetables);
    output::field("Linking records", info.stats.linking_records);

    if let Some(error) = &info.error {
        warn!(error = %error, "Service reported an error");
    }
    if let Some(help) = &info.help {
        eprintln!();
        eprintln!("{}", help.dimmed());
    }

    Ok(())
}
