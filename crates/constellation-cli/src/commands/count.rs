//! Count command implementation.

use anyhow::{Context, Result};
use clap::Args;

use constellation::ConstellationClient;

use super::FilterArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct CountArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub async fn run(client: &ConstellationClient, args: CountArgs) -> Result<()> {
    let query = args.filter.into_query(None);

    let count = client
        .get_links_count(&query)
        .await
        .context("Failed to count links")?;

    output::field("Total", count.total);

    Ok(())
}
