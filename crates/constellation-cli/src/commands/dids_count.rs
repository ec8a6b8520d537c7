//! Distinct DID count command implementation.

use anyhow::{Context, Result};
use clap::Args;

use constellation::ConstellationClient;

use super::{FilterArgs, PageArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct DidsCountArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    // The service accepts paging here too, so it is passed along.
    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run(client: &ConstellationClient, args: DidsCountArgs) -> Result<()> {
    let query = args.filter.into_query(Some(args.page));

    let total = client
        .get_distinct_dids_count(&query)
        .await
        .context("Failed to count distinct DIDs")?;

    output::field("Total", total);

    Ok(())
}
