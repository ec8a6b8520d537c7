//! Distinct DIDs command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use constellation::ConstellationClient;

use super::{FilterArgs, PageArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct DidsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run(client: &ConstellationClient, args: DidsArgs) -> Result<()> {
    let query = args.filter.into_query(Some(args.page));

    let page = client
        .get_distinct_dids(&query)
        .await
        .context("Failed to fetch distinct DIDs")?;

    if page.linking_dids.is_empty() {
        eprintln!("{}", "No linking DIDs found.".dimmed());
        return Ok(());
    }

    for did in &page.linking_dids {
        println!("{}", did);
    }

    eprintln!(
        "{}",
        format!("{} of {} DIDs", page.linking_dids.len(), page.total).dimmed()
    );
    output::cursor(page.cursor.as_deref());

    Ok(())
}
