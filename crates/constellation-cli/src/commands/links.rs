//! Links command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use constellation::ConstellationClient;

use super::{FilterArgs, PageArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct LinksArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub page: PageArgs,

    /// Pretty-print each record
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(client: &ConstellationClient, args: LinksArgs) -> Result<()> {
    let query = args.filter.into_query(Some(args.page));

    let page = client
        .get_links(&query)
        .await
        .context("Failed to fetch links")?;

    if page.linking_records.is_empty() {
        eprintln!("{}", "No linking records found.".dimmed());
        return Ok(());
    }

    for record in &page.linking_records {
        if args.pretty {
            output::json_pretty(record)?;
        } else {
            output::json(record)?;
        }
    }

    eprintln!(
        "{}",
        format!("{} of {} records", page.linking_records.len(), page.total).dimmed()
    );
    output::cursor(page.cursor.as_deref());

    Ok(())
}
