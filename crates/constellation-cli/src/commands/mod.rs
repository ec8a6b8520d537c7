//! Subcommand implementations, one per endpoint.

mod count;
mod dids;
mod dids_count;
mod info;
mod links;

use anyhow::Result;
use clap::{Args, Subcommand};

use constellation::{ConstellationClient, LinksQuery};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show what the index covers
    Info(info::InfoArgs),

    /// List records linking to a target
    Links(links::LinksArgs),

    /// Count records linking to a target
    Count(count::CountArgs),

    /// List distinct DIDs linking to a target
    Dids(dids::DidsArgs),

    /// Count distinct DIDs linking to a target
    DidsCount(dids_count::DidsCountArgs),
}

pub async fn handle(client: &ConstellationClient, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Info(args) => info::run(client, args).await,
        Commands::Links(args) => links::run(client, args).await,
        Commands::Count(args) => count::run(client, args).await,
        Commands::Dids(args) => dids::run(client, args).await,
        Commands::DidsCount(args) => dids_count::run(client, args).await,
    }
}

/// Filters shared by every links subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// AT URI, DID or URL being linked to
    #[arg(long)]
    pub target: String,

    /// Collection NSID of the linking records (e.g. app.bsky.feed.like)
    #[arg(long)]
    pub collection: Option<String>,

    /// Path of the link inside the record (e.g. .subject.uri)
    #[arg(long)]
    pub path: Option<String>,
}

/// Paging controls.
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Maximum number of results to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Pagination cursor
    #[arg(long)]
    pub cursor: Option<String>,
}

impl FilterArgs {
    fn into_query(self, page: Option<PageArgs>) -> LinksQuery {
        let (limit, cursor) = page.map_or((None, None), |p| (p.limit, p.cursor));
        LinksQuery {
            target: self.target,
            collection: self.collection,
            path: self.path,
            limit,
            cursor,
        }
    }
}
