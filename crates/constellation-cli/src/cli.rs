//! CLI argument definitions.

use std::time::Duration;

use clap::{Args, Parser};

use constellation::ConstellationClient;
use constellation::config::{ClientConfig, DEFAULT_BASE_URL};

use crate::commands::Commands;

/// Query a Constellation backlink index.
#[derive(Parser, Debug)]
#[command(name = "constellation")]
#[command(author, version = env!("CONSTELLATION_CLI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how to reach the service.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Constellation base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// User-Agent header (overrides CONSTELLATION_USER_AGENT)
    #[arg(long, global = true)]
    pub user_agent: Option<String>,
}

impl ConnectionArgs {
    pub fn client(&self) -> constellation::Result<ConstellationClient> {
        let mut config = ClientConfig::new(&self.base_url, Duration::from_secs(self.timeout));
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        ConstellationClient::from_config(config)
    }
}
