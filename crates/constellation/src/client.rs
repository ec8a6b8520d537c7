//! Typed client for the Constellation backlink index.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::Result;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::http::{self, HttpClient, LinksParams};
use crate::types::{CountResult, DistinctDidsPage, LinksPage, LinksQuery, ServiceInfo};

/// Client for a Constellation instance.
///
/// Holds only immutable configuration and a reusable HTTP client, so it can be
/// cloned cheaply and shared across tasks. Every method is a single GET; a
/// failed call leaves the client usable.
#[derive(Debug, Clone)]
pub struct ConstellationClient {
    http: HttpClient,
}

impl ConstellationClient {
    /// Client for the public instance with the default timeout.
    ///
    /// The User-Agent comes from `CONSTELLATION_USER_AGENT` if set.
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    /// Client for `base_url` with a custom timeout.
    pub fn with_config(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url, timeout))
    }

    /// Client for the public instance sending `user_agent`, ignoring the
    /// environment.
    pub fn with_user_agent(user_agent: impl Into<String>) -> Result<Self> {
        let config = ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: user_agent.into(),
        };
        Self::from_config(config)
    }

    /// Client for an explicit configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self { http })
    }

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    pub fn base_url(&self) -> &str {
        &self.config().base_url
    }

    pub fn timeout(&self) -> Duration {
        self.config().timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.config().user_agent
    }

    /// Describe the index: days covered and size counters.
    ///
    /// Endpoint: `GET /`
    #[instrument(skip(self))]
    pub async fn api_info(&self) -> Result<ServiceInfo> {
        self.http.get_json(http::API_INFO, None).await
    }

    /// One page of records linking to `query.target`.
    ///
    /// Endpoint: `GET /links`
    #[instrument(skip(self, query), fields(target = %query.target))]
    pub async fn get_links(&self, query: &LinksQuery) -> Result<LinksPage> {
        query.validate()?;
        let params = LinksParams::paged(query);
        let page: LinksPage = self.http.get_json(http::LINKS, Some(&params)).await?;
        debug!(
            total = page.total,
            returned = page.linking_records.len(),
            "links page"
        );
        Ok(page)
    }

    /// Number of records linking to `query.target`.
    ///
    /// `limit` and `cursor` are not sent to this endpoint.
    ///
    /// Endpoint: `GET /links/count`
    #[instrument(skip(self, query), fields(target = %query.target))]
    pub async fn get_links_count(&self, query: &LinksQuery) -> Result<CountResult> {
        query.validate()?;
        let params = LinksParams::unpaged(query);
        self.http.get_json(http::LINKS_COUNT, Some(&params)).await
    }

    /// One page of distinct DIDs linking to `query.target`.
    ///
    /// Endpoint: `GET /links/distinct-dids`
    #[instrument(skip(self, query), fields(target = %query.target))]
    pub async fn get_distinct_dids(&self, query: &LinksQuery) -> Result<DistinctDidsPage> {
        query.validate()?;
        let params = LinksParams::paged(query);
        let page: DistinctDidsPage = self.http.get_json(http::DISTINCT_DIDS, Some(&params)).await?;
        debug!(
            total = page.total,
            returned = page.linking_dids.len(),
            "distinct dids page"
        );
        Ok(page)
    }

    /// Number of distinct DIDs linking to `query.target`.
    ///
    /// `limit` and `cursor` are forwarded like the paged endpoint; the
    /// service decides whether they matter.
    ///
    /// Endpoint: `GET /links/count/distinct-dids`
    #[instrument(skip(self, query), fields(target = %query.target))]
    pub async fn get_distinct_dids_count(&self, query: &LinksQuery) -> Result<u64> {
        query.validate()?;
        let params = LinksParams::paged(query);
        let count: CountResult = self
            .http
            .get_json(http::DISTINCT_DIDS_COUNT, Some(&params))
            .await?;
        Ok(count.total)
    }
}
