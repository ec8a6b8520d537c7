//! Endpoint paths and wire-level request/error types.

use serde::{Deserialize, Serialize};

use crate::types::LinksQuery;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Service description.
pub const API_INFO: &str = "/";

/// Records linking to a target.
pub const LINKS: &str = "/links";

/// Number of records linking to a target.
pub const LINKS_COUNT: &str = "/links/count";

/// Distinct DIDs linking to a target.
pub const DISTINCT_DIDS: &str = "/links/distinct-dids";

/// Number of distinct DIDs linking to a target.
pub const DISTINCT_DIDS_COUNT: &str = "/links/count/distinct-dids";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the links endpoints.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LinksParams<'a> {
    pub target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
}

impl<'a> LinksParams<'a> {
    /// All filters plus paging.
    pub fn paged(query: &'a LinksQuery) -> Self {
        Self {
            limit: query.limit_param(),
            cursor: query.cursor_param(),
            ..Self::unpaged(query)
        }
    }

    /// Filters only; `limit` and `cursor` are dropped.
    pub fn unpaged(query: &'a LinksQuery) -> Self {
        Self {
            target: &query.target,
            collection: query.collection_param(),
            path: query.path_param(),
            limit: None,
            cursor: None,
        }
    }
}

/// Error body some deployments return alongside a failure status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    /// Whatever text the service gave, preferring the message.
    pub fn into_text(self) -> Option<String> {
        match (self.error, self.message) {
            (Some(error), Some(message)) => Some(format!("{}: {}", error, message)),
            (error, message) => message.or(error),
        }
    }
}
