//! Link query criteria.

use crate::error::{Error, InvalidInputError};

/// Filter criteria shared by every links endpoint.
///
/// Only `target` is required. Empty strings and a zero `limit` are treated
/// as unset, so they never reach the query string.
///
/// # Example
///
/// ```
/// use constellation::LinksQuery;
///
/// let query = LinksQuery::new("at://did:plc:example/app.bsky.feed.post/x")
///     .collection("app.bsky.feed.like")
///     .path(".subject.uri")
///     .limit(5);
/// assert_eq!(query.limit, Some(5));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinksQuery {
    /// URI or DID that the returned records link to.
    pub target: String,
    /// Collection NSID of the linking records.
    pub collection: Option<String>,
    /// Path to the target reference inside the linking record.
    pub path: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Continuation token from a previous page.
    pub cursor: Option<String>,
}

impl LinksQuery {
    /// Create a query for everything linking to `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Restrict to linking records in `collection`.
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Restrict to links found at `path` within the linking record.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Limit the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resume from a cursor returned by a previous page.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Check the query can be sent.
    pub fn validate(&self) -> Result<(), Error> {
        if self.target.is_empty() {
            return Err(InvalidInputError::MissingParameter { name: "target" }.into());
        }
        Ok(())
    }

    pub(crate) fn collection_param(&self) -> Option<&str> {
        non_empty(self.collection.as_deref())
    }

    pub(crate) fn path_param(&self) -> Option<&str> {
        non_empty(self.path.as_deref())
    }

    pub(crate) fn limit_param(&self) -> Option<u32> {
        self.limit.filter(|&limit| limit > 0)
    }

    pub(crate) fn cursor_param(&self) -> Option<&str> {
        non_empty(self.cursor.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
