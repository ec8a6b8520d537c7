//! Decoded response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Did;

/// Root endpoint response describing the index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Human-readable usage notes.
    #[serde(default)]
    pub help: Option<String>,
    /// Number of days of firehose history indexed.
    #[serde(default)]
    pub days_indexed: u64,
    /// Index size counters.
    #[serde(default)]
    pub stats: Stats,
    /// Error text, when the service reports one in-band.
    #[serde(default)]
    pub error: Option<String>,
}

/// Index size counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Distinct DIDs seen.
    #[serde(default)]
    pub dids: u64,
    /// Distinct link targets.
    #[serde(default)]
    pub targetables: u64,
    /// Records containing at least one link.
    #[serde(default)]
    pub linking_records: u64,
}

/// A record that links to the queried target.
///
/// `did` is parsed as a [`Did`], so an author string that is not of the form
/// `did:<method>:<id>` fails decoding of the whole page rather than being
/// passed through. Constellation indexes atproto repositories, whose authors
/// always carry such DIDs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Author of the linking record.
    pub did: Did,
    /// Collection NSID of the linking record.
    pub collection: String,
    /// Record key within the collection.
    pub rkey: String,
    /// Full AT URI of the record, when the service includes it.
    #[serde(default)]
    pub uri: Option<String>,
    /// Content hash of the record.
    #[serde(default)]
    pub cid: Option<String>,
    /// When the record was indexed, as sent by the service.
    #[serde(default, rename = "indexedAt")]
    pub indexed_at: Option<String>,
    /// Record body. Its shape depends on the collection and is not interpreted.
    #[serde(default)]
    pub value: serde_json::Value,
}

impl LinkRecord {
    /// AT URI for this record, built from its parts when the service omits it.
    pub fn at_uri(&self) -> String {
        match &self.uri {
            Some(uri) if !uri.is_empty() => uri.clone(),
            _ => format!("at://{}/{}/{}", self.did, self.collection, self.rkey),
        }
    }

    /// Parsed `indexedAt`, if present and RFC 3339.
    pub fn indexed_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.indexed_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// One page of linking records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinksPage {
    /// Total matches across all pages.
    #[serde(default)]
    pub total: u64,
    /// Records on this page, in service order.
    #[serde(default)]
    pub linking_records: Vec<LinkRecord>,
    /// Cursor for the next page; `None` when there are no more.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cursor: Option<String>,
}

impl LinksPage {
    /// Returns true if another page can be requested.
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}

/// A bare count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    #[serde(default)]
    pub total: u64,
}

/// One page of distinct linking DIDs.
///
/// The client does not deduplicate across pages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistinctDidsPage {
    /// Total distinct DIDs across all pages.
    #[serde(default)]
    pub total: u64,
    /// Linking accounts. A malformed DID fails decoding, as for [`LinkRecord::did`].
    #[serde(default)]
    pub linking_dids: Vec<Did>,
    /// Cursor for the next page; `None` when there are no more.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cursor: Option<String>,
}

impl DistinctDidsPage {
    /// Returns true if another page can be requested.
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}

// A null or empty cursor marks the last page.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let cursor = Option::<String>::deserialize(deserializer)?;
    Ok(cursor.filter(|c| !c.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn links_page_minimal_records() {
        let page: LinksPage = serde_json::from_value(json!({
            "total": 2,
            "linking_records": [
                {"did": "did:plc:a", "collection": "app.bsky.feed.like", "rkey": "3k1"},
                {"did": "did:plc:b", "collection": "app.bsky.feed.like", "rkey": "3k2"}
            ],
            "cursor": null
        }))
        .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.linking_records.len(), 2);
        assert!(!page.has_more());
        assert_eq!(page.linking_records[0].value, serde_json::Value::Null);
        assert_eq!(
            page.linking_records[1].at_uri(),
            "at://did:plc:b/app.bsky.feed.like/3k2"
        );
    }

    #[test]
    fn links_page_full_record() {
        let page: LinksPage = serde_json::from_value(json!({
            "total": 1,
            "linking_records": [{
                "did": "did:plc:example",
                "collection": "app.bsky.feed.like",
                "rkey": "example-rkey",
                "uri": "at://did:plc:example/app.bsky.feed.like/example-rkey",
                "cid": "example-cid",
                "indexedAt": "2023-01-01T00:00:00Z",
                "value": {"key": "value"}
            }],
            "cursor": "next"
        }))
        .unwrap();

        let record = &page.linking_records[0];
        assert_eq!(record.cid.as_deref(), Some("example-cid"));
        assert_eq!(record.value["key"], "value");
        assert_eq!(
            record.indexed_at_utc().unwrap().to_rfc3339(),
            "2023-01-01T00:00:00+00:00"
        );
        assert_eq!(page.cursor.as_deref(), Some("next"));
    }

    #[test]
    fn empty_cursor_means_last_page() {
        let page: DistinctDidsPage =
            serde_json::from_value(json!({"total": 0, "linking_dids": [], "cursor": ""})).unwrap();
        assert!(page.cursor.is_none());
        assert!(!page.has_more());
    }

    #[test]
    fn missing_fields_default() {
        let page: LinksPage = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page, LinksPage::default());

        let count: CountResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(count.total, 0);
    }

    #[test]
    fn service_info_stats() {
        let info: ServiceInfo = serde_json::from_value(json!({
            "help": "open this URL in a web browser for docs",
            "days_indexed": 120,
            "stats": {"dids": 30, "targetables": 400, "linking_records": 5000}
        }))
        .unwrap();

        assert_eq!(info.days_indexed, 120);
        assert_eq!(info.stats.linking_records, 5000);
        assert!(info.error.is_none());
    }

    #[test]
    fn bad_indexed_at_is_none() {
        let record: LinkRecord = serde_json::from_value(json!({
            "did": "did:plc:a", "collection": "c", "rkey": "r", "indexedAt": "yesterday"
        }))
        .unwrap();
        assert!(record.indexed_at_utc().is_none());
    }

    #[test]
    fn invalid_author_did_fails_links_page() {
        let result = serde_json::from_value::<LinksPage>(json!({
            "total": 2,
            "linking_records": [
                {"did": "did:plc:a", "collection": "c", "rkey": "r1"},
                {"did": "did:PLC:b", "collection": "c", "rkey": "r2"}
            ]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_did_fails_decode() {
        let result = serde_json::from_value::<DistinctDidsPage>(json!({
            "total": 1, "linking_dids": ["not-a-did"]
        }));
        assert!(result.is_err());
    }
}
