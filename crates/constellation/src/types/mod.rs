//! Query and response types.
//!
//! Responses are plain values decoded fresh on every call; nothing here holds
//! a connection or cache.

mod did;
mod query;
mod responses;

pub use did::Did;
pub use query::LinksQuery;
pub use responses::{CountResult, DistinctDidsPage, LinkRecord, LinksPage, ServiceInfo, Stats};
