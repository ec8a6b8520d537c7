//! constellation - Client for the Constellation backlink index
//!
//! [Constellation](https://constellation.microcosm.blue) indexes every link
//! between AT Protocol records and answers "who links to this?" queries.
//! This crate wraps its read-only HTTP API in typed methods on
//! [`ConstellationClient`].
//!
//! # Example
//!
//! ```no_run
//! use constellation::{ConstellationClient, LinksQuery};
//!
//! # async fn example() -> Result<(), constellation::Error> {
//! let client = ConstellationClient::new()?;
//!
//! let query = LinksQuery::new("at://did:plc:vc7f4oafdgxsihk4cry2xpze/app.bsky.feed.post/3lgwdn7vd722r")
//!     .collection("app.bsky.feed.like")
//!     .path(".subject.uri")
//!     .limit(5);
//! let page = client.get_links(&query).await?;
//!
//! for record in &page.linking_records {
//!     println!("{}", record.at_uri());
//! }
//! if let Some(cursor) = page.cursor {
//!     let next = client.get_links(&query.cursor(cursor)).await?;
//!     println!("{} more", next.linking_records.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
mod http;
pub mod types;

// Re-export primary types at crate root for convenience
pub use client::ConstellationClient;
pub use config::ClientConfig;
pub use error::Error;
pub use types::{
    CountResult, Did, DistinctDidsPage, LinkRecord, LinksPage, LinksQuery, ServiceInfo, Stats,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
