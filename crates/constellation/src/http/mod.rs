//! HTTP plumbing shared by every endpoint.

mod client;
mod endpoints;

pub(crate) use client::HttpClient;
pub(crate) use endpoints::*;
