//! Error types for the constellation client.
//!
//! Every failure is reported through [`Error`], with one variant per cause so
//! callers can tell a bad query apart from a network or server problem.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The unified error type for constellation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors, raised before any request is sent.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a non-success HTTP status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Returns true if the request was rejected before reaching the network.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Returns true for connection and timeout failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns true for non-success HTTP responses.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Error::Protocol(_))
    }

    /// Returns true if the body did not match the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// HTTP status of a protocol error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Protocol(e) => Some(e.status),
            _ => None,
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A required query parameter was empty.
    #[error("{name} parameter is required")]
    MissingParameter { name: &'static str },

    /// Invalid DID format.
    #[error("invalid DID '{value}': {reason}")]
    Did { value: String, reason: String },

    /// Base URL that cannot be parsed into a request URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// User-Agent that is not a legal header value.
    #[error("invalid User-Agent '{value}'")]
    UserAgent { value: String },
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl TransportError {
    /// Classify a reqwest failure, recording the configured timeout if it fired.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: timeout.as_millis() as u64,
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

/// A non-success HTTP response.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase for the status, if known.
    pub reason: Option<String>,
    /// Error text reported by the service in the body, if any.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref reason) = self.reason {
            write!(f, " {}", reason)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, reason: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            reason,
            message,
        }
    }

    /// Returns true if the service asked us to slow down.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// A response body that was not the JSON we expected.
#[derive(Debug, Error)]
#[error("failed to decode {endpoint} response: {source}")]
pub struct DecodeError {
    /// Endpoint path the body came from.
    pub endpoint: &'static str,
    #[source]
    pub source: serde_json::Error,
}
