//! Decentralized Identifier (DID) type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated Decentralized Identifier naming a record author.
///
/// The index reports authors as `did:plc:` or `did:web:` identifiers.
///
/// # Example
///
/// ```
/// use constellation::Did;
///
/// let did = Did::new("did:plc:vc7f4oafdgxsihk4cry2xpze").unwrap();
/// assert_eq!(did.method(), "plc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Did(String);

impl Did {
    /// Create a new DID from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `did:<method>:<identifier>`.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the DID method (e.g., "plc" for "did:plc:...").
    pub fn method(&self) -> &str {
        self.split().0
    }

    /// Returns the method-specific identifier.
    pub fn identifier(&self) -> &str {
        self.split().1
    }

    /// Returns the full DID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn split(&self) -> (&str, &str) {
        self.0
            .strip_prefix("did:")
            .and_then(|rest| rest.split_once(':'))
            .unwrap_or(("", ""))
    }

    fn validate(s: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::Did {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let Some(rest) = s.strip_prefix("did:") else {
            return Err(invalid("must start with 'did:'"));
        };

        let Some((method, identifier)) = rest.split_once(':') else {
            return Err(invalid("must have format 'did:<method>:<identifier>'"));
        };

        if method.is_empty() || !method.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(invalid("method must be non-empty lowercase letters"));
        }

        if identifier.is_empty() {
            return Err(invalid("identifier must be non-empty"));
        }

        Ok(())
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Did {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Did {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Did> for String {
    fn from(did: Did) -> Self {
        did.0
    }
}

impl AsRef<str> for Did {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
