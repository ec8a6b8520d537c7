//! Client configuration.

use std::time::Duration;

/// Public Constellation instance.
pub const DEFAULT_BASE_URL: &str = "https://constellation.microcosm.blue";

/// Per-request timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent when neither an override nor the environment supplies one.
pub const DEFAULT_USER_AGENT: &str = concat!("constellation-rs/", env!("CARGO_PKG_VERSION"));

/// Environment variable that replaces [`DEFAULT_USER_AGENT`].
pub const ENV_USER_AGENT: &str = "CONSTELLATION_USER_AGENT";

/// Settings fixed for the lifetime of a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Config for `base_url` and `timeout`, with the User-Agent taken from the
    /// process environment or the default.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_env(base_url, timeout, |key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::new`] but reading the environment through `lookup`.
    pub fn with_env<F>(base_url: impl Into<String>, timeout: Duration, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: base_url.into(),
            timeout,
            user_agent: resolve_user_agent(None, lookup),
        }
    }

    /// Replace the User-Agent unconditionally.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

/// Pick the User-Agent: explicit override, then a non-empty
/// [`ENV_USER_AGENT`], then [`DEFAULT_USER_AGENT`].
///
/// ```
/// use constellation::config::{resolve_user_agent, DEFAULT_USER_AGENT};
///
/// assert_eq!(resolve_user_agent(None, |_| None), DEFAULT_USER_AGENT);
/// assert_eq!(resolve_user_agent(Some("app/1.0"), |_| Some("env/2.0".into())), "app/1.0");
/// ```
pub fn resolve_user_agent<F>(override_ua: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(ua) = override_ua {
        return ua.to_string();
    }

    lookup(ENV_USER_AGENT)
        .filter(|ua| !ua.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
}
