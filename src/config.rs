//! Client configuration.
//!
//! Everything is read from environment variables by [`ClientConfig::from_env`];
//! builder methods cover the same fields for programmatic use.
//!
//! # Example
//!
//! ```ignore
//! use creatorkit::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_api_url("https://api.example.com")
//!     .with_request_timeout(std::time::Duration::from_secs(20));
//! ```

use std::time::Duration;

/// Backend base URL.
pub const ENV_API_URL: &str = "CREATORKIT_API_URL";
/// Raw `Cookie` header value carrying an existing session.
pub const ENV_SESSION_COOKIE: &str = "CREATORKIT_SESSION_COOKIE";
/// Analytics capture endpoint.
pub const ENV_ANALYTICS_URL: &str = "CREATORKIT_ANALYTICS_URL";
/// Analytics project key.
pub const ENV_ANALYTICS_KEY: &str = "CREATORKIT_ANALYTICS_KEY";
/// Page opened after logout.
pub const ENV_LOGIN_URL: &str = "CREATORKIT_LOGIN_URL";
/// Per-request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "CREATORKIT_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL. `None` makes every request fail with a configuration error.
    pub api_url: Option<String>,
    /// Sent as the `Cookie` header on every request when set
    pub session_cookie: Option<String>,
    /// Analytics capture endpoint; events are only logged when unset
    pub analytics_url: Option<String>,
    pub analytics_key: Option<String>,
    /// Login page; defaults to `{api_url}/login`
    pub login_url: Option<String>,
    /// No timeout when unset
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Enable HTTP analytics capture.
    pub fn with_analytics(mut self, url: impl Into<String>, key: impl Into<String>) -> Self {
        self.analytics_url = Some(url.into());
        self.analytics_key = Some(key.into());
        self
    }

    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = Some(url.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset. An unparsable timeout is ignored
    /// with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let request_timeout = get(ENV_TIMEOUT_SECS).and_then(|raw| match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => {
                tracing::warn!("Ignoring invalid {}: {:?}", ENV_TIMEOUT_SECS, raw);
                None
            }
        });

        Self {
            api_url: get(ENV_API_URL),
            session_cookie: get(ENV_SESSION_COOKIE),
            analytics_url: get(ENV_ANALYTICS_URL),
            analytics_key: get(ENV_ANALYTICS_KEY),
            login_url: get(ENV_LOGIN_URL),
            request_timeout,
        }
    }

    /// The login page to open after logout, if one can be determined.
    pub fn resolved_login_url(&self) -> Option<String> {
        if let Some(url) = &self.login_url {
            return Some(url.clone());
        }
        self.api_url
            .as_deref()
            .map(|base| format!("{}/login", base.trim_end_matches('/')))
    }
}
