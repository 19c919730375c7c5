//! The error value produced by every API call.
//!
//! An [`ApiError`] always carries a human-readable `message`. `status` is
//! `None` for failures that never reached the server (missing base URL,
//! DNS, refused connections) and holds the HTTP status code for anything
//! the server answered, including a 2xx whose body could not be decoded.

use serde_json::Value;

use super::category::ErrorCategory;

/// Message used for every transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: unable to reach the server";

/// Message used when a successful response body is not valid JSON for the expected type.
pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse response";

/// Message used when no backend base URL is configured.
pub const MISSING_BASE_URL_MESSAGE: &str = "API base URL is not configured";

/// Which stage of a request produced the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Client configuration is unusable (no base URL).
    Config,
    /// The request body could not be serialized.
    Encode,
    /// The request never produced a response.
    Transport,
    /// The server answered with a non-2xx status, or an error envelope.
    Http,
    /// The server answered 2xx but the body did not decode.
    Parse,
}

impl ApiErrorKind {
    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::Config => "config",
            ApiErrorKind::Encode => "encode",
            ApiErrorKind::Transport => "transport",
            ApiErrorKind::Http => "http",
            ApiErrorKind::Parse => "parse",
        }
    }
}

/// Normalized failure of a backend request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: Option<u16>,
    /// Structured detail, usually the `detail`/`message` field of an error body.
    pub detail: Option<Value>,
    /// The raw response body, kept for diagnostics.
    pub raw: Option<String>,
    /// Request path that failed.
    pub path: Option<String>,
}

impl ApiError {
    fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            detail: None,
            raw: None,
            path: None,
        }
    }

    /// The base URL is unset. Raised before any network activity.
    pub fn missing_base_url() -> Self {
        Self::new(ApiErrorKind::Config, MISSING_BASE_URL_MESSAGE)
    }

    /// The request body could not be turned into JSON.
    pub fn encode(path: &str, err: &serde_json::Error) -> Self {
        let mut error = Self::new(
            ApiErrorKind::Encode,
            format!("Failed to encode request body: {}", err),
        );
        error.path = Some(path.to_string());
        error
    }

    /// The request failed before any response arrived.
    pub fn transport(path: &str, description: impl Into<String>) -> Self {
        let mut error = Self::new(ApiErrorKind::Transport, NETWORK_ERROR_MESSAGE);
        error.detail = Some(Value::String(description.into()));
        error.path = Some(path.to_string());
        error
    }

    /// Build the error for a non-2xx response from its raw body.
    ///
    /// A JSON body contributes its `detail` field, or failing that its
    /// `message` field. Anything else is kept only in `raw`. The message
    /// is the extracted detail when that is a non-empty string, otherwise
    /// `Request failed with status {status}`.
    pub fn from_failed_response(path: &str, status: u16, body: &[u8]) -> Self {
        let raw = String::from_utf8_lossy(body).into_owned();

        let detail = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut map)) => match map.remove("detail") {
                Some(detail) if !detail.is_null() => Some(detail),
                _ => map.remove("message").filter(|m| !m.is_null()),
            },
            _ => None,
        };

        let message = match &detail {
            Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
            _ => format!("Request failed with status {}", status),
        };

        Self {
            kind: ApiErrorKind::Http,
            message,
            status: Some(status),
            detail,
            raw: (!raw.is_empty()).then_some(raw),
            path: Some(path.to_string()),
        }
    }

    /// A 2xx response carried an error envelope.
    pub fn envelope(path: &str, status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        let mut error = Self::new(ApiErrorKind::Http, message.clone());
        error.status = Some(status);
        error.detail = Some(Value::String(message));
        error.path = Some(path.to_string());
        error
    }

    /// A 2xx response body did not decode.
    pub fn parse(path: &str, status: u16, body: &[u8], err: &serde_json::Error) -> Self {
        let mut error = Self::new(ApiErrorKind::Parse, PARSE_ERROR_MESSAGE);
        error.status = Some(status);
        error.detail = Some(Value::String(err.to_string()));
        error.raw = Some(String::from_utf8_lossy(body).into_owned());
        error.path = Some(path.to_string());
        error
    }

    /// The detail as a string, when it is one and is not blank.
    pub fn detail_text(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(text)) if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    /// HTTP 401, which the session layer treats as a logged-out signal.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    pub fn category(&self) -> ErrorCategory {
        match self.kind {
            ApiErrorKind::Config => ErrorCategory::Configuration,
            ApiErrorKind::Encode => ErrorCategory::Client,
            ApiErrorKind::Transport => ErrorCategory::Network,
            ApiErrorKind::Parse => ErrorCategory::Server,
            ApiErrorKind::Http => match self.status {
                Some(401) | Some(403) => ErrorCategory::Auth,
                Some(408) | Some(429) => ErrorCategory::Network,
                Some(status) if status >= 500 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
        }
    }

    /// Whether a user-initiated retry has a reasonable chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }
}
