//! Coarse classification of API failures.
//!
//! Categories drive how a caller reacts to an error: offer a retry
//! button, send the user to the login page, or ask them to fix their
//! setup. Nothing in this crate retries on its own.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The backend could not be reached, or asked us to slow down.
    Network,

    /// The session is missing or lacks permission (401/403).
    Auth,

    /// The backend failed (5xx) or answered with a body we could not read.
    Server,

    /// The request itself was rejected (other 4xx) or could not be built.
    Client,

    /// The client is not configured to talk to a backend.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if a user-initiated retry may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Auth => "Sign in again to continue",
            ErrorCategory::Server => "The server may be experiencing issues. Please try again later",
            ErrorCategory::Client => "Please check your input and try again",
            ErrorCategory::Configuration => "Set CREATORKIT_API_URL to the backend address",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
