//! Analytics event port.
//!
//! Session transitions report to an [`AnalyticsSink`] instead of calling
//! an analytics service directly. Emission is fire-and-forget: sinks must
//! not block and must not report failures back to the caller.

use serde::Serialize;
use serde_json::Value;

/// Event name sent when a logged-out session becomes logged in.
pub const LOGIN_SUCCESS_EVENT: &str = "login_success";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// Associate subsequent events with a user.
    Identify {
        distinct_id: String,
        email: String,
        plan: String,
    },
    /// A named product event.
    Capture { name: String, properties: Value },
    /// Forget the identified user.
    Reset,
}

impl AnalyticsEvent {
    pub fn capture(name: impl Into<String>, properties: Value) -> Self {
        AnalyticsEvent::Capture {
            name: name.into(),
            properties,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &str {
        match self {
            AnalyticsEvent::Identify { .. } => "identify",
            AnalyticsEvent::Capture { name, .. } => name,
            AnalyticsEvent::Reset => "reset",
        }
    }
}

pub trait AnalyticsSink: Send + Sync {
    fn emit(&self, event: AnalyticsEvent);
}
