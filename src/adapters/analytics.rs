//! Analytics sink implementations.
//!
//! - [`CaptureAnalytics`] posts events to an HTTP capture endpoint on a
//!   background task.
//! - [`TracingAnalytics`] only logs them; used when no endpoint is configured.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::traits::{AnalyticsEvent, AnalyticsSink, Headers, HttpClient, Method, Request};

/// Logs every event at debug level and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn emit(&self, event: AnalyticsEvent) {
        tracing::debug!(event = event.name(), "analytics event: {:?}", event);
    }
}

/// Wire format of a captured event.
#[derive(Debug, Serialize)]
struct CapturePayload<'a> {
    api_key: &'a str,
    event: String,
    distinct_id: String,
    properties: Value,
    timestamp: String,
    uuid: String,
}

/// Sends events to an HTTP capture endpoint without waiting for the result.
///
/// Events emitted before any `Identify` use an anonymous id generated at
/// construction time; `Reset` returns to a fresh anonymous id.
pub struct CaptureAnalytics {
    http: Arc<dyn HttpClient>,
    endpoint: String,
    api_key: String,
    distinct_id: Mutex<String>,
}

impl CaptureAnalytics {
    pub fn new(http: Arc<dyn HttpClient>, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            distinct_id: Mutex::new(Self::anonymous_id()),
        }
    }

    fn anonymous_id() -> String {
        format!("anon-{}", Uuid::new_v4())
    }

    /// The id events are currently attributed to.
    pub fn distinct_id(&self) -> String {
        match self.distinct_id.lock() {
            Ok(id) => id.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set_distinct_id(&self, id: String) {
        match self.distinct_id.lock() {
            Ok(mut current) => *current = id,
            Err(poisoned) => *poisoned.into_inner() = id,
        }
    }

    /// Build the request body for an event, updating identity as a side effect.
    ///
    /// Returns `None` for events that only change local state.
    fn payload_for(&self, event: AnalyticsEvent) -> Option<String> {
        let (name, properties) = match event {
            AnalyticsEvent::Identify {
                distinct_id,
                email,
                plan,
            } => {
                let previous = self.distinct_id();
                self.set_distinct_id(distinct_id);
                (
                    "$identify".to_string(),
                    json!({
                        "$anon_distinct_id": previous,
                        "$set": { "email": email, "plan": plan },
                    }),
                )
            }
            AnalyticsEvent::Capture { name, properties } => (name, properties),
            AnalyticsEvent::Reset => {
                self.set_distinct_id(Self::anonymous_id());
                return None;
            }
        };

        let payload = CapturePayload {
            api_key: &self.api_key,
            event: name,
            distinct_id: self.distinct_id(),
            properties,
            timestamp: Utc::now().to_rfc3339(),
            uuid: Uuid::new_v4().to_string(),
        };

        match serde_json::to_string(&payload) {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("Failed to encode analytics event: {}", e);
                None
            }
        }
    }
}

impl AnalyticsSink for CaptureAnalytics {
    fn emit(&self, event: AnalyticsEvent) {
        let name = event.name().to_string();
        let Some(body) = self.payload_for(event) else {
            return;
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(event = %name, "No async runtime; dropping analytics event");
            return;
        };

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let request = Request {
            method: Method::Post,
            url: self.endpoint.clone(),
            headers,
            body: Some(body),
        };

        let http = Arc::clone(&self.http);
        runtime.spawn(async move {
            match http.send(request).await {
                Ok(response) if response.is_success() => {
                    tracing::debug!(event = %name, "analytics event delivered");
                }
                Ok(response) => {
                    tracing::warn!(event = %name, status = response.status, "analytics capture rejected");
                }
                Err(e) => {
                    tracing::warn!(event = %name, "analytics capture failed: {}", e);
                }
            }
        });
    }
}
