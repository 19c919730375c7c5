use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// The `{status, message, data, meta}` wrapper used by most endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub message: Option<String>,
    pub data: Option<T>,
    /// Paging and other listing metadata
    pub meta: Option<Map<String, Value>>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == EnvelopeStatus::Success
    }

    /// Read an integer from `meta`, e.g. `total` or `page`.
    pub fn meta_u64(&self, key: &str) -> Option<u64> {
        self.meta.as_ref()?.get(key)?.as_u64()
    }
}
