use serde::{Deserialize, Serialize};

/// The signed-in user, as returned by the session identity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    pub plan: String,
    /// Channel the user picked as their own; absent until they choose one
    #[serde(default)]
    pub primary_channel_id: Option<i64>,
}

impl SessionUser {
    pub fn new(email: impl Into<String>, plan: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            plan: plan.into(),
            primary_channel_id: None,
        }
    }

    pub fn with_primary_channel_id(mut self, id: i64) -> Self {
        self.primary_channel_id = Some(id);
        self
    }
}
