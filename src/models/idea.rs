use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_vec};

/// A saved or generated video idea.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Idea {
    /// Backend id (can be string or integer)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Suggested hook for the first seconds of the video
    #[serde(default)]
    pub hook: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub tags: Vec<String>,
    /// Backend-assigned potential score, 0-100
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /ideas/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GenerateIdeasRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Channel whose audience the ideas should target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,
}

impl GenerateIdeasRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_channel_id(mut self, channel_id: i64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }
}
