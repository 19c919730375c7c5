//! Generated scripts and thumbnails.

use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_vec};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptSection {
    pub heading: String,
    pub body: String,
    /// Suggested on-screen duration
    #[serde(default)]
    pub duration_seconds: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Script {
    #[serde(deserialize_with = "deserialize_id")]
    pub idea_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub sections: Vec<ScriptSection>,
}

impl Script {
    /// Sum of the section durations that are known.
    pub fn estimated_duration_seconds(&self) -> u32 {
        self.sections
            .iter()
            .filter_map(|section| section.duration_seconds)
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thumbnail {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub image_url: String,
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Body of `POST /thumbnails/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_id: Option<String>,
}

impl ThumbnailRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            style: None,
            idea_id: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn for_idea(mut self, idea_id: impl Into<String>) -> Self {
        self.idea_id = Some(idea_id.into());
        self
    }
}
