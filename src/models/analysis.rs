//! Channel, niche and keyword analysis results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_nullable_vec;

/// Direction of interest over time as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Stable,
    Declining,
    /// Any value this client does not know yet
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelSummary {
    pub id: i64,
    /// YouTube's own channel id (`UC...`)
    pub youtube_channel_id: String,
    pub title: String,
    #[serde(default)]
    pub subscriber_count: Option<u64>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoSummary {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelAnalysis {
    pub channel: ChannelSummary,
    #[serde(default)]
    pub average_views: Option<f64>,
    #[serde(default)]
    pub uploads_per_week: Option<f64>,
    #[serde(default)]
    pub engagement_rate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub top_videos: Vec<VideoSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NicheAnalysis {
    pub query: String,
    /// 0-100, higher means more crowded
    #[serde(default)]
    pub competition_score: Option<f64>,
    /// 0-100, higher means more viewer interest
    #[serde(default)]
    pub demand_score: Option<f64>,
    #[serde(default)]
    pub trend: Option<Trend>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub related_keywords: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub top_channels: Vec<ChannelSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordInsight {
    pub keyword: String,
    #[serde(default)]
    pub search_volume: Option<u64>,
    #[serde(default)]
    pub competition: Option<f64>,
    #[serde(default)]
    pub trend: Option<Trend>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_unknown_value() {
        let trend: Trend = serde_json::from_str(r#""exploding""#).unwrap();
        assert_eq!(trend, Trend::Unknown);
        let trend: Trend = serde_json::from_str(r#""rising""#).unwrap();
        assert_eq!(trend, Trend::Rising);
    }

    #[test]
    fn test_channel_analysis() {
        let json = r#"{
            "channel": {"id": 3, "youtube_channel_id": "UC123", "title": "Cook With Me"},
            "average_views": 15230.5,
            "top_videos": [
                {"video_id": "abc", "title": "Pantry pasta", "views": 99000,
                 "published_at": "2026-01-04T10:00:00Z"}
            ]
        }"#;
        let analysis: ChannelAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.channel.youtube_channel_id, "UC123");
        assert!(analysis.channel.subscriber_count.is_none());
        assert_eq!(analysis.average_views, Some(15230.5));
        assert!(analysis.uploads_per_week.is_none());
        assert_eq!(analysis.top_videos.len(), 1);
        assert_eq!(analysis.top_videos[0].views, Some(99000));
    }

    #[test]
    fn test_niche_analysis_with_nulls() {
        let json = r#"{
            "query": "sourdough",
            "competition_score": null,
            "demand_score": 71,
            "trend": "declining",
            "related_keywords": null
        }"#;
        let niche: NicheAnalysis = serde_json::from_str(json).unwrap();
        assert!(niche.competition_score.is_none());
        assert_eq!(niche.demand_score, Some(71.0));
        assert_eq!(niche.trend, Some(Trend::Declining));
        assert!(niche.related_keywords.is_empty());
        assert!(niche.top_channels.is_empty());
    }

    #[test]
    fn test_keyword_insight() {
        let json = r#"{"keyword": "air fryer", "search_volume": 120000, "trend": "stable"}"#;
        let insight: KeywordInsight = serde_json::from_str(json).unwrap();
        assert_eq!(insight.search_volume, Some(120000));
        assert_eq!(insight.trend, Some(Trend::Stable));
        assert!(insight.competition.is_none());
    }
}
