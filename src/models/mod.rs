//! Typed records for backend responses and request bodies.

mod analysis;
mod content;
mod envelope;
mod idea;
mod user;

pub use analysis::{
    ChannelAnalysis, ChannelSummary, KeywordInsight, NicheAnalysis, Trend, VideoSummary,
};
pub use content::{Script, ScriptSection, Thumbnail, ThumbnailRequest};
pub use envelope::{Envelope, EnvelopeStatus};
pub use idea::{GenerateIdeasRequest, Idea};
pub use user::SessionUser;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Missing or null lists become empty.
pub(crate) fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct WithId {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_nullable_vec")]
        tags: Vec<String>,
    }

    #[test]
    fn test_id_from_integer_or_string() {
        let numeric: WithId = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(numeric.id, "42");
        let text: WithId = serde_json::from_str(r#"{"id": "idea-42"}"#).unwrap();
        assert_eq!(text.id, "idea-42");
    }

    #[test]
    fn test_id_rejects_other_types() {
        assert!(serde_json::from_str::<WithId>(r#"{"id": true}"#).is_err());
    }

    #[test]
    fn test_null_or_missing_vec_is_empty() {
        let missing: WithId = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(missing.tags.is_empty());
        let null: WithId = serde_json::from_str(r#"{"id": 1, "tags": null}"#).unwrap();
        assert!(null.tags.is_empty());
    }
}
