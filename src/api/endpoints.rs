//! Typed wrappers for the backend routes this client uses.
//!
//! Session routes answer with bare JSON; content and analysis routes use
//! the [`Envelope`](crate::models::Envelope) wrapper.

use serde_json::json;

use super::client::{ApiClient, RequestOptions};
use crate::error::ApiResult;
use crate::models::{
    ChannelAnalysis, ChannelSummary, Envelope, GenerateIdeasRequest, Idea, KeywordInsight,
    NicheAnalysis, Script, SessionUser, Thumbnail, ThumbnailRequest,
};

/// Session identity endpoint.
pub const ME_PATH: &str = "/auth/me";
/// Sign-out endpoint.
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const IDEAS_PATH: &str = "/ideas";
pub const GENERATE_IDEAS_PATH: &str = "/ideas/generate";
pub const GENERATE_THUMBNAIL_PATH: &str = "/thumbnails/generate";
pub const CHANNELS_PATH: &str = "/channels";
pub const NICHE_ANALYZE_PATH: &str = "/niches/analyze";
pub const KEYWORD_SEARCH_PATH: &str = "/keywords/search";

fn idea_path(id: &str) -> String {
    format!("{}/{}", IDEAS_PATH, urlencoding::encode(id))
}

fn with_query(path: &str, key: &str, value: &str) -> String {
    format!("{}?{}={}", path, key, urlencoding::encode(value))
}

impl ApiClient {
    /// GET /auth/me
    pub async fn me(&self) -> ApiResult<SessionUser> {
        self.fetch(ME_PATH, RequestOptions::get()).await
    }

    /// POST /auth/logout
    pub async fn logout(&self) -> ApiResult<()> {
        self.fetch::<serde_json::Value>(LOGOUT_PATH, RequestOptions::post())
            .await
            .map(|_| ())
    }

    /// GET /ideas
    ///
    /// Returns the full envelope so callers can read paging `meta`.
    pub async fn list_ideas(&self) -> ApiResult<Envelope<Vec<Idea>>> {
        self.fetch_envelope(IDEAS_PATH, RequestOptions::get()).await
    }

    /// DELETE /ideas/{id}
    pub async fn delete_idea(&self, id: &str) -> ApiResult<()> {
        let path = idea_path(id);
        self.fetch::<serde_json::Value>(&path, RequestOptions::delete())
            .await
            .map(|_| ())
    }

    /// POST /ideas/generate
    pub async fn generate_ideas(&self, request: &GenerateIdeasRequest) -> ApiResult<Vec<Idea>> {
        let body = ApiClient::encode_body(GENERATE_IDEAS_PATH, request)?;
        self.fetch_data(GENERATE_IDEAS_PATH, RequestOptions::post().with_body(body))
            .await
    }

    /// POST /ideas/{id}/script
    pub async fn generate_script(&self, idea_id: &str) -> ApiResult<Script> {
        let path = format!("{}/script", idea_path(idea_id));
        self.fetch_data(&path, RequestOptions::post().with_body(json!({})))
            .await
    }

    /// POST /thumbnails/generate
    pub async fn generate_thumbnail(&self, request: &ThumbnailRequest) -> ApiResult<Thumbnail> {
        let body = ApiClient::encode_body(GENERATE_THUMBNAIL_PATH, request)?;
        self.fetch_data(GENERATE_THUMBNAIL_PATH, RequestOptions::post().with_body(body))
            .await
    }

    /// GET /channels
    pub async fn list_channels(&self) -> ApiResult<Vec<ChannelSummary>> {
        self.fetch_data(CHANNELS_PATH, RequestOptions::get()).await
    }

    /// GET /channels/{id}/analysis
    pub async fn analyze_channel(&self, channel_id: i64) -> ApiResult<ChannelAnalysis> {
        let path = format!("{}/{}/analysis", CHANNELS_PATH, channel_id);
        self.fetch_data(&path, RequestOptions::get()).await
    }

    /// GET /niches/analyze?query=
    pub async fn analyze_niche(&self, query: &str) -> ApiResult<NicheAnalysis> {
        let path = with_query(NICHE_ANALYZE_PATH, "query", query);
        self.fetch_data(&path, RequestOptions::get()).await
    }

    /// GET /keywords/search?q=
    pub async fn search_keywords(&self, query: &str) -> ApiResult<Vec<KeywordInsight>> {
        let path = with_query(KEYWORD_SEARCH_PATH, "q", query);
        self.fetch_data(&path, RequestOptions::get()).await
    }
}
