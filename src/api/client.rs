//! The fetch client: one request, one normalized outcome.
//!
//! [`ApiClient::fetch`] resolves the configured base URL, sends the request
//! with a JSON content type, and turns every failure into an [`ApiError`].
//! It makes exactly one attempt; retrying is up to the caller.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Envelope, EnvelopeStatus};
use crate::traits::{Headers, HttpClient, Method, Request, Response};

/// Method, body and headers for one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Override the defaults when names match, ignoring case
    pub headers: Headers,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::with_method(Method::Post)
    }

    pub fn put() -> Self {
        Self::with_method(Method::Put)
    }

    pub fn patch() -> Self {
        Self::with_method(Method::Patch)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::Delete)
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Fetch client bound to a backend base URL.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Option<String>,
    http: Arc<dyn HttpClient>,
}

impl ApiClient {
    /// A blank `base_url` counts as unset.
    pub fn new(base_url: Option<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Self { base_url, http }
    }

    pub fn from_config(config: &ClientConfig, http: Arc<dyn HttpClient>) -> Self {
        Self::new(config.api_url.clone(), http)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Absolute URL for `path`, or a configuration error.
    pub fn url_for(&self, path: &str) -> ApiResult<String> {
        let base = self.base_url.as_deref().ok_or_else(ApiError::missing_base_url)?;
        if path.starts_with('/') {
            Ok(format!("{}{}", base, path))
        } else {
            Ok(format!("{}/{}", base, path))
        }
    }

    /// Serialize a request body, reporting failure against `path`.
    pub fn encode_body<B: Serialize>(path: &str, body: &B) -> ApiResult<Value> {
        serde_json::to_value(body).map_err(|e| ApiError::encode(path, &e))
    }

    /// Send the request and decode a 2xx body as `T`.
    ///
    /// An empty 2xx body decodes as JSON `null`, so `()` and `Option<_>`
    /// targets accept `204 No Content`.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> ApiResult<T> {
        let response = self.send(path, options).await?;
        decode_body(path, &response)
    }

    /// Like [`fetch`](Self::fetch) for endpoints wrapped in an [`Envelope`].
    ///
    /// An envelope whose status is `"error"` is reported as an error even
    /// though the HTTP status was 2xx.
    pub async fn fetch_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<Envelope<T>> {
        let response = self.send(path, options).await?;
        let envelope: Envelope<T> = decode_body(path, &response)?;
        if envelope.status == EnvelopeStatus::Error {
            let err = ApiError::envelope(path, response.status, envelope.message);
            tracing::warn!(path, status = response.status, "API returned error envelope: {}", err);
            return Err(err);
        }
        Ok(envelope)
    }

    /// Fetch an enveloped endpoint and return its `data`, which must be present.
    pub async fn fetch_data<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> ApiResult<T> {
        let response = self.send(path, options).await?;
        let envelope: Envelope<Value> = decode_body(path, &response)?;
        if envelope.status == EnvelopeStatus::Error {
            return Err(ApiError::envelope(path, response.status, envelope.message));
        }
        let data = envelope.data.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| ApiError::parse(path, response.status, &response.body, &e))
    }

    async fn send(&self, path: &str, options: RequestOptions) -> ApiResult<Response> {
        let url = self.url_for(path)?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        for (name, value) in options.headers {
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
            headers.insert(name, value);
        }

        let request = Request {
            method: options.method,
            url,
            headers,
            body: options.body.map(|body| body.to_string()),
        };

        tracing::debug!(method = %request.method, path, "sending API request");

        let response = self.http.send(request).await.map_err(|e| {
            tracing::warn!(path, "API request failed before a response: {}", e);
            ApiError::transport(path, e.to_string())
        })?;

        if !response.is_success() {
            let err = ApiError::from_failed_response(path, response.status, &response.body);
            tracing::warn!(path, status = response.status, "API request failed: {}", err);
            return Err(err);
        }

        tracing::debug!(path, status = response.status, "API request succeeded");
        Ok(response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn decode_body<T: DeserializeOwned>(path: &str, response: &Response) -> ApiResult<T> {
    let result = if response.body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(&response.body)
    };
    result.map_err(|e| {
        tracing::warn!(path, status = response.status, "Failed to parse API response: {}", e);
        ApiError::parse(path, response.status, &response.body, &e)
    })
}
