//! Reqwest-based HTTP client adapter.
//!
//! Implements [`HttpClient`] with a cookie-enabled `reqwest::Client`, so a
//! session cookie set by the backend is sent back on later requests.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};

use crate::config::ClientConfig;
use crate::traits::{Headers, HttpClient, HttpError, Method, Request, Response};

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Build a client honoring the timeout and session cookie in `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().cookie_store(true);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(cookie) = &config.session_cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| HttpError::Other(format!("Invalid session cookie: {}", e)))?;
            let mut defaults = HeaderMap::new();
            defaults.insert(COOKIE, value);
            builder = builder.default_headers(defaults);
        }

        let client = builder.build().map_err(Self::convert_error)?;
        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    fn convert_method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let builder = self
            .client
            .request(Self::convert_method(request.method), &request.url);
        let builder = Self::apply_headers(builder, &request.headers);
        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let success = response.status().is_success();
        let headers = Self::convert_headers(response.headers());
        let body = match response.bytes().await {
            Ok(body) => body,
            // The status already arrived; an unreadable error body must not hide it
            Err(e) if !success => {
                tracing::warn!(url = %request.url, status, "Failed to read error response body: {}", e);
                Bytes::new()
            }
            Err(e) => return Err(Self::convert_error(e)),
        };

        Ok(Response::with_headers(status, headers, body))
    }
}
