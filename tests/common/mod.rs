//! Common test utilities for integration tests.
//!
//! Builds real [`ReqwestHttpClient`]-backed clients pointed at a wiremock
//! server, plus a session wired to recording analytics and navigation.

#![allow(dead_code)]

use std::sync::Arc;

use creatorkit::adapters::mock::{RecordingAnalytics, RecordingNavigator};
use creatorkit::adapters::ReqwestHttpClient;
use creatorkit::api::ApiClient;
use creatorkit::config::ClientConfig;
use creatorkit::session::SessionManager;
use wiremock::MockServer;

/// An [`ApiClient`] talking to `server` over real HTTP.
pub fn api_client(server: &MockServer) -> ApiClient {
    api_client_with(ClientConfig::default().with_api_url(server.uri()))
}

pub fn api_client_with(config: ClientConfig) -> ApiClient {
    let http = ReqwestHttpClient::from_config(&config).expect("client should build");
    ApiClient::from_config(&config, Arc::new(http))
}

/// A session plus the doubles observing its side effects.
pub struct TestSession {
    pub session: SessionManager,
    pub analytics: RecordingAnalytics,
    pub navigator: RecordingNavigator,
}

pub fn test_session(server: &MockServer) -> TestSession {
    test_session_at(server.uri())
}

/// A session whose backend lives at `base_url`.
pub fn test_session_at(base_url: String) -> TestSession {
    let analytics = RecordingAnalytics::new();
    let navigator = RecordingNavigator::new();
    let session = SessionManager::new(
        api_client_with(ClientConfig::default().with_api_url(base_url)),
        Arc::new(analytics.clone()),
        Arc::new(navigator.clone()),
    );
    TestSession {
        session,
        analytics,
        navigator,
    }
}

/// Identity payload returned by `/auth/me`.
pub fn creator_json() -> serde_json::Value {
    serde_json::json!({
        "email": "creator@example.com",
        "plan": "pro",
        "primary_channel_id": 12
    })
}

/// Base URL of a local port with nothing listening on it.
pub fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Serve a single response that promises 100 body bytes, sends a few,
/// then closes the connection.
pub async fn truncated_response_uri(status_line: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let head = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{{\"detail\"",
            status_line
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    format!("http://{}", addr)
}
