//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`RecordingAnalytics`] - keeps emitted analytics events
//! - [`RecordingNavigator`] - counts login redirects

pub mod analytics;
pub mod http;

pub use analytics::{RecordingAnalytics, RecordingNavigator};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
