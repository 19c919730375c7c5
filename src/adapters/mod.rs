//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest with a cookie store
//! - [`CaptureAnalytics`] - posts analytics events to a capture endpoint
//! - [`TracingAnalytics`] - logs analytics events only
//! - [`BrowserNavigator`] - opens the login page in a browser
//!
//! The [`mock`] submodule provides test doubles for all ports.

pub mod analytics;
pub mod browser_navigator;
pub mod mock;
pub mod reqwest_http;

pub use analytics::{CaptureAnalytics, TracingAnalytics};
pub use browser_navigator::BrowserNavigator;
pub use mock::{MockHttpClient, RecordingAnalytics, RecordingNavigator};
pub use reqwest_http::ReqwestHttpClient;
