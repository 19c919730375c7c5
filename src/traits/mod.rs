//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - transport used by the fetch client
//! - [`AnalyticsSink`] - fire-and-forget analytics events
//! - [`Navigator`] - moves the user to the login screen

pub mod analytics;
pub mod http;
pub mod navigator;

pub use analytics::{AnalyticsEvent, AnalyticsSink, LOGIN_SUCCESS_EVENT};
pub use http::{Headers, HttpClient, HttpError, Method, Request, Response};
pub use navigator::Navigator;
