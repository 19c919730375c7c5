//! Backend API access.
//!
//! - [`client`]: the generic fetch client and request options
//! - [`endpoints`]: typed methods for each backend route

pub mod client;
pub mod endpoints;

pub use client::{ApiClient, RequestOptions};
pub use endpoints::{LOGOUT_PATH, ME_PATH};
