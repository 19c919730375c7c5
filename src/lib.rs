//! creatorkit - client core for the creator-tools backend
//!
//! This library exposes the fetch client, session state and CLI commands
//! for use by the binary and by integration tests.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod traits;
