//! CLI module for creatorkit.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Session and idea commands backed by [`SessionManager`](crate::session::SessionManager)
//!
//! # Usage
//!
//! ```ignore
//! use creatorkit::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Err(e) = run_cli_command(command, &session, &mut std::io::stdout()).await {
//!     eprintln!("Error: {}", e);
//!     std::process::exit(1);
//! }
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use commands::run_cli_command;
pub use version::{version_line, VERSION};
