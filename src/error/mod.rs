//! Error handling for backend requests.
//!
//! - [`ApiError`]: the single error value every API call returns
//! - [`ErrorCategory`]: coarse classification for retry and routing decisions
//! - [`extract_api_error`]: turns any caught failure into a display string
//!
//! # Example
//!
//! ```ignore
//! use creatorkit::error::extract_api_error;
//!
//! match client.delete_idea("42").await {
//!     Ok(()) => println!("Deleted"),
//!     Err(err) => eprintln!("{}", extract_api_error(&err)),
//! }
//! ```

mod api_error;
mod category;
mod extract;

pub use api_error::{
    ApiError, ApiErrorKind, MISSING_BASE_URL_MESSAGE, NETWORK_ERROR_MESSAGE, PARSE_ERROR_MESSAGE,
};
pub use category::ErrorCategory;
pub use extract::{extract_api_error, Caught, FALLBACK_MESSAGE, UNREACHABLE_MESSAGE};

/// Result alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;
