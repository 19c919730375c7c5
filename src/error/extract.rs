//! Turning any caught failure into the one line a user gets to read.
//!
//! [`extract_api_error`] is the only place that decides which of several
//! candidate messages wins. The checks run in a fixed order:
//!
//! 1. an [`ApiError`] whose `detail` is a non-blank string yields that detail
//! 2. any other [`ApiError`] yields its `message`
//! 3. a value with a `detail` field yields that field as text
//! 4. a plain string yields itself
//! 5. a value with a `message` field yields that message
//! 6. a recognised network-failure shape yields [`UNREACHABLE_MESSAGE`]
//! 7. everything else yields [`FALLBACK_MESSAGE`]

use serde_json::Value;

use super::api_error::ApiError;

pub const UNREACHABLE_MESSAGE: &str =
    "Cannot reach the server. Please check your connection and try again.";

pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// `code` values that identify a failed connection attempt.
const NETWORK_ERROR_CODES: &[&str] = &[
    "ECONNREFUSED",
    "ECONNRESET",
    "ENOTFOUND",
    "ETIMEDOUT",
    "EAI_AGAIN",
    "ERR_NETWORK",
];

/// `name` values that identify a failed connection attempt.
const NETWORK_ERROR_NAMES: &[&str] = &["NetworkError", "TypeError", "FetchError"];

/// A failure value as it reaches a display site.
#[derive(Debug, Clone, Copy)]
pub enum Caught<'a> {
    /// An error produced by the fetch client.
    Api(&'a ApiError),
    /// A backend-shaped error object, or any other JSON value.
    Json(&'a Value),
    /// A bare message.
    Text(&'a str),
    /// Any other error type.
    Other(&'a (dyn std::error::Error + 'static)),
}

impl<'a> From<&'a ApiError> for Caught<'a> {
    fn from(err: &'a ApiError) -> Self {
        Caught::Api(err)
    }
}

impl<'a> From<&'a Value> for Caught<'a> {
    fn from(value: &'a Value) -> Self {
        Caught::Json(value)
    }
}

impl<'a> From<&'a str> for Caught<'a> {
    fn from(text: &'a str) -> Self {
        Caught::Text(text)
    }
}

impl<'a> From<&'a String> for Caught<'a> {
    fn from(text: &'a String) -> Self {
        Caught::Text(text.as_str())
    }
}

/// Produce the display message for a caught failure.
pub fn extract_api_error<'a>(caught: impl Into<Caught<'a>>) -> String {
    match caught.into() {
        Caught::Api(err) => from_api_error(err),
        Caught::Json(value) => from_json(value),
        Caught::Text(text) => text.to_string(),
        Caught::Other(err) => from_std_error(err),
    }
}

fn from_api_error(err: &ApiError) -> String {
    match err.detail_text() {
        Some(detail) => detail.to_string(),
        None => err.message.clone(),
    }
}

fn from_json(value: &Value) -> String {
    if let Some(detail) = value.get("detail").filter(|d| !d.is_null()) {
        return stringify(detail);
    }
    if let Value::String(text) = value {
        return text.clone();
    }
    if let Some(message) = value.get("message").filter(|m| !m.is_null()) {
        return stringify(message);
    }
    if is_network_shape(value) {
        return UNREACHABLE_MESSAGE.to_string();
    }
    FALLBACK_MESSAGE.to_string()
}

fn from_std_error(err: &(dyn std::error::Error + 'static)) -> String {
    // An ApiError wrapped by another error type still gets its own priority.
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(api) = e.downcast_ref::<ApiError>() {
            return from_api_error(api);
        }
        current = e.source();
    }

    let message = err.to_string();
    if !message.is_empty() {
        return message;
    }
    if is_network_error_chain(err) {
        return UNREACHABLE_MESSAGE.to_string();
    }
    FALLBACK_MESSAGE.to_string()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_network_shape(value: &Value) -> bool {
    let code_matches = value
        .get("code")
        .and_then(Value::as_str)
        .is_some_and(|code| NETWORK_ERROR_CODES.contains(&code));
    let name_matches = value
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| NETWORK_ERROR_NAMES.contains(&name));
    code_matches || name_matches
}

fn is_network_error_chain(err: &(dyn std::error::Error + 'static)) -> bool {
    use std::io::ErrorKind;

    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::ConnectionRefused
                    | ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::NotConnected
                    | ErrorKind::TimedOut
            ) {
                return true;
            }
        }
        if let Some(req) = e.downcast_ref::<reqwest::Error>() {
            if req.is_connect() || req.is_timeout() {
                return true;
            }
        }
        current = e.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fmt;

    #[test]
    fn test_api_error_detail_wins() {
        let err = ApiError::from_failed_response("/ideas/9", 404, br#"{"detail":"Idea not found"}"#);
        assert_eq!(extract_api_error(&err), "Idea not found");
    }

    #[test]
    fn test_api_error_without_string_detail_uses_message() {
        let err = ApiError::from_failed_response("/ideas", 500, b"<html>oops</html>");
        assert_eq!(extract_api_error(&err), "Request failed with status 500");

        let err = ApiError::missing_base_url();
        assert_eq!(extract_api_error(&err), "API base URL is not configured");
    }

    #[test]
    fn test_transport_error_shows_description() {
        let err = ApiError::transport("/auth/me", "dns error: no such host");
        assert_eq!(extract_api_error(&err), "dns error: no such host");
    }

    #[test]
    fn test_json_detail_is_stringified() {
        assert_eq!(extract_api_error(&json!({"detail": "Quota exceeded"})), "Quota exceeded");
        assert_eq!(
            extract_api_error(&json!({"detail": {"code": 3}})),
            r#"{"code":3}"#
        );
    }

    #[test]
    fn test_detail_beats_message() {
        let value = json!({"detail": "from detail", "message": "from message"});
        assert_eq!(extract_api_error(&value), "from detail");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(extract_api_error("boom"), "boom");
        assert_eq!(extract_api_error(&json!("boom")), "boom");
        let owned = String::from("boom");
        assert_eq!(extract_api_error(&owned), "boom");
    }

    #[test]
    fn test_message_field() {
        assert_eq!(extract_api_error(&json!({"message": "Bad input"})), "Bad input");
    }

    #[test]
    fn test_network_shape() {
        assert_eq!(
            extract_api_error(&json!({"code": "ECONNREFUSED"})),
            UNREACHABLE_MESSAGE
        );
        assert_eq!(
            extract_api_error(&json!({"name": "TypeError"})),
            UNREACHABLE_MESSAGE
        );
    }

    #[test]
    fn test_message_checked_before_network_shape() {
        let value = json!({"name": "TypeError", "message": "Failed to fetch"});
        assert_eq!(extract_api_error(&value), "Failed to fetch");
    }

    #[test]
    fn test_unrecognised_values_fall_back() {
        assert_eq!(extract_api_error(&json!({"foo": 1})), FALLBACK_MESSAGE);
        assert_eq!(extract_api_error(&json!(42)), FALLBACK_MESSAGE);
        assert_eq!(extract_api_error(&Value::Null), FALLBACK_MESSAGE);
        assert_eq!(extract_api_error(&json!({"detail": null})), FALLBACK_MESSAGE);
    }

    #[derive(Debug)]
    struct Wrapper(ApiError);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped")
        }
    }

    impl std::error::Error for Wrapper {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_wrapped_api_error_is_found() {
        let wrapped = Wrapper(ApiError::from_failed_response(
            "/ideas/1",
            404,
            br#"{"detail":"Idea not found"}"#,
        ));
        assert_eq!(extract_api_error(Caught::Other(&wrapped)), "Idea not found");
    }

    #[test]
    fn test_other_error_uses_display() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert_eq!(extract_api_error(Caught::Other(&io)), "disk on fire");
    }

    #[derive(Debug)]
    struct Silent(std::io::Error);

    impl fmt::Display for Silent {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    impl std::error::Error for Silent {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_silent_connection_error_is_unreachable() {
        let err = Silent(std::io::Error::from(std::io::ErrorKind::ConnectionRefused));
        assert_eq!(extract_api_error(Caught::Other(&err)), UNREACHABLE_MESSAGE);

        let err = Silent(std::io::Error::from(std::io::ErrorKind::InvalidData));
        assert_eq!(extract_api_error(Caught::Other(&err)), FALLBACK_MESSAGE);
    }
}
