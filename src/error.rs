//! Unified SDK error types.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::shared::ScalingError;

/// Structured error code the API attaches to expired-session failures.
pub const SESSION_EXPIRED_CODE: &str = "session_expired";

/// Message fragment older API deployments use for expired sessions.
const SESSION_EXPIRED_MESSAGE: &str = "jwt expired";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// An operation needs something the client was not built with
    /// (signing identity, order signer).
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Re-authentication was retried until the limit and the server still
    /// reported an expired session.
    #[error("Session still expired after {attempts} attempts: {last_error}")]
    SessionExpired {
        attempts: u32,
        last_error: RequestError,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Scaling error: {0}")]
    Scaling(#[from] ScalingError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// Whether this error carries the server's expired-session signal.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, SdkError::Request(e) if e.is_session_expired())
    }
}

/// Failures below the API's own error semantics.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid response body from {url} (status {status}): {reason}")]
    InvalidBody {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Server error {status} from {url}: {body}")]
    ServerError {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Unexpected data shape from {url}: {reason}")]
    Decode { url: String, reason: String },
}

// ─── RequestError ────────────────────────────────────────────────────────────

/// An API-level failure: the server answered with a non-empty `errors` list.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestError {
    /// URL of the originating request (including the query string).
    pub url: String,
    pub errors: Vec<ApiErrorItem>,
}

impl RequestError {
    pub fn new(url: impl Into<String>, errors: Vec<ApiErrorItem>) -> Self {
        Self {
            url: url.into(),
            errors,
        }
    }

    /// Whether any error item reports an expired session.
    pub fn is_session_expired(&self) -> bool {
        self.errors.iter().any(ApiErrorItem::is_session_expired)
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().filter_map(|e| e.message.as_deref()).collect()
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.messages();
        if messages.is_empty() {
            write!(f, "{} error(s) from {}", self.errors.len(), self.url)
        } else {
            write!(f, "{} ({})", messages.join("; "), self.url)
        }
    }
}

impl std::error::Error for RequestError {}

/// A single entry of the response envelope's `errors` array.
///
/// The raw JSON is kept verbatim; `message` and `code` are lifted out when
/// present.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorItem {
    pub message: Option<String>,
    pub code: Option<String>,
    pub raw: Value,
}

impl ApiErrorItem {
    pub fn from_value(raw: Value) -> Self {
        let (message, code) = match &raw {
            Value::String(s) => (Some(s.clone()), None),
            Value::Object(map) => (
                map.get("message").and_then(Value::as_str).map(str::to_string),
                map.get("code").and_then(|c| match c {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                }),
            ),
            _ => (None, None),
        };
        Self { message, code, raw }
    }

    /// The one place that decides whether a server error means "session expired".
    ///
    /// Prefers the structured code; falls back to matching the message text.
    pub fn is_session_expired(&self) -> bool {
        if self.code.as_deref() == Some(SESSION_EXPIRED_CODE) {
            return true;
        }
        self.message
            .as_deref()
            .map(|m| m.to_ascii_lowercase().contains(SESSION_EXPIRED_MESSAGE))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_item_from_object() {
        let item = ApiErrorItem::from_value(json!({"message": "bad price", "code": "invalid"}));
        assert_eq!(item.message.as_deref(), Some("bad price"));
        assert_eq!(item.code.as_deref(), Some("invalid"));
        assert!(!item.is_session_expired());
    }

    #[test]
    fn test_error_item_from_string() {
        let item = ApiErrorItem::from_value(json!("jwt expired"));
        assert_eq!(item.message.as_deref(), Some("jwt expired"));
        assert!(item.is_session_expired());
    }

    #[test]
    fn test_expired_detected_by_code() {
        let item = ApiErrorItem::from_value(json!({"message": "unauthorized", "code": "session_expired"}));
        assert!(item.is_session_expired());
    }

    #[test]
    fn test_expired_detected_by_message_fallback() {
        let item = ApiErrorItem::from_value(json!({"message": "TokenExpiredError: jwt expired"}));
        assert!(item.is_session_expired());
    }

    #[test]
    fn test_request_error_any_item_expired() {
        let err = RequestError::new(
            "https://api.test/api/v1/orders",
            vec![
                ApiErrorItem::from_value(json!({"message": "first"})),
                ApiErrorItem::from_value(json!({"message": "jwt expired"})),
            ],
        );
        assert!(err.is_session_expired());
        assert!(SdkError::from(err).is_session_expired());
    }

    #[test]
    fn test_request_error_display_includes_url() {
        let err = RequestError::new(
            "https://api.test/api/v1/quotes",
            vec![ApiErrorItem::from_value(json!({"message": "market closed"}))],
        );
        assert_eq!(err.to_string(), "market closed (https://api.test/api/v1/quotes)");
    }
}
