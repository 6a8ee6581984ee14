//! Errors surfaced by the browser API client.

use frames_api_models::ApiErrorBody;
use thiserror::Error;

/// Failure of a backend call as seen by a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the flattened backend detail.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Backend detail or a status fallback.
        message: String,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Cancelled because the owning page unmounted.
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    /// Build an error from a failed response body.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = ApiErrorBody::from_slice(body)
            .and_then(|parsed| parsed.message())
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::Http { status, message }
    }

    /// HTTP status when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend message for HTTP failures, `fallback` otherwise.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the request was cancelled on teardown; such failures are not shown.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_becomes_message() {
        let err = ApiError::from_response(401, br#"{"detail":"Invalid credentials"}"#);
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn validation_items_are_joined() {
        let err = ApiError::from_response(
            422,
            br#"{"detail":[{"msg":"field required"},{"msg":"value is not a valid email"}]}"#,
        );
        assert_eq!(err.to_string(), "field required, value is not a valid email");
    }

    #[test]
    fn unparseable_body_falls_back_to_status() {
        let err = ApiError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn network_errors_use_page_fallback() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message("Something went wrong. Try again."), "Something went wrong. Try again.");
        assert_eq!(err.status(), None);
        assert!(ApiError::Aborted.is_aborted());
    }
}
