//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl FetchError {
    /// The `message` field of a JSON error body, if the server sent one.
    pub fn server_message(&self) -> Option<String> {
        let FetchError::HttpError { message, .. } = self else {
            return None;
        };
        serde_json::from_str::<serde_json::Value>(message)
            .ok()?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }

    /// Check if the server answered with an error status.
    pub fn is_http_error(&self) -> bool {
        matches!(self, FetchError::HttpError { .. })
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_from_json_body() {
        let err = FetchError::HttpError {
            status: 422,
            message: r#"{"message": "The email has already been taken."}"#.to_string(),
        };
        assert_eq!(
            err.server_message().as_deref(),
            Some("The email has already been taken.")
        );
    }

    #[test]
    fn test_server_message_absent() {
        let plain = FetchError::HttpError {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(plain.server_message(), None);
        assert_eq!(FetchError::RequestError("refused".into()).server_message(), None);
    }
}
