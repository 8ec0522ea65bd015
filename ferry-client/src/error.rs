//! Error types for the Ferry client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Ferry client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Failed to read a local file that was about to be uploaded
    #[error("Failed to read upload source: {0}")]
    IoError(#[from] std::io::Error),
}

/// Classification of a client failure, derived from the HTTP status code
///
/// Mirrors the status codes the batch service documents for its failure
/// modes. Anything that is not an API status error (network failures,
/// malformed responses, unreadable upload sources) classifies as
/// [`ErrorKind::Unexpected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401: invalid authentication or API key
    Unauthorized,
    /// 403: country, region, or territory not supported
    Forbidden,
    /// 429: rate limit reached or quota exceeded
    RateLimited,
    /// 500: the server had an error while processing the request
    ServerError,
    /// 503: the service is currently overloaded
    Overloaded,
    /// Anything else
    Unexpected,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::Unauthorized => "invalid authentication or API key",
            Self::Forbidden => "country, region, or territory not supported",
            Self::RateLimited => "rate limit reached or quota exceeded",
            Self::ServerError => "server error while processing the request",
            Self::Overloaded => "service overloaded, retry later",
            Self::Unexpected => "unexpected error",
        };
        write!(f, "{}", description)
    }
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Classify this error by the status code the service returned
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ApiError { status: 401, .. } => ErrorKind::Unauthorized,
            Self::ApiError { status: 403, .. } => ErrorKind::Forbidden,
            Self::ApiError { status: 429, .. } => ErrorKind::RateLimited,
            Self::ApiError { status: 500, .. } => ErrorKind::ServerError,
            Self::ApiError { status: 503, .. } => ErrorKind::Overloaded,
            _ => ErrorKind::Unexpected,
        }
    }

    /// Check if this error is a rate limit or quota rejection
    pub fn is_rate_limited(&self) -> bool {
        self.kind() == ErrorKind::RateLimited
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_classification() {
        let cases = [
            (401, ErrorKind::Unauthorized),
            (403, ErrorKind::Forbidden),
            (429, ErrorKind::RateLimited),
            (500, ErrorKind::ServerError),
            (503, ErrorKind::Overloaded),
            (404, ErrorKind::Unexpected),
            (502, ErrorKind::Unexpected),
        ];
        for (status, expected) in cases {
            let error = ClientError::api_error(status, "boom");
            assert_eq!(error.kind(), expected, "status {status}");
        }
    }

    #[test]
    fn test_non_api_errors_classify_as_unexpected() {
        let error = ClientError::ParseError("truncated body".to_string());
        assert_eq!(error.kind(), ErrorKind::Unexpected);

        let error = ClientError::IoError(std::io::Error::other("disk gone"));
        assert_eq!(error.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_rate_limit_helper() {
        assert!(ClientError::api_error(429, "slow down").is_rate_limited());
        assert!(!ClientError::api_error(500, "boom").is_rate_limited());
    }

    #[test]
    fn test_status_range_helpers() {
        assert!(ClientError::api_error(404, "missing").is_client_error());
        assert!(!ClientError::api_error(404, "missing").is_server_error());
        assert!(ClientError::api_error(503, "busy").is_server_error());
    }

    #[test]
    fn test_api_error_display_includes_status() {
        let error = ClientError::api_error(429, "Too many requests");
        assert_eq!(
            error.to_string(),
            "API error (status 429): Too many requests"
        );
    }
}
