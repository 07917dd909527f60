//! API error types for the artworks client.

use thiserror::Error;

/// Errors that can occur when fetching pages from the collection API.
///
/// Every variant is a fetch failure from the controller's point of view:
/// it is logged and the previously loaded page stays on screen.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Access to the endpoint was denied.
    #[error("Permission denied: the API refused access to this resource")]
    Forbidden,

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limited by the API.
    #[error("Rate limited: please wait before retrying")]
    RateLimited,

    /// API server error.
    #[error("API server error: {0}")]
    ServerError(String),

    /// Network or HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request parameters were rejected before sending.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response from the API.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// A failed page fetch.
pub type FetchError = ApiError;

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from an HTTP status code.
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(context.to_string()),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(format!("HTTP {}: {}", status, context)),
            _ => ApiError::ServerError(format!("Unexpected HTTP {}: {}", status, context)),
        }
    }

    /// Check if a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::RateLimited | ApiError::ServerError(_) | ApiError::Network(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (StatusCode::FORBIDDEN, "Forbidden"),
            (StatusCode::NOT_FOUND, "NotFound"),
            (StatusCode::TOO_MANY_REQUESTS, "RateLimited"),
            (StatusCode::INTERNAL_SERVER_ERROR, "ServerError"),
            (StatusCode::SERVICE_UNAVAILABLE, "ServerError"),
        ];
        for (status, expected) in cases {
            let err = ApiError::from_status(status, "/artworks?page=9999");
            let variant = match &err {
                ApiError::Forbidden => "Forbidden",
                ApiError::NotFound(_) => "NotFound",
                ApiError::RateLimited => "RateLimited",
                ApiError::ServerError(_) => "ServerError",
                other => panic!("unexpected variant for {}: {:?}", status, other),
            };
            assert_eq!(variant, expected, "status {}", status);
        }
    }

    #[test]
    fn test_not_found_keeps_context() {
        match ApiError::from_status(StatusCode::NOT_FOUND, "/artworks?page=9999") {
            ApiError::NotFound(msg) => assert_eq!(msg, "/artworks?page=9999"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_unexpected_status() {
        let err = ApiError::from_status(StatusCode::IM_A_TEAPOT, "test");
        match err {
            ApiError::ServerError(msg) => assert!(msg.starts_with("Unexpected HTTP 418")),
            _ => panic!("Expected ServerError"),
        }
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ApiError::RateLimited.is_retryable());
        assert!(ApiError::ServerError("boom".to_string()).is_retryable());
        assert!(!ApiError::Forbidden.is_retryable());
        assert!(!ApiError::NotFound("x".to_string()).is_retryable());
        assert!(!ApiError::InvalidResponse("x".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::NotFound("page 3".to_string());
        assert_eq!(err.to_string(), "Resource not found: page 3");

        let err = ApiError::InvalidRequest("page size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid request: page size must be positive"
        );
    }
}
