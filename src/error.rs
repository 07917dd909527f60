//! Errors surfaced to the user as notifications.
//!
//! Wraps the fetch and bulk-select failures that reach the UI and turns
//! them into short messages. All error types use `thiserror`.

use thiserror::Error;

use crate::api::error::ApiError;
use crate::selection::BulkSelectError;

/// An error shown in the table view.
///
/// Keeps the underlying error for the log while offering a short message
/// for display.
#[derive(Debug, Error)]
pub enum AppError {
    /// Page fetch errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Bulk-select request errors.
    #[error("{0}")]
    BulkSelect(#[from] BulkSelectError),
}

impl AppError {
    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(e) => api_user_message(e),
            AppError::BulkSelect(BulkSelectError::Fetch(e)) => api_user_message(e),
            AppError::BulkSelect(e) => e.to_string(),
        }
    }
}

fn api_user_message(error: &ApiError) -> String {
    match error {
        ApiError::Forbidden => "Access denied by the artworks API.".to_string(),
        ApiError::NotFound(resource) => format!("'{}' was not found.", resource),
        ApiError::RateLimited => "Too many requests. Please wait a moment and try again.".to_string(),
        ApiError::ServerError(_) => "The artworks API is having trouble. Please try again later.".to_string(),
        ApiError::Network(_) => {
            "Connection failed. Please check your internet connection.".to_string()
        }
        ApiError::InvalidUrl(url) => format!("Invalid API URL in configuration: {}", url),
        ApiError::InvalidRequest(msg) => format!("Invalid request: {}", msg),
        ApiError::InvalidResponse(_) => {
            "Unexpected response from the artworks API. Please try again.".to_string()
        }
    }
}
