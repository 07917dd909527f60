//! Artworks API client implementation.
//!
//! This module provides the client for the Art Institute of Chicago collection
//! endpoint. It handles request construction, response parsing, error mapping,
//! and retry logic for transient failures.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, instrument, warn};

use super::error::{ApiError, Result};
use super::types::{ArtworkListResponse, ArtworkPage};
use crate::config::{SourceConfig, MAX_PAGE_SIZE};
use crate::selection::PageSource;

/// Base delay between retries in milliseconds.
const RETRY_DELAY_MS: u64 = 500;

/// The collection API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ArticClient {
    /// The HTTP client.
    client: Client,
    /// The collection listing URL.
    base_url: String,
    /// Comma-separated `fields` parameter, if any.
    fields: Option<String>,
    /// Total attempts per request.
    max_attempts: u32,
    /// Base delay for exponential backoff.
    retry_delay: Duration,
}

impl ArticClient {
    /// Create a client from the source configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(source: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(source.timeout_secs))
            .user_agent(concat!("artable/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Network)?;

        let fields = if source.fields.is_empty() {
            None
        } else {
            Some(source.fields_param())
        };

        Ok(Self {
            client,
            base_url: normalize_base_url(&source.url)?,
            fields,
            max_attempts: source.max_retries.max(1),
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
        })
    }

    /// Override the base retry delay.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for a 0-based page index.
    fn page_url(&self, page_index: u32, limit: u32) -> Result<String> {
        let page_number = page_index.checked_add(1).ok_or_else(|| {
            ApiError::InvalidRequest(format!("page index {} is out of range", page_index))
        })?;
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{}page={}&limit={}",
            self.base_url, separator, page_number, limit
        );
        if let Some(fields) = &self.fields {
            url.push_str("&fields=");
            url.push_str(&urlencoding::encode(fields));
        }
        Ok(url)
    }

    /// Fetch one page of artworks.
    ///
    /// # Arguments
    ///
    /// * `page_index` - 0-based page index; sent to the API as `page_index + 1`
    /// * `page_size` - Records per page (clamped to the API maximum of 100)
    #[instrument(skip(self))]
    pub async fn fetch_page(&self, page_index: u32, page_size: u32) -> Result<ArtworkPage> {
        if page_size == 0 {
            return Err(ApiError::InvalidRequest(
                "page size must be positive".to_string(),
            ));
        }

        let limit = page_size.min(MAX_PAGE_SIZE);
        let url = self.page_url(page_index, limit)?;

        let response: ArtworkListResponse = self.get(&url).await?;
        let page = ArtworkPage::from(response);

        debug!(
            records = page.len(),
            total = page.total,
            "Fetched artworks page"
        );
        Ok(page)
    }

    /// Perform a GET request with retry on transient failures.
    #[instrument(skip(self), fields(url = %url))]
    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut attempts = 0;
        let mut last_error: Option<ApiError> = None;

        while attempts < self.max_attempts {
            attempts += 1;
            debug!("Request attempt {}/{}", attempts, self.max_attempts);

            match self.execute_get::<T>(url).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if e.is_retryable() && attempts < self.max_attempts {
                        let delay = self.calculate_retry_delay(attempts);
                        warn!(
                            "Request failed (attempt {}), retrying in {}ms: {}",
                            attempts,
                            delay.as_millis(),
                            e
                        );
                        tokio::time::sleep(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(last_error.unwrap_or(ApiError::ServerError("Max retries exceeded".to_string())))
    }

    /// Execute a single GET request.
    async fn execute_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Check the status and decode the JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str::<T>(&body)
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            debug!("Error response body: {}", error_body);
            Err(Self::error_from_response(status, &url, &error_body))
        }
    }

    /// Create an error from a failed response, preferring the API's own message.
    fn error_from_response(status: StatusCode, url: &str, body: &str) -> ApiError {
        // The API reports failures as {"status": 404, "error": "...", "detail": "..."}
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
            let detail = json
                .get("detail")
                .and_then(|v| v.as_str())
                .or_else(|| json.get("error").and_then(|v| v.as_str()));
            if let Some(detail) = detail {
                return ApiError::from_status(status, detail);
            }
        }
        ApiError::from_status(status, url)
    }

    /// Exponential backoff: base, 2x base, 4x base...
    fn calculate_retry_delay(&self, attempt: u32) -> Duration {
        self.retry_delay * 2u32.pow(attempt.saturating_sub(1))
    }
}

#[async_trait]
impl PageSource for ArticClient {
    async fn fetch_page(&self, page_index: u32, page_size: u32) -> Result<ArtworkPage> {
        ArticClient::fetch_page(self, page_index, page_size).await
    }
}

/// Trim trailing slashes and warn about plain HTTP outside localhost.
fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');

    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(ApiError::InvalidUrl(url.to_string()));
    }

    if url.starts_with("http://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}", url);
    }

    Ok(url.to_string())
}
