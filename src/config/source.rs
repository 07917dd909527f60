//! Collection endpoint configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::api::types::DEFAULT_FIELDS;

/// Default collection endpoint.
pub const DEFAULT_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Configuration of the remote collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// The collection listing URL.
    ///
    /// Pages are requested as `{url}?page=N&limit=M`.
    pub url: String,

    /// Number of records per page.
    pub page_size: u32,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Total attempts per request, including the first.
    pub max_retries: u32,

    /// Record fields requested from the API.
    ///
    /// Must include `id`.
    pub fields: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: 30,
            max_retries: 3,
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl SourceConfig {
    /// Validate this source configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidationError(
                "source URL cannot be empty".to_string(),
            ));
        }

        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "source URL '{}' must start with http:// or https://",
                self.url
            )));
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError(format!(
                "page size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.max_retries == 0 {
            return Err(ConfigError::ValidationError(
                "max_retries must be at least 1".to_string(),
            ));
        }

        if !self.fields.iter().any(|f| f == "id") {
            return Err(ConfigError::ValidationError(
                "fields must include 'id'".to_string(),
            ));
        }

        Ok(())
    }

    /// The comma-separated field list sent as the `fields` query parameter.
    pub fn fields_param(&self) -> String {
        self.fields.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let source = SourceConfig::default();
        assert!(source.validate().is_ok());
        assert_eq!(source.page_size, 12);
        assert_eq!(source.url, DEFAULT_URL);
    }

    #[test]
    fn test_empty_url_rejected() {
        let source = SourceConfig {
            url: String::new(),
            ..Default::default()
        };
        let err = source.validate().unwrap_err();
        assert!(err.to_string().contains("URL cannot be empty"));
    }

    #[test]
    fn test_invalid_url_scheme_rejected() {
        let source = SourceConfig {
            url: "api.artic.edu/api/v1/artworks".to_string(),
            ..Default::default()
        };
        let err = source.validate().unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn test_http_url_accepted() {
        let source = SourceConfig {
            url: "http://localhost:8080/artworks".to_string(),
            ..Default::default()
        };
        assert!(source.validate().is_ok());
    }

    #[test]
    fn test_page_size_bounds() {
        let zero = SourceConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let too_big = SourceConfig {
            page_size: MAX_PAGE_SIZE + 1,
            ..Default::default()
        };
        assert!(too_big.validate().is_err());

        let max = SourceConfig {
            page_size: MAX_PAGE_SIZE,
            ..Default::default()
        };
        assert!(max.validate().is_ok());
    }

    #[test]
    fn test_zero_retries_rejected() {
        let source = SourceConfig {
            max_retries: 0,
            ..Default::default()
        };
        assert!(source.validate().is_err());
    }

    #[test]
    fn test_fields_without_id_rejected() {
        let source = SourceConfig {
            fields: vec!["title".to_string()],
            ..Default::default()
        };
        let err = source.validate().unwrap_err();
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn test_fields_param() {
        let source = SourceConfig {
            fields: vec!["id".to_string(), "title".to_string()],
            ..Default::default()
        };
        assert_eq!(source.fields_param(), "id,title");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let source: SourceConfig = toml::from_str("page_size = 25").unwrap();
        assert_eq!(source.page_size, 25);
        assert_eq!(source.url, DEFAULT_URL);
        assert_eq!(source.max_retries, 3);
    }
}
