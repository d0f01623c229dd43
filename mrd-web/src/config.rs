//! Client configuration
//!
//! Values are baked in at build time from `MRD_*` environment variables.
//! Anything missing or unparsable falls back to the defaults below.

use std::time::Duration;
use tracing::warn;

/// Upper bound for any single REST call
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Scheme and host the REST API lives on, without a trailing slash
    pub api_base: String,
    pub timeout: Duration,
    /// Page size requested from listing endpoints that take one
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Build from the compile-time environment. Without `MRD_API_BASE` the
    /// API is assumed to share the page's origin.
    pub fn from_env() -> Self {
        let mut config = Self::from_values(
            option_env!("MRD_API_BASE"),
            option_env!("MRD_API_TIMEOUT_SECS"),
            option_env!("MRD_PAGE_SIZE"),
        );
        if config.api_base.is_empty() {
            config.api_base = crate::browser::origin().unwrap_or_default();
        }
        config
    }

    fn from_values(api_base: Option<&str>, timeout_secs: Option<&str>, page_size: Option<&str>) -> Self {
        let defaults = Self::default();

        let timeout = match timeout_secs.map(str::parse::<u64>) {
            Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
            Some(_) => {
                warn!("Ignoring invalid MRD_API_TIMEOUT_SECS, using {DEFAULT_TIMEOUT_SECS}s");
                defaults.timeout
            }
            None => defaults.timeout,
        };

        let page_size = match page_size.map(str::parse::<u32>) {
            Some(Ok(size)) if size > 0 => size,
            Some(_) => {
                warn!("Ignoring invalid MRD_PAGE_SIZE, using {DEFAULT_PAGE_SIZE}");
                defaults.page_size
            }
            None => defaults.page_size,
        };

        Self {
            api_base: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
            timeout,
            page_size,
        }
    }

    /// Absolute URL for an API path such as `/rest/v1/dashboard`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_values(None, None, None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ClientConfig::from_values(None, Some("soon"), Some("0"));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_base_is_trimmed_and_joined() {
        let config = ClientConfig::from_values(Some("https://mrd.example.com/"), Some("5"), Some("50"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.page_size, 50);
        assert_eq!(
            config.url("/rest/v1/dashboard"),
            "https://mrd.example.com/rest/v1/dashboard"
        );
    }
}
