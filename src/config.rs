//! Centralized configuration management for irsforms

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.irs.gov/pub/irs-pdf";
pub const DEFAULT_LISTING_URL: &str = "https://www.irs.gov/downloads/irs-pdf";
pub const DEFAULT_LISTING_PAGES: u32 = 63;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for downloaded forms and the metadata file
    pub forms_dir: PathBuf,
    /// File server the PDFs are fetched from
    pub base_url: String,
    /// Paginated HTML catalog scraped for metadata
    pub listing_url: String,
    /// Number of listing pages to scrape
    pub listing_pages: u32,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forms_dir: PathBuf::from("./forms"),
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_url: DEFAULT_LISTING_URL.to_string(),
            listing_pages: DEFAULT_LISTING_PAGES,
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let forms_dir = lookup("IRSFORMS_FORMS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.forms_dir);

        let base_url = lookup("IRSFORMS_BASE_URL").unwrap_or(defaults.base_url);
        let listing_url = lookup("IRSFORMS_LISTING_URL").unwrap_or(defaults.listing_url);

        let http = HttpConfig {
            timeout_seconds: parse_var(&lookup, "IRSFORMS_HTTP_TIMEOUT_SECONDS")?
                .unwrap_or(defaults.http.timeout_seconds),
            user_agent: lookup("IRSFORMS_USER_AGENT").unwrap_or(defaults.http.user_agent),
        };

        Ok(Config {
            forms_dir,
            base_url: base_url.trim_end_matches('/').to_string(),
            listing_url,
            listing_pages: parse_var(&lookup, "IRSFORMS_LISTING_PAGES")?
                .unwrap_or(defaults.listing_pages),
            http,
        })
    }

    /// Location of the scraped catalog
    pub fn metadata_path(&self) -> PathBuf {
        self.forms_dir.join("metadata.json")
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Build the shared reqwest client
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(&self.http.user_agent)
            .timeout(self.http_timeout())
            .build()
            .context("Failed to build HTTP client")
    }
}

/// Helper function to parse a configuration variable as a specific type
fn parse_var<T, F>(lookup: &F, var_name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match lookup(var_name) {
        Some(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.forms_dir, PathBuf::from("./forms"));
        assert_eq!(config.base_url, "https://www.irs.gov/pub/irs-pdf");
        assert_eq!(config.listing_pages, 63);
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.http.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn test_metadata_path() {
        let config = Config {
            forms_dir: PathBuf::from("/tmp/forms"),
            ..Config::default()
        };
        assert_eq!(config.metadata_path(), PathBuf::from("/tmp/forms/metadata.json"));
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_empty_lookup_gives_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.forms_dir, PathBuf::from("./forms"));
        assert_eq!(config.listing_url, "https://www.irs.gov/downloads/irs-pdf");
        assert_eq!(config.listing_pages, 63);
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("IRSFORMS_FORMS_DIR", "/data/forms"),
            ("IRSFORMS_BASE_URL", "http://mirror.local/pdf/"),
            ("IRSFORMS_LISTING_PAGES", "5"),
            ("IRSFORMS_HTTP_TIMEOUT_SECONDS", "10"),
            ("IRSFORMS_USER_AGENT", "irsforms-test"),
        ]))
        .unwrap();
        assert_eq!(config.forms_dir, PathBuf::from("/data/forms"));
        assert_eq!(config.base_url, "http://mirror.local/pdf");
        assert_eq!(config.listing_pages, 5);
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
        assert_eq!(config.http.user_agent, "irsforms-test");
    }

    #[test]
    fn test_unparseable_number_rejected() {
        let result = Config::from_lookup(lookup_from(&[("IRSFORMS_LISTING_PAGES", "lots")]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("IRSFORMS_LISTING_PAGES"));
    }
}
