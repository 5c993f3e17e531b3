//! Configuration for the KEGG MCP server.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the KEGG REST API.
    pub const BASE_URL: &str = "https://rest.kegg.jp";

    /// Fixed delay after every completed request.
    pub const REQUEST_INTERVAL: Duration = Duration::from_millis(500);

    /// Upper bound (exclusive) of the random delay added to `REQUEST_INTERVAL`.
    pub const INTERVAL_JITTER: Duration = Duration::from_millis(200);

    /// Upper bound (exclusive) of the random delay added to each 429 backoff.
    pub const BACKOFF_JITTER: Duration = Duration::from_millis(500);

    /// Retries allowed for a request answered with 429.
    pub const MAX_RETRIES: u32 = 3;

    /// `Retry-After` value assumed when the header is missing.
    pub const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

    /// Pathway lookups kept in the LRU cache.
    pub const PATHWAY_CACHE_SIZE: u64 = 128;

    /// Drug lookups kept in the LRU cache.
    pub const DRUG_CACHE_SIZE: u64 = 256;
}

/// Environment variable names.
pub mod env {
    /// KEGG REST base URL.
    pub const KEGG_BASE: &str = "KEGG_BASE";

    /// Inter-request interval in (fractional) seconds.
    pub const REQUEST_INTERVAL: &str = "REQUEST_INTERVAL";

    /// Retry cap for 429 responses.
    pub const MAX_RETRIES: &str = "MAX_RETRIES";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the KEGG REST API (for testing with mock servers).
    pub kegg_base: String,

    /// Delay after every request, success or not.
    pub request_interval: Duration,

    /// Random jitter bound added to `request_interval`.
    pub interval_jitter: Duration,

    /// Random jitter bound added to each 429 backoff.
    pub backoff_jitter: Duration,

    /// Maximum retries on a 429 response.
    pub max_retries: u32,

    /// Whole-request timeout. `None` leaves the transport default.
    pub request_timeout: Option<Duration>,

    /// Pathway cache capacity.
    pub pathway_cache_size: u64,

    /// Drug cache capacity.
    pub drug_cache_size: u64,
}

impl Config {
    /// Create a configuration with the given base URL, interval and retry cap.
    ///
    /// A trailing `/` on the base URL is dropped so `{base}/get/{id}` never
    /// contains a double slash.
    #[must_use]
    pub fn new(kegg_base: impl Into<String>, request_interval: Duration, max_retries: u32) -> Self {
        let kegg_base = kegg_base.into().trim_end_matches('/').to_string();
        Self {
            kegg_base,
            request_interval,
            interval_jitter: api::INTERVAL_JITTER,
            backoff_jitter: api::BACKOFF_JITTER,
            max_retries,
            request_timeout: None,
            pathway_cache_size: api::PATHWAY_CACHE_SIZE,
            drug_cache_size: api::DRUG_CACHE_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            kegg_base: base_url.trim_end_matches('/').to_string(),
            request_interval: Duration::ZERO, // No delay in tests
            interval_jitter: Duration::ZERO,
            backoff_jitter: Duration::ZERO,
            max_retries: api::MAX_RETRIES,
            request_timeout: Some(Duration::from_secs(5)),
            pathway_cache_size: 8,
            drug_cache_size: 8,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Loads a `.env` file first if one exists. Unset variables fall back to
    /// the defaults in [`api`].
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let kegg_base =
            std::env::var(env::KEGG_BASE).unwrap_or_else(|_| api::BASE_URL.to_string());

        let request_interval = match std::env::var(env::REQUEST_INTERVAL) {
            Ok(raw) => parse_interval(&raw).with_context(|| {
                format!("{} must be a non-negative number of seconds", env::REQUEST_INTERVAL)
            })?,
            Err(_) => api::REQUEST_INTERVAL,
        };

        let max_retries = match std::env::var(env::MAX_RETRIES) {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a non-negative integer", env::MAX_RETRIES))?,
            Err(_) => api::MAX_RETRIES,
        };

        Ok(Self::new(kegg_base, request_interval, max_retries))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::BASE_URL, api::REQUEST_INTERVAL, api::MAX_RETRIES)
    }
}

/// Parse fractional seconds into a duration.
///
/// # Errors
///
/// Returns error for non-numeric, negative or non-finite input.
pub fn parse_interval(raw: &str) -> anyhow::Result<Duration> {
    let secs: f64 = raw.trim().parse()?;
    Ok(Duration::try_from_secs_f64(secs)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.kegg_base, "https://rest.kegg.jp");
        assert_eq!(config.request_interval, Duration::from_millis(500));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.pathway_cache_size, 128);
        assert_eq!(config.drug_cache_size, 256);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = Config::new("http://localhost:9999/", Duration::ZERO, 0);
        assert_eq!(config.kegg_base, "http://localhost:9999");
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("0.5").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_interval(" 2 ").unwrap(), Duration::from_secs(2));
        assert!(parse_interval("-1").is_err());
        assert!(parse_interval("fast").is_err());
        assert!(parse_interval("NaN").is_err());
    }

    #[test]
    fn test_for_testing_disables_delays() {
        let config = Config::for_testing("http://127.0.0.1:1234");
        assert_eq!(config.request_interval, Duration::ZERO);
        assert_eq!(config.interval_jitter, Duration::ZERO);
        assert_eq!(config.backoff_jitter, Duration::ZERO);
        assert_eq!(config.max_retries, 3);
    }
}
