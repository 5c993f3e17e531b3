//! Rate limiting and 429 backoff policy.
//!
//! Every request ends with a fixed throttle delay plus jitter. A 429 answer
//! is retried after `Retry-After * 2^retries` seconds plus jitter, until the
//! retry cap is reached.

use std::time::Duration;

use rand::Rng;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::config::{Config, api};

/// Backoff and throttling parameters for one client.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries allowed for a 429 response.
    pub max_retries: u32,

    /// Fixed delay after each completed request.
    pub request_interval: Duration,

    /// Jitter bound for the throttle delay.
    pub interval_jitter: Duration,

    /// Jitter bound for each backoff.
    pub backoff_jitter: Duration,
}

impl RetryPolicy {
    /// Build the policy from client configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_retries: config.max_retries,
            request_interval: config.request_interval,
            interval_jitter: config.interval_jitter,
            backoff_jitter: config.backoff_jitter,
        }
    }

    /// Whether a response with `status` should be retried after `retries`
    /// earlier attempts.
    #[must_use]
    pub fn should_retry(&self, status: StatusCode, retries: u32) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS && retries < self.max_retries
    }

    /// Exponential part of the backoff: `retry_after_secs * 2^retries`.
    #[must_use]
    pub fn backoff(&self, retry_after_secs: u64, retries: u32) -> Duration {
        Duration::from_secs(retry_after_secs).saturating_mul(2u32.saturating_pow(retries))
    }

    /// Full wait before retry number `retries + 1`.
    #[must_use]
    pub fn backoff_with_jitter(&self, retry_after_secs: u64, retries: u32) -> Duration {
        self.backoff(retry_after_secs, retries).saturating_add(jitter(self.backoff_jitter))
    }

    /// Delay applied after every request before the response is handed back.
    #[must_use]
    pub fn throttle_delay(&self) -> Duration {
        self.request_interval.saturating_add(jitter(self.interval_jitter))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// `Retry-After` in whole seconds, or the default when absent or not an
/// integer (HTTP-date values are not supported).
#[must_use]
pub fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(api::DEFAULT_RETRY_AFTER_SECS)
}

/// Uniform random duration in `[0, max)`.
fn jitter(max: Duration) -> Duration {
    if max.is_zero() {
        return Duration::ZERO;
    }
    max.mul_f64(rand::thread_rng().gen_range(0.0..1.0))
}
