//! KEGG REST API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry on 429 with exponential backoff and jitter
//! - A fixed, jittered delay after every request
//! - Parsers for pathway and drug entries

mod retry;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

pub use retry::{RetryPolicy, retry_after_secs};

use crate::config::Config;
use crate::error::ClientResult;
use crate::flatfile;
use crate::models::{DrugId, DrugRecord, PathwayId};

/// A raw `get` response.
///
/// Any status is possible, including a final 429 when retries ran out;
/// callers decide what a non-success status means for them.
#[derive(Debug, Clone)]
pub struct KeggResponse {
    /// Requested URL.
    pub url: String,

    /// HTTP status of the last attempt.
    pub status: StatusCode,

    /// Headers of the last attempt.
    pub headers: HeaderMap,

    /// Response body.
    pub text: String,

    /// How many 429 answers were retried before this one.
    pub retries: u32,
}

impl KeggResponse {
    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Whether the final answer was still a 429.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status == StatusCode::TOO_MANY_REQUESTS
    }
}

/// Pathway and drug lookups.
///
/// Implemented by [`KeggClient`] and by the caching wrapper in
/// [`crate::cache`], so tools and the batch runner work with either.
#[async_trait::async_trait]
pub trait KeggApi: Send + Sync {
    /// Drug IDs listed in a pathway entry.
    async fn list_pathway_drugs(&self, pathway_id: &str) -> ClientResult<Vec<String>>;

    /// Name, class and targets of a drug entry.
    async fn get_drug_info(&self, drug_id: &str) -> ClientResult<DrugRecord>;
}

/// KEGG REST API client.
#[derive(Clone)]
pub struct KeggClient {
    /// HTTP client.
    client: reqwest::Client,

    /// Base URL (no trailing slash).
    kegg_base: String,

    /// Throttling and 429 handling.
    policy: RetryPolicy,
}

impl KeggClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().gzip(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            policy: RetryPolicy::from_config(&config),
            kegg_base: config.kegg_base,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.kegg_base
    }

    /// GET `url`, retrying on 429.
    ///
    /// The response is returned whatever its status. After retries are
    /// exhausted the last 429 comes back as-is rather than as an error, so
    /// a caller that ignores the status can silently read an error body.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure (DNS, connection, timeout) or if
    /// the body cannot be read.
    pub async fn fetch(&self, url: &str) -> ClientResult<KeggResponse> {
        let mut retries = 0;

        let response = loop {
            let response = self.client.get(url).send().await?;

            if !self.policy.should_retry(response.status(), retries) {
                break response;
            }

            let retry_after = retry_after_secs(response.headers());
            let wait = self.policy.backoff_with_jitter(retry_after, retries);
            tracing::warn!(
                url = %url,
                retries,
                wait_ms = wait.as_millis() as u64,
                "429 received, backing off"
            );
            tokio::time::sleep(wait).await;
            retries += 1;
        };

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(
                url = %url,
                retries,
                "Still rate limited after retries, returning 429 response"
            );
        }

        let headers = response.headers().clone();
        let text = response.text().await?;

        tokio::time::sleep(self.policy.throttle_delay()).await;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            retries,
            bytes = text.len(),
            "KEGG response"
        );

        Ok(KeggResponse { url: url.to_string(), status, headers, text, retries })
    }

    /// Fetch the flat-file entry for an identifier (`{base}/get/{id}`).
    ///
    /// # Errors
    ///
    /// Returns error on transport failure.
    pub async fn get_entry(&self, id: &str) -> ClientResult<KeggResponse> {
        let url = format!("{}/get/{}", self.kegg_base, id);
        self.fetch(&url).await
    }

    /// List the drug IDs of a pathway (e.g. `"path:map00010"`).
    ///
    /// The entry body is parsed whatever the status; an error page has no
    /// `DRUG` block and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::InvalidInput`] before any request if the
    /// ID is malformed, or a transport error.
    pub async fn list_pathway_drugs(&self, pathway_id: &str) -> ClientResult<Vec<String>> {
        let pathway_id = PathwayId::parse(pathway_id)?;
        let response = self.get_entry(pathway_id.as_str()).await?;

        if !response.is_success() {
            tracing::warn!(
                pathway_id = %pathway_id,
                url = %response.url,
                status = response.status.as_u16(),
                "Non-success response for pathway entry"
            );
        }

        let drugs = flatfile::extract_drug_ids(&response.text);
        tracing::debug!(pathway_id = %pathway_id, count = drugs.len(), "Parsed pathway drugs");
        Ok(drugs)
    }

    /// Fetch name, class and targets for a drug (e.g. `"D00109"`).
    ///
    /// A non-success response is treated as an empty entry, so every field
    /// takes its default.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::InvalidInput`] before any request if the
    /// ID is malformed, or a transport error.
    pub async fn get_drug_info(&self, drug_id: &str) -> ClientResult<DrugRecord> {
        let drug_id = DrugId::parse(drug_id)?;
        let response = self.get_entry(drug_id.as_str()).await?;

        let lines: Vec<&str> = if response.is_success() {
            response.text.lines().collect()
        } else {
            tracing::warn!(
                drug_id = %drug_id,
                url = %response.url,
                status = response.status.as_u16(),
                "Non-success response for drug entry, using defaults"
            );
            Vec::new()
        };

        Ok(flatfile::parse_drug_record(drug_id.as_str(), &lines))
    }
}

#[async_trait::async_trait]
impl KeggApi for KeggClient {
    async fn list_pathway_drugs(&self, pathway_id: &str) -> ClientResult<Vec<String>> {
        Self::list_pathway_drugs(self, pathway_id).await
    }

    async fn get_drug_info(&self, drug_id: &str) -> ClientResult<DrugRecord> {
        Self::get_drug_info(self, drug_id).await
    }
}

impl std::fmt::Debug for KeggClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeggClient")
            .field("kegg_base", &self.kegg_base)
            .field("max_retries", &self.policy.max_retries)
            .finish()
    }
}
