//! LRU memoization for pathway and drug lookups.
//!
//! [`CachedKegg`] wraps any [`KeggApi`] and answers repeated lookups for the
//! same identifier from memory. Failed lookups are never stored.

use moka::future::Cache;
use moka::policy::EvictionPolicy;

use crate::client::KeggApi;
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::DrugRecord;

/// Caching wrapper around a [`KeggApi`].
pub struct CachedKegg<A> {
    inner: A,
    pathways: Cache<String, Vec<String>>,
    drugs: Cache<String, DrugRecord>,
}

impl<A: KeggApi> CachedKegg<A> {
    /// Wrap `inner` with caches sized from `config`.
    #[must_use]
    pub fn new(inner: A, config: &Config) -> Self {
        Self::with_capacity(inner, config.pathway_cache_size, config.drug_cache_size)
    }

    /// Wrap `inner` with explicit capacities.
    #[must_use]
    pub fn with_capacity(inner: A, pathway_capacity: u64, drug_capacity: u64) -> Self {
        Self { inner, pathways: lru(pathway_capacity), drugs: lru(drug_capacity) }
    }

    /// The wrapped lookup implementation.
    #[must_use]
    pub const fn inner(&self) -> &A {
        &self.inner
    }

    /// Entries currently held (pathways, drugs).
    ///
    /// Eviction is applied lazily; call [`Self::sync`] first for exact
    /// numbers.
    #[must_use]
    pub fn entry_counts(&self) -> (u64, u64) {
        (self.pathways.entry_count(), self.drugs.entry_count())
    }

    /// Apply pending inserts and evictions.
    pub async fn sync(&self) {
        self.pathways.run_pending_tasks().await;
        self.drugs.run_pending_tasks().await;
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.pathways.invalidate_all();
        self.drugs.invalidate_all();
    }
}

fn lru<V: Clone + Send + Sync + 'static>(capacity: u64) -> Cache<String, V> {
    Cache::builder().max_capacity(capacity).eviction_policy(EvictionPolicy::lru()).build()
}

#[async_trait::async_trait]
impl<A: KeggApi> KeggApi for CachedKegg<A> {
    async fn list_pathway_drugs(&self, pathway_id: &str) -> ClientResult<Vec<String>> {
        if let Some(hit) = self.pathways.get(pathway_id).await {
            tracing::debug!(pathway_id, "Pathway cache hit");
            return Ok(hit);
        }

        let drugs = self.inner.list_pathway_drugs(pathway_id).await?;
        self.pathways.insert(pathway_id.to_string(), drugs.clone()).await;
        Ok(drugs)
    }

    async fn get_drug_info(&self, drug_id: &str) -> ClientResult<DrugRecord> {
        if let Some(hit) = self.drugs.get(drug_id).await {
            tracing::debug!(drug_id, "Drug cache hit");
            return Ok(hit);
        }

        let record = self.inner.get_drug_info(drug_id).await?;
        self.drugs.insert(drug_id.to_string(), record.clone()).await;
        Ok(record)
    }
}

impl<A> std::fmt::Debug for CachedKegg<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedKegg")
            .field("pathways", &self.pathways.entry_count())
            .field("drugs", &self.drugs.entry_count())
            .finish()
    }
}
