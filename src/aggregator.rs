//! Concurrent fan-out over every configured news source.
//!
//! The aggregator starts one fetch per source, waits for all of them to
//! settle, and concatenates the results in source order. Sources already
//! absorb their own failures, so a cycle can only lose coverage, never fail.

use crate::models::Article;
use crate::sources::NewsSource;
use futures::future::join_all;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Fans out to a fixed set of sources.
#[derive(Debug)]
pub struct Aggregator<S> {
    sources: Vec<S>,
}

impl<S: NewsSource> Aggregator<S> {
    pub fn new(sources: Vec<S>) -> Self {
        Self { sources }
    }

    /// Number of sources queried per cycle.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Fetch from every source concurrently and return all articles.
    ///
    /// Each call performs its own full fan-out. Results are concatenated in
    /// source order; no ordering is implied within or across sources.
    ///
    /// # Arguments
    ///
    /// * `country` - Country code passed to every source
    #[instrument(level = "info", skip(self), fields(sources = self.sources.len()))]
    pub async fn fetch_all(&self, country: &str) -> Vec<Article> {
        let t0 = Instant::now();
        let batches = join_all(self.sources.iter().map(|s| s.fetch(country))).await;

        let mut articles = Vec::with_capacity(batches.iter().map(Vec::len).sum());
        for (source, batch) in self.sources.iter().zip(batches) {
            if batch.is_empty() {
                warn!(source = source.name(), "Source returned no articles");
            } else {
                info!(source = source.name(), count = batch.len(), "Collected articles");
            }
            articles.extend(batch);
        }

        info!(
            total = articles.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Aggregation cycle complete"
        );
        articles
    }
}
