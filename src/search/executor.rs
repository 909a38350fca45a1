//! Search execution and orchestration

use super::models::{Location, ResultOrder};
use crate::engines::{Engine, RequestParams};
use crate::error::SearchError;
use crate::network::HttpClient;
use crate::results::SearchOutcome;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Search executor that fans a batch of queries out to one engine
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Engine every query is sent to
    engine: Arc<dyn Engine>,
    /// Maximum number of in-flight queries
    max_concurrency: usize,
    /// Order of outcomes in the returned batch
    result_order: ResultOrder,
    /// Per-query timeout
    timeout: Duration,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, engine: Arc<dyn Engine>) -> Self {
        let timeout = client.timeout();
        Self {
            client,
            engine,
            max_concurrency: crate::MAX_CONCURRENCY,
            result_order: ResultOrder::default(),
            timeout,
        }
    }

    /// Set the concurrency cap (at least 1)
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max.max(1);
        self
    }

    /// Set the outcome order
    pub fn with_result_order(mut self, order: ResultOrder) -> Self {
        self.result_order = order;
        self
    }

    /// Set per-query timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    /// Run every query, returning exactly one outcome per query.
    ///
    /// Fails only when `queries` is empty, before any request is sent.
    pub async fn execute(
        &self,
        queries: &[String],
        location: Location,
    ) -> Result<Vec<SearchOutcome>, SearchError> {
        if queries.is_empty() {
            return Err(SearchError::MissingQueries);
        }

        info!(
            "Executing {} queries on {} in location '{}'",
            queries.len(),
            self.engine.name(),
            location
        );

        let units = stream::iter(queries.iter().cloned())
            .map(|query| self.search_one(query, location));

        let outcomes = match self.result_order {
            ResultOrder::Input => {
                units
                    .buffered(self.max_concurrency)
                    .collect::<Vec<_>>()
                    .await
            }
            ResultOrder::Completion => {
                units
                    .buffer_unordered(self.max_concurrency)
                    .collect::<Vec<_>>()
                    .await
            }
        };

        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        let hits: usize = outcomes.iter().map(SearchOutcome::hit_count).sum();
        info!(
            "Batch finished: {} queries, {} hits, {} failed",
            outcomes.len(),
            hits,
            failed
        );

        Ok(outcomes)
    }

    /// Search a single query; every failure becomes a `Failed` outcome
    async fn search_one(&self, query: String, location: Location) -> SearchOutcome {
        let engine_name = self.engine.name();
        let start = Instant::now();

        debug!("Searching '{}' on {} with timeout {:?}", query, engine_name, self.timeout);

        let params = RequestParams::new(query.clone(), location);

        let request = match self.engine.request(&params) {
            Ok(req) => req,
            Err(e) => return Self::failed(query, SearchError::from_engine(e)),
        };

        let result = timeout(self.timeout, self.client.execute(request)).await;

        match result {
            Ok(Ok(response)) => match self.engine.response(&query, response) {
                Ok(hits) => {
                    debug!(
                        "{} returned {} results for '{}' in {:?}",
                        engine_name,
                        hits.len(),
                        query,
                        start.elapsed()
                    );
                    SearchOutcome::hits(query, hits)
                }
                Err(e) => Self::failed(query, SearchError::from_engine(e)),
            },
            Ok(Err(e)) => Self::failed(query, SearchError::from_engine(e)),
            Err(_) => Self::failed(query, SearchError::Timeout(self.timeout)),
        }
    }

    fn failed(query: String, error: SearchError) -> SearchOutcome {
        warn!("Exception occurred while searching for query '{}': {}", query, error);
        SearchOutcome::failed(query, error.to_string())
    }
}
