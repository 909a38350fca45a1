//! Bing-backed search tool

use super::{schema, SearchTool};
use crate::config::{OutgoingSettings, Settings};
use crate::engines::Bing;
use crate::error::SearchError;
use crate::network::HttpClient;
use crate::results::render_report;
use crate::search::{Location, Search, SearchRequest};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs batches of web searches and renders them as one text report
pub struct SearchQueryExecutor {
    name: String,
    search: Search,
    default_location: Location,
}

impl SearchQueryExecutor {
    /// Create an executor for the Bing API with default outgoing settings
    pub fn new(
        name: impl Into<String>,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, SearchError> {
        let mut settings = Settings::default();
        settings.general.name = name.into();
        settings.bing.api_key = api_key.into();
        settings.bing.endpoint = endpoint.into();
        Self::from_settings(&settings)
    }

    /// Create an executor from validated settings
    pub fn from_settings(settings: &Settings) -> Result<Self, SearchError> {
        settings
            .validate()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let client = build_client(&settings.outgoing)?;
        let engine = Arc::new(Bing::with_endpoint(
            &settings.bing.api_key,
            &settings.bing.endpoint,
        ));
        let search = Search::new(client, engine)
            .with_max_concurrency(settings.search.max_concurrency)
            .with_result_order(settings.search.result_order);

        Ok(Self::with_search(
            &settings.general.name,
            search,
            settings.search.default_location,
        ))
    }

    /// Wrap an already configured search executor
    pub fn with_search(name: impl Into<String>, search: Search, default_location: Location) -> Self {
        let name = name.into();
        info!("{} '{}' initialized.", search.engine().name(), name);
        Self {
            name,
            search,
            default_location,
        }
    }

    /// Run `queries` in `location` and render the report
    pub async fn dispatch(
        &self,
        queries: &[String],
        location: Location,
    ) -> Result<String, SearchError> {
        info!(
            "{} is searching for queries: {:?} in location: {}",
            self.name, queries, location
        );

        let outcomes = self.search.execute(queries, location).await?;
        let report = render_report(&outcomes);

        debug!("{} search results:\n{}", self.name, report);

        Ok(report)
    }
}

fn build_client(outgoing: &OutgoingSettings) -> Result<HttpClient, SearchError> {
    HttpClient::with_settings(outgoing).map_err(|e| SearchError::Config(e.to_string()))
}

#[async_trait]
impl SearchTool for SearchQueryExecutor {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe_input_schema(&self) -> serde_json::Value {
        schema::input_schema()
    }

    async fn execute(&self, request: SearchRequest) -> Result<String, SearchError> {
        let location = request.location_or(self.default_location);
        self.dispatch(&request.queries, location).await
    }
}
