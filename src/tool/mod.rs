//! Tool-calling surface exposed to the hosting agent framework
//!
//! A [`SearchTool`] publishes the JSON schema of its input and turns a decoded
//! request into a plain-text report.

mod executor;
mod schema;

pub use executor::SearchQueryExecutor;
pub use schema::input_schema;

use crate::error::SearchError;
use crate::search::SearchRequest;
use async_trait::async_trait;

/// Capability shared by every search provider callable as a tool
#[async_trait]
pub trait SearchTool: Send + Sync {
    /// Display name of the tool
    fn name(&self) -> &str;

    /// JSON schema describing the accepted input
    fn describe_input_schema(&self) -> serde_json::Value;

    /// Run a request and return the formatted report
    async fn execute(&self, request: SearchRequest) -> Result<String, SearchError>;

    /// Decode a raw tool-call payload and run it
    async fn execute_json(&self, input: serde_json::Value) -> Result<String, SearchError> {
        let request: SearchRequest = serde_json::from_value(input)
            .map_err(|e| SearchError::InvalidInput(e.to_string()))?;
        self.execute(request).await
    }
}
