//! Engine traits and types

use crate::results::SearchHit;
use crate::search::Location;
use serde::{Deserialize, Serialize};

/// Parameters for building a search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestParams {
    /// Search query string
    pub query: String,
    /// Market to search in
    pub location: Location,
}

impl RequestParams {
    /// Create new request parameters
    pub fn new(query: impl Into<String>, location: Location) -> Self {
        Self {
            query: query.into(),
            location,
        }
    }
}

/// HTTP GET request to be made by the engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Query parameters, in the order they are appended to the URL
    pub params: Vec<(String, String)>,
}

impl EngineRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter by name
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response from engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> anyhow::Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is a client or server error (4xx/5xx)
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Main engine trait that all search backends must implement
pub trait Engine: Send + Sync {
    /// Engine name
    fn name(&self) -> &str;

    /// Number of results requested per query
    fn results_per_page(&self) -> u32 {
        10
    }

    /// Build the HTTP request for a search
    fn request(&self, params: &RequestParams) -> anyhow::Result<EngineRequest>;

    /// Parse the HTTP response into hits for `query`
    fn response(&self, query: &str, response: EngineResponse) -> anyhow::Result<Vec<SearchHit>>;
}
