//! Error types for search execution

use std::time::Duration;
use thiserror::Error;

/// Errors produced while validating or executing a search batch.
///
/// Only [`SearchError::MissingQueries`] and [`SearchError::InvalidInput`] are
/// ever returned from a batch; the rest are captured per query and rendered
/// inline in the report.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search queries are missing from the tool response")]
    MissingQueries,

    #[error("Invalid tool input: {0}")]
    InvalidInput(String),

    #[error("HTTP error occurred: {status}")]
    Http { status: reqwest::StatusCode },

    #[error("Request error occurred: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl SearchError {
    /// Classify an engine error into the search error taxonomy.
    pub fn from_engine(err: anyhow::Error) -> Self {
        let err = match err.downcast::<SearchError>() {
            Ok(search_err) => return search_err,
            Err(err) => err,
        };
        let err = match err.downcast::<reqwest::Error>() {
            Ok(req_err) => return SearchError::Network(req_err),
            Err(err) => err,
        };
        match err.downcast::<serde_json::Error>() {
            Ok(json_err) => SearchError::Parse(json_err.to_string()),
            Err(err) => SearchError::Other(err.to_string()),
        }
    }

    /// Whether this error aborts the whole batch rather than a single query.
    pub fn is_input_error(&self) -> bool {
        matches!(self, SearchError::MissingQueries | SearchError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = SearchError::Http {
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        assert_eq!(err.to_string(), "HTTP error occurred: 401 Unauthorized");
    }

    #[test]
    fn test_from_engine_keeps_search_error() {
        let err = anyhow::Error::new(SearchError::Http {
            status: reqwest::StatusCode::FORBIDDEN,
        });
        assert!(matches!(
            SearchError::from_engine(err),
            SearchError::Http { status } if status == reqwest::StatusCode::FORBIDDEN
        ));
    }

    #[test]
    fn test_from_engine_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = SearchError::from_engine(anyhow::Error::new(json_err));
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_from_engine_other() {
        let err = SearchError::from_engine(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "boom");
        assert!(!err.is_input_error());
    }
}
