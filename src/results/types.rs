//! Result type definitions

use serde::{Deserialize, Serialize};

/// A secondary link nested under a primary search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sitelink {
    pub title: String,
    pub link: String,
}

impl Sitelink {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// A single normalized organic search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The query that produced this hit
    pub query: String,
    /// The title of the result
    pub title: String,
    /// The URL of the result
    pub link: String,
    /// Sitelinks, in upstream order
    #[serde(default)]
    pub sitelinks: Vec<Sitelink>,
}

impl SearchHit {
    /// Create a new hit with no sitelinks
    pub fn new(query: impl Into<String>, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            title: title.into(),
            link: link.into(),
            sitelinks: Vec::new(),
        }
    }

    /// Attach a sitelink
    pub fn with_sitelink(mut self, sitelink: Sitelink) -> Self {
        self.sitelinks.push(sitelink);
        self
    }
}

/// Outcome of a single query: its hits, or why it failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Hits { query: String, hits: Vec<SearchHit> },
    Failed { query: String, message: String },
}

impl SearchOutcome {
    pub fn hits(query: impl Into<String>, hits: Vec<SearchHit>) -> Self {
        SearchOutcome::Hits {
            query: query.into(),
            hits,
        }
    }

    pub fn failed(query: impl Into<String>, message: impl Into<String>) -> Self {
        SearchOutcome::Failed {
            query: query.into(),
            message: message.into(),
        }
    }

    /// The query this outcome belongs to
    pub fn query(&self) -> &str {
        match self {
            SearchOutcome::Hits { query, .. } | SearchOutcome::Failed { query, .. } => query,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SearchOutcome::Failed { .. })
    }

    /// Number of hits (zero for failures)
    pub fn hit_count(&self) -> usize {
        match self {
            SearchOutcome::Hits { hits, .. } => hits.len(),
            SearchOutcome::Failed { .. } => 0,
        }
    }
}
