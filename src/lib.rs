//! serp-tool: batch web search for tool-calling agents
//!
//! Turns a list of natural-language queries into a plain-text summary of
//! organic search results (query, title, link, sitelinks), querying the Bing
//! Web Search API with bounded concurrency.

pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod results;
pub mod search;
pub mod tool;

pub use config::Settings;
pub use engines::Engine;
pub use error::SearchError;
pub use results::{SearchHit, SearchOutcome, Sitelink};
pub use search::{Location, ResultOrder, Search, SearchRequest};
pub use tool::{SearchQueryExecutor, SearchTool};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default per-query timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;

/// Maximum timeout that can be set
pub const MAX_TIMEOUT: u64 = 60;

/// Default number of queries in flight at once
pub const MAX_CONCURRENCY: usize = 5;
