//! Search orchestration module
//!
//! Fans a batch of queries out to an engine with bounded concurrency
//! and collects one outcome per query.

mod executor;
mod models;

pub use executor::Search;
pub use models::*;
