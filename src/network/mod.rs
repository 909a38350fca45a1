//! HTTP networking module
//!
//! Provides HTTP client functionality for making requests to search engines.

mod client;

pub use client::{request_timeout, HttpClient};
