//! Settings structures for serp-tool configuration

use crate::search::{Location, ResultOrder};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Main settings structure, loaded from `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub bing: BingSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SERP_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SERP_DEBUG") {
            match parse_flag(&val) {
                Some(flag) => self.general.debug = flag,
                None => warn!("Ignoring SERP_DEBUG={:?}: expected true/false, 1/0, yes/no or on/off", val),
            }
        }
        if let Ok(val) = std::env::var("SERP_API_KEY") {
            self.bing.api_key = val;
        }
        if let Ok(val) = std::env::var("SERP_ENDPOINT") {
            self.bing.endpoint = val;
        }
        if let Ok(val) = std::env::var("SERP_LOCATION") {
            match val.parse::<Location>() {
                Ok(location) => self.search.default_location = location,
                Err(e) => warn!("Ignoring SERP_LOCATION: {}", e),
            }
        }
        if let Ok(val) = std::env::var("SERP_TIMEOUT") {
            match val.parse::<f64>() {
                Ok(timeout) => self.outgoing.request_timeout = timeout,
                Err(_) => warn!("Ignoring SERP_TIMEOUT={:?}: expected seconds", val),
            }
        }
    }

    /// Check that the settings can drive a search
    pub fn validate(&self) -> Result<()> {
        if self.bing.api_key.trim().is_empty() {
            bail!("bing.api_key is not set (use SERP_API_KEY or settings.yml)");
        }
        if let Err(e) = url::Url::parse(&self.bing.endpoint) {
            bail!("bing.endpoint '{}' is not a valid URL: {}", self.bing.endpoint, e);
        }
        if self.search.max_concurrency == 0 {
            bail!("search.max_concurrency must be at least 1");
        }
        if !(self.outgoing.request_timeout > 0.0) {
            bail!("outgoing.request_timeout must be positive");
        }
        Ok(())
    }
}

/// Parse a boolean environment flag
fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Display name of the tool
    pub name: String,
    /// Enable debug logging
    pub debug: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            name: "BingSearchAgent".to_string(),
            debug: false,
        }
    }
}

/// Bing Web Search API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BingSettings {
    /// Subscription key, sent as `Ocp-Apim-Subscription-Key`
    pub api_key: String,
    /// Search endpoint URL
    pub endpoint: String,
}

impl Default for BingSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: crate::engines::bing::DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Market used when a request omits `location`
    pub default_location: Location,
    /// Maximum number of in-flight queries per batch
    pub max_concurrency: usize,
    /// Order of outcomes in the report
    pub result_order: ResultOrder,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_location: Location::default(),
            max_concurrency: crate::MAX_CONCURRENCY,
            result_order: ResultOrder::default(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Per-query request timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 10,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
