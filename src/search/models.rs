//! Search request and related data models

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market a search is run in
///
/// Decoding goes through [`FromStr`], so tool payloads, settings files, the CLI
/// and `SERP_LOCATION` all accept the same spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Us,
    Gb,
    Nl,
    Ca,
}

impl Location {
    /// All recognised locations, in schema order
    pub const ALL: [Location; 4] = [Location::Us, Location::Gb, Location::Nl, Location::Ca];

    /// Code sent as the `mkt` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Us => "us",
            Location::Gb => "gb",
            Location::Nl => "nl",
            Location::Ca => "ca",
        }
    }

    /// Codes of every recognised location
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(Location::as_str).collect()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" => Ok(Location::Us),
            "gb" => Ok(Location::Gb),
            "nl" => Ok(Location::Nl),
            "ca" => Ok(Location::Ca),
            other => Err(format!(
                "unknown location '{}', expected one of: {}",
                other,
                Location::codes().join(", ")
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// Order in which outcomes appear in the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrder {
    /// Same order as the submitted queries
    #[default]
    Input,
    /// Order in which the queries finished
    Completion,
}

/// A batch of queries as received from the tool call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchRequest {
    /// Queries to run, in order
    #[serde(default)]
    pub queries: Vec<String>,
    /// Market; the configured default is used when absent
    #[serde(default)]
    pub location: Option<Location>,
}

impl SearchRequest {
    pub fn new<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queries: queries.into_iter().map(Into::into).collect(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Location to search in, falling back to `default`
    pub fn location_or(&self, default: Location) -> Location {
        self.location.unwrap_or(default)
    }
}
