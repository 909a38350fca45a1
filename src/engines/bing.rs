//! Bing Web Search API engine

use super::traits::*;
use crate::error::SearchError;
use crate::results::SearchHit;
use anyhow::Result as AnyhowResult;
use serde::Deserialize;
use tracing::debug;

/// Public Bing Web Search v7 endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/search";

/// Header carrying the subscription key
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Bing web search through the official JSON API
pub struct Bing {
    endpoint: String,
    api_key: String,
}

impl Bing {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

// Every field is optional; a 200 without `webPages.value` means zero results.
#[derive(Debug, Default, Deserialize)]
struct BingResponse {
    #[serde(rename = "webPages")]
    web_pages: Option<WebPages>,
}

#[derive(Debug, Default, Deserialize)]
struct WebPages {
    value: Option<Vec<WebPage>>,
}

#[derive(Debug, Default, Deserialize)]
struct WebPage {
    name: Option<String>,
    url: Option<String>,
}

impl Engine for Bing {
    fn name(&self) -> &str {
        "bing"
    }

    fn request(&self, params: &RequestParams) -> AnyhowResult<EngineRequest> {
        let request = EngineRequest::get(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .param("q", &params.query)
            .param("mkt", params.location.as_str())
            .param("count", self.results_per_page().to_string());

        Ok(request)
    }

    fn response(&self, query: &str, response: EngineResponse) -> AnyhowResult<Vec<SearchHit>> {
        if response.is_error() {
            let status = reqwest::StatusCode::from_u16(response.status)?;
            return Err(SearchError::Http { status }.into());
        }

        let body: BingResponse = response.json()?;
        let pages = body
            .web_pages
            .and_then(|w| w.value)
            .unwrap_or_default();

        if pages.is_empty() {
            debug!("No 'webPages' results found for '{}'", query);
        }

        let hits = pages
            .into_iter()
            .map(|page| {
                SearchHit::new(
                    query,
                    page.name.unwrap_or_else(|| "No Title".to_string()),
                    page.url.unwrap_or_else(|| "#".to_string()),
                )
            })
            .collect();

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Location;

    fn response(status: u16, text: &str) -> EngineResponse {
        EngineResponse {
            status,
            text: text.to_string(),
            url: DEFAULT_ENDPOINT.to_string(),
        }
    }

    #[test]
    fn test_bing_request() {
        let bing = Bing::new("secret");
        let params = RequestParams::new("rust programming", Location::Gb);
        let request = bing.request(&params).unwrap();

        assert_eq!(request.url, DEFAULT_ENDPOINT);
        assert_eq!(request.param_value("q"), Some("rust programming"));
        assert_eq!(request.param_value("mkt"), Some("gb"));
        assert_eq!(request.param_value("count"), Some("10"));
        assert!(request
            .headers
            .contains(&(SUBSCRIPTION_KEY_HEADER.to_string(), "secret".to_string())));
    }

    #[test]
    fn test_bing_response_maps_items() {
        let bing = Bing::new("secret");
        let body = r#"{"webPages": {"value": [
            {"name": "A", "url": "http://a"},
            {"url": "http://b"},
            {"name": "C"}
        ]}}"#;
        let hits = bing.response("q", response(200, body)).unwrap();

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].title, "A");
        assert_eq!(hits[0].link, "http://a");
        assert_eq!(hits[1].title, "No Title");
        assert_eq!(hits[2].link, "#");
        assert!(hits.iter().all(|h| h.query == "q" && h.sitelinks.is_empty()));
    }

    #[test]
    fn test_bing_response_without_web_pages() {
        let bing = Bing::new("secret");
        assert!(bing.response("q", response(200, "{}")).unwrap().is_empty());
        assert!(bing
            .response("q", response(200, r#"{"webPages": {}}"#))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_bing_response_http_error() {
        let bing = Bing::new("secret");
        let err = bing.response("q", response(401, "denied")).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error occurred: 401 Unauthorized");
    }

    #[test]
    fn test_bing_response_invalid_json() {
        let bing = Bing::new("secret");
        assert!(bing.response("q", response(200, "<html>")).is_err());
    }
}
