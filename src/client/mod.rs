use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

mod error;

pub use error::TransportError;

/// One page of server-side search results.
///
/// The server answers `GET /search/?q=..&page=..` with ranked results and a
/// pre-rendered HTML fragment (result entries plus embedded pagination
/// links). The fragment is trusted and inserted as-is; only `results`
/// decides whether the page counts as empty. A missing `results` field is
/// treated the same as `[]`: emptiness is always a length check, never a
/// presence check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResultPage {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub results_html: String,
}

impl SearchResultPage {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A fetch dispatched to the transport worker. `seq` is a monotonically
/// increasing tag used to discard superseded responses.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: String,
    pub page: u32,
}

#[derive(Debug)]
pub struct FetchResponse {
    pub seq: u64,
    pub result: Result<SearchResultPage, TransportError>,
}

/// Seam between the controller and the network.
///
/// The production implementation is [`SearchClient`]; tests substitute a
/// scripted fake.
pub trait SearchTransport {
    /// Fetch one result page. Callers guarantee `query` is non-empty after
    /// trimming and `page >= 1`; empty input short-circuits in the
    /// controller and never reaches the transport.
    fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResultPage, TransportError>;
}

/// Blocking HTTP client for the search endpoint.
///
/// Runs on the dedicated fetch worker thread, so a blocking client keeps the
/// UI loop free without dragging in an async runtime. Requests carry
/// `X-Requested-With: XMLHttpRequest` so the server answers with JSON
/// instead of a full page.
#[derive(Debug)]
pub struct SearchClient {
    http: reqwest::blocking::Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let invalid = |reason: String| TransportError::InvalidEndpoint {
            url: base_url.to_string(),
            reason,
        };

        // Normalize the trailing slash so Url::join keeps any base path.
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        let endpoint = Url::parse(&base)
            .and_then(|u| u.join("search/"))
            .map_err(|e| invalid(e.to_string()))?;

        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SearchTransport for SearchClient {
    fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResultPage, TransportError> {
        debug_assert!(!query.trim().is_empty());
        debug_assert!(page >= 1);

        let page_param = page.to_string();
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("q", query), ("page", page_param.as_str())])
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<SearchResultPage>()
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_response() {
        let page: SearchResultPage = serde_json::from_str(
            r#"{"results": [1, 2], "results_html": "<div>two hits</div>"}"#,
        )
        .unwrap();
        assert!(!page.is_empty());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results_html, "<div>two hits</div>");
    }

    #[test]
    fn empty_results_array_is_empty() {
        // An empty array must count as "no results" even though it is a
        // perfectly well-formed value.
        let page: SearchResultPage =
            serde_json::from_str(r#"{"results": [], "results_html": ""}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn missing_results_field_is_empty() {
        let page: SearchResultPage = serde_json::from_str(r#"{"results_html": "<p>x</p>"}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn garbage_body_fails_to_parse() {
        assert!(serde_json::from_str::<SearchResultPage>("<html>boom</html>").is_err());
    }

    #[test]
    fn endpoint_joins_search_path() {
        let client = SearchClient::new("https://blog.example.com", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://blog.example.com/search/");

        // A base path survives normalization.
        let client = SearchClient::new("https://example.com/blog/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://example.com/blog/search/");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = SearchClient::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, TransportError::InvalidEndpoint { .. }));
    }
}
