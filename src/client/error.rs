use thiserror::Error;

/// Failures while talking to the search endpoint.
///
/// Every variant is recovered locally by the controller: the user sees the
/// fixed failure message, never the underlying error text.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid search endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("search request failed: {0}")]
    Connect(String),

    #[error("search endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed search response: {0}")]
    Body(String),
}
