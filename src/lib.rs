pub mod client;
pub mod interactive;
pub mod markup;

pub use client::{SearchClient, SearchResultPage, SearchTransport, TransportError};
pub use interactive::{InteractiveSearch, SearchOptions};
