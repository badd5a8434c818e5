//! Rate fetching abstractions

use anyhow::Result;
use async_trait::async_trait;

/// Fetches the raw rates document for a base currency.
///
/// Implementations perform exactly one outbound request per call and return
/// the response body verbatim; decoding is the parser's job. Any failure
/// (unreachable network, timeout, non-2xx status) surfaces as an error with
/// no retry.
#[async_trait]
pub trait RateClient: Send + Sync {
    async fn fetch_rates(&self, base: &str) -> Result<String>;
}

/// Outcome of a single rate lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum RateResult {
    Rate(f64),
    NotFound(String),
    MalformedResponse(String),
    TransportError(String),
}

/// Outcome of the currency list bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(Vec<String>),
    Failed(String),
}
