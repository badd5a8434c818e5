use anyhow::{Result, anyhow, ensure};
use async_trait::async_trait;
use tracing::debug;

use crate::core::rates::RateClient;

/// HTTP client for a frankfurter-style rates endpoint.
///
/// Issues `GET {base_url}/latest?base={code}` and returns the body
/// verbatim. Decoding is left to the parser. No retries, no caching: a
/// failed attempt surfaces immediately.
pub struct FrankfurterClient {
    base_url: String,
}

impl FrankfurterClient {
    pub fn new(base_url: &str) -> Self {
        FrankfurterClient {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl RateClient for FrankfurterClient {
    async fn fetch_rates(&self, base: &str) -> Result<String> {
        ensure!(!base.is_empty(), "Base currency must not be empty");

        let url = format!("{}/latest?base={}", self.base_url, base);
        debug!("Requesting rates from {}", url);

        let client = reqwest::Client::builder().user_agent("fxc/0.1").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base currency: {}", e, base))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            ));
        }

        Ok(response.text().await?)
    }
}
