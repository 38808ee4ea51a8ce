//! High-level client — `SpotBitClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::config::client::Config;
use crate::domain::history::client::History;
use crate::domain::price::client::Prices;
use crate::domain::status::client::Status;
use crate::error::SdkError;
use crate::http::SpotBitHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::config::client::Config as ConfigClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::price::client::Prices as PricesClient;
pub use crate::domain::status::client::Status as StatusClient;

/// The primary entry point for the SpotBit SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.status()`, `client.prices()`, etc.
#[derive(Clone)]
pub struct SpotBitClient {
    pub(crate) http: SpotBitHttp,
}

impl SpotBitClient {
    pub fn builder() -> SpotBitClientBuilder {
        SpotBitClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn status(&self) -> Status<'_> {
        Status { client: self }
    }

    pub fn config(&self) -> Config<'_> {
        Config { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SpotBitClientBuilder {
    base_url: String,
    socks_proxy: Option<String>,
    timeout: Duration,
}

impl Default for SpotBitClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            socks_proxy: Some(crate::network::DEFAULT_TOR_PROXY.to_string()),
            timeout: Duration::from_secs(30),
        }
    }
}

impl SpotBitClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// SOCKS5 proxy for the anonymizing transport; `None` goes direct
    /// (only useful against a non-onion deployment).
    pub fn socks_proxy(mut self, proxy: Option<&str>) -> Self {
        self.socks_proxy = proxy.map(str::to_string);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<SpotBitClient, SdkError> {
        let http = SpotBitHttp::new(&self.base_url, self.socks_proxy.as_deref(), self.timeout)?;
        Ok(SpotBitClient { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_onion_host() {
        let builder = SpotBitClient::builder();
        assert_eq!(builder.base_url, crate::network::DEFAULT_API_URL);
        assert_eq!(
            builder.socks_proxy.as_deref(),
            Some(crate::network::DEFAULT_TOR_PROXY)
        );
    }

    #[test]
    fn test_builder_overrides() {
        let builder = SpotBitClient::builder()
            .base_url("http://localhost:5000")
            .socks_proxy(None)
            .timeout(Duration::from_secs(5));
        assert_eq!(builder.base_url, "http://localhost:5000");
        assert_eq!(builder.socks_proxy, None);
        let client = builder.build().unwrap();
        client.status();
        client.config();
        client.prices();
        client.history();
    }
}
