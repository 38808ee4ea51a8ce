//! Prices sub-client — current spot-price queries.

use crate::client::SpotBitClient;
use crate::domain::price::wire::PriceResponse;
use crate::domain::price::Price;
use crate::error::{DecodeError, SdkError};

/// Sub-client for current-price operations.
pub struct Prices<'a> {
    pub(crate) client: &'a SpotBitClient,
}

impl<'a> Prices<'a> {
    /// Current price averaged across the exchanges the service polls.
    ///
    /// The returned record carries the averaging window and the contributing
    /// / failed exchange lists.
    pub async fn average(&self, currency: &str) -> Result<Price, SdkError> {
        let path = format!("/now/{}", urlencoding::encode(currency));
        self.fetch(&path).await
    }

    /// Current price as reported by a single exchange.
    pub async fn on_exchange(&self, currency: &str, exchange: &str) -> Result<Price, SdkError> {
        let path = format!(
            "/now/{}/{}",
            urlencoding::encode(currency),
            urlencoding::encode(exchange)
        );
        self.fetch(&path).await
    }

    async fn fetch(&self, path: &str) -> Result<Price, SdkError> {
        let body = self.client.http.get_text(path).await?;
        let resp: PriceResponse =
            serde_json::from_str(&body).map_err(DecodeError::from)?;
        Ok(resp.into())
    }
}
