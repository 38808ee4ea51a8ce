//! History sub-client — historical OHLCV queries.

use crate::client::SpotBitClient;
use crate::domain::candle::Candle;
use crate::domain::history::wire::HistoryResponse;
use crate::domain::history::PriceHistory;
use crate::error::{DecodeError, SdkError};
use chrono::{DateTime, Utc};

/// Sub-client for historical-price operations.
pub struct History<'a> {
    pub(crate) client: &'a SpotBitClient,
}

impl<'a> History<'a> {
    /// Historical prices for a currency on one exchange over `[from, to)`.
    ///
    /// Rows come back in the order the backend sent them.
    pub async fn get(
        &self,
        currency: &str,
        exchange: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<PriceHistory, SdkError> {
        let path = format!(
            "/hist/{}/{}/{}/{}",
            urlencoding::encode(currency),
            urlencoding::encode(exchange),
            from.timestamp_millis(),
            to.timestamp_millis()
        );
        let body = self.client.http.get_text(&path).await?;
        let resp: HistoryResponse =
            serde_json::from_str(&body).map_err(DecodeError::from)?;
        Ok(PriceHistory::try_from(resp)?)
    }

    /// Like [`History::get`], but adapted to candles and sorted by end time.
    pub async fn candles(
        &self,
        currency: &str,
        exchange: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Candle>, SdkError> {
        let history = self.get(currency, exchange, from, to).await?;
        let mut candles = history.candles();
        candles.sort_by_key(Candle::end);
        Ok(candles)
    }
}
