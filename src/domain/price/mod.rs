//! Price domain — current spot-price records and the candle adapter.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::candle::Candle;
use crate::shared::CurrencyPair;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A decoded spot-price record.
///
/// The required fields are present for every upstream shape. The optional
/// fields are populated only by the averaged current-price query, which
/// reports the averaging window (`open_date`), OHLC over that window, and
/// which exchanges contributed; single-exchange and historical-row queries
/// leave them `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub currency_pair: CurrencyPair,
    pub close: Decimal,
    pub close_date: DateTime<Utc>,
    pub open_date: Option<DateTime<Utc>>,
    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub volume: Option<Decimal>,
    /// Exchanges that contributed to an averaged price.
    pub exchanges: Option<Vec<String>>,
    /// Exchanges that failed to respond to an averaged-price query.
    pub failed_exchanges: Option<Vec<String>>,
}

impl Price {
    /// Convert this record into a candle.
    ///
    /// `open_date` falls back to `close_date` and the missing OHLC fields to
    /// `close`, so a bare quote degenerates to a single-point candle.
    /// `None` when the record's bounds cannot form a valid candle; callers
    /// drop the point.
    pub fn to_candle(&self) -> Option<Candle> {
        Candle::new(
            self.open_date,
            self.close_date,
            self.low,
            self.high,
            self.open,
            self.close,
            self.volume.unwrap_or_default(),
        )
    }
}
