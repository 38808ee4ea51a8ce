//! Wire types for current-price responses (REST).

use crate::shared::serde_util::{timestamp_ms, timestamp_ms_opt};
use crate::shared::CurrencyPair;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Raw current-price object from `/now/{currency}[/{exchange}]`.
///
/// Unknown keys (`id`, `datetime`, ...) are ignored. The backend reports
/// volume under either `vol` or `volume` depending on the endpoint; both are
/// kept here so the precedence rule lives in one place in `convert.rs`.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResponse {
    pub currency_pair: CurrencyPair,
    pub close: Decimal,
    /// Epoch milliseconds (floating point) of the quote.
    #[serde(with = "timestamp_ms")]
    pub timestamp: DateTime<Utc>,
    /// Start of the averaging window, present on averaged queries only.
    #[serde(default, with = "timestamp_ms_opt")]
    pub oldest_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub open: Option<Decimal>,
    #[serde(default)]
    pub high: Option<Decimal>,
    #[serde(default)]
    pub low: Option<Decimal>,
    #[serde(default)]
    pub vol: Option<Decimal>,
    #[serde(default)]
    pub volume: Option<Decimal>,
    #[serde(default)]
    pub exchanges: Option<Vec<String>>,
    #[serde(default)]
    pub failed_exchanges: Option<Vec<String>>,
}
