//! Wire types for historical-price responses (REST).

use crate::shared::CurrencyPair;
use rust_decimal::Decimal;
use serde::Deserialize;

/// The exact column schema `/hist` responses must carry, in order.
///
/// Any deviation is a fatal decode error: positional rows decoded against a
/// drifted schema would silently put values in the wrong fields.
pub const EXPECTED_COLUMNS: [&str; 9] = [
    "id",
    "timestamp",
    "datetime",
    "currency_pair",
    "open",
    "high",
    "low",
    "close",
    "vol",
];

/// Raw tabular response from `/hist/{currency}/{exchange}/{start}/{end}`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub columns: Vec<String>,
    pub data: Vec<HistoryRow>,
}

/// One positional row, in [`EXPECTED_COLUMNS`] order:
/// id, timestamp-ms, datetime, currency_pair, open, high, low, close, vol.
///
/// `id` and `datetime` are type-checked here and discarded by the
/// conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRow(
    pub i64,
    pub f64,
    pub String,
    pub CurrencyPair,
    pub Decimal,
    pub Decimal,
    pub Decimal,
    pub Decimal,
    pub Decimal,
);
