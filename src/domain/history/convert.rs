//! Conversions from wire types to domain types for price history.

use super::wire::{HistoryResponse, HistoryRow, EXPECTED_COLUMNS};
use super::PriceHistory;
use crate::domain::price::Price;
use crate::error::DecodeError;
use crate::shared::serde_util::datetime_from_millis;

impl TryFrom<HistoryRow> for Price {
    type Error = DecodeError;

    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        let HistoryRow(_id, timestamp_ms, _datetime, currency_pair, open, high, low, close, vol) =
            row;
        let close_date =
            datetime_from_millis(timestamp_ms).ok_or(DecodeError::InvalidTimestamp(timestamp_ms))?;
        Ok(Price {
            currency_pair,
            close,
            close_date,
            open_date: None,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            volume: Some(vol),
            exchanges: None,
            failed_exchanges: None,
        })
    }
}

impl TryFrom<HistoryResponse> for PriceHistory {
    type Error = DecodeError;

    fn try_from(resp: HistoryResponse) -> Result<Self, Self::Error> {
        if resp.columns != EXPECTED_COLUMNS {
            return Err(DecodeError::ColumnMismatch {
                found: resp.columns,
            });
        }
        let prices = resp
            .data
            .into_iter()
            .map(Price::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PriceHistory { prices })
    }
}
