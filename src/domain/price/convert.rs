//! Conversions from wire types to domain types for prices.

use super::wire::PriceResponse;
use super::Price;

impl From<PriceResponse> for Price {
    fn from(r: PriceResponse) -> Self {
        Self {
            currency_pair: r.currency_pair,
            close: r.close,
            close_date: r.timestamp,
            open_date: r.oldest_timestamp,
            open: r.open,
            high: r.high,
            low: r.low,
            // `vol` wins when the backend sends both keys
            volume: r.vol.or(r.volume),
            exchanges: r.exchanges,
            failed_exchanges: r.failed_exchanges,
        }
    }
}
