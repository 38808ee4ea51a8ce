//! History domain — tabular historical price series.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::candle::Candle;
use crate::domain::price::Price;
use serde::{Deserialize, Serialize};

/// A decoded historical price series, in upstream row order.
///
/// The decoder preserves the order the backend sent; callers assembling a
/// time series sort explicitly, e.g.
/// `candles.sort_by_key(Candle::end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub prices: Vec<Price>,
}

impl PriceHistory {
    /// Convert every price into a candle, dropping records whose bounds
    /// cannot form one.
    ///
    /// A lossy filter: the result may be shorter than `prices`, never an
    /// error.
    pub fn candles(&self) -> Vec<Candle> {
        self.prices.iter().filter_map(Price::to_candle).collect()
    }
}
