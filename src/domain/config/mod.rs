//! Config domain — service configuration reported by `/configure`.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// The service's advertised configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Currency codes the service quotes against (e.g. `"USD"`).
    pub currencies: Vec<String>,
    /// Exchanges polled continuously and served from the service's store.
    pub cached_exchanges: Vec<String>,
    /// Exchanges queried upstream only when a request asks for them.
    pub on_demand_exchanges: Vec<String>,
    /// Polling interval for cached exchanges, in seconds.
    pub interval_seconds: u32,
    /// How many weeks of history the service retains.
    pub keep_weeks: u32,
    /// Whether the server reports its settings as recently updated.
    pub is_updated_settings: bool,
}
