//! Conversions from wire types to domain types for configuration.

use super::wire::ConfigurationResponse;
use super::Configuration;

impl From<ConfigurationResponse> for Configuration {
    fn from(r: ConfigurationResponse) -> Self {
        Self {
            currencies: r.currencies,
            cached_exchanges: r.cached_exchanges,
            on_demand_exchanges: r.on_demand_exchanges,
            interval_seconds: r.interval,
            keep_weeks: r.keep_weeks,
            is_updated_settings: r.updated_settings.as_deref() == Some("yes"),
        }
    }
}
