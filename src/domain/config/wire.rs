//! Wire types for configuration responses (REST).

use serde::Deserialize;

/// Raw configuration object from `/configure`.
///
/// The backend uses spaced key names and a literal-string boolean; the
/// conversion normalizes both.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigurationResponse {
    pub currencies: Vec<String>,
    #[serde(rename = "cached exchanges")]
    pub cached_exchanges: Vec<String>,
    #[serde(rename = "on demand exchanges")]
    pub on_demand_exchanges: Vec<String>,
    pub interval: u32,
    #[serde(rename = "keepWeeks")]
    pub keep_weeks: u32,
    /// `"yes"` means true; any other value or absence means false.
    #[serde(rename = "updated settings?", default)]
    pub updated_settings: Option<String>,
}
