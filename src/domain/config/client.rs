//! Config sub-client — service configuration fetch.

use crate::client::SpotBitClient;
use crate::domain::config::wire::ConfigurationResponse;
use crate::domain::config::Configuration;
use crate::error::{DecodeError, SdkError};

/// Sub-client for configuration operations.
pub struct Config<'a> {
    pub(crate) client: &'a SpotBitClient,
}

impl<'a> Config<'a> {
    /// Fetch the service's advertised configuration.
    pub async fn get(&self) -> Result<Configuration, SdkError> {
        let body = self.client.http.get_text("/configure").await?;
        let resp: ConfigurationResponse =
            serde_json::from_str(&body).map_err(DecodeError::from)?;
        Ok(resp.into())
    }
}
