//! Status sub-client — server liveness check.

use crate::client::SpotBitClient;
use crate::domain::status::is_running_response;
use crate::error::SdkError;

/// Sub-client for status operations.
pub struct Status<'a> {
    pub(crate) client: &'a SpotBitClient,
}

impl<'a> Status<'a> {
    /// Whether the server reports itself as running.
    ///
    /// Transport failures propagate; an unexpected body reads as `false`.
    pub async fn is_server_running(&self) -> Result<bool, SdkError> {
        let body = self.client.http.get_text("/status").await?;
        Ok(is_running_response(&body))
    }
}
