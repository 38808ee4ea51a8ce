//! Low-level HTTP client — `SpotBitHttp`.
//!
//! One raw GET per request; bodies are decoded by the domain slices so that
//! decode failures surface through the decode error taxonomy rather than
//! the transport's. Internal to the SDK — the high-level client wraps this.

use crate::error::HttpError;

use reqwest::Client;
use std::time::Duration;

/// Low-level HTTP client for the SpotBit REST API.
///
/// Circuit setup and authentication of the anonymizing transport live
/// outside this crate; this client only routes requests through whatever
/// SOCKS5 proxy it is handed.
#[derive(Clone)]
pub struct SpotBitHttp {
    base_url: String,
    client: Client,
}

impl SpotBitHttp {
    pub fn new(
        base_url: &str,
        socks_proxy: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder().timeout(timeout).pool_max_idle_per_host(10);
        if let Some(proxy) = socks_proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    /// GET `path` and return the raw response body.
    pub(crate) async fn get_text(&self, path: &str) -> Result<String, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.text().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status_code, "request failed");

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
