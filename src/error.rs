//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Response-decoding errors.
///
/// Surfaced to the immediate caller; nothing at this layer retries or
/// silently recovers. Candle bound violations are NOT decode errors; the
/// candle constructor represents them as absence (`Option::None`).
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Mismatch of expected columns: {found:?}")]
    ColumnMismatch { found: Vec<String> },

    #[error("Invalid millisecond timestamp: {0}")]
    InvalidTimestamp(f64),
}
