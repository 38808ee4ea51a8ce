//! # SpotBit SDK
//!
//! A Rust SDK for the SpotBit Bitcoin spot-price aggregation service.
//!
//! SpotBit serves current and historical OHLC price data for currency pairs,
//! aggregated from upstream exchanges. The public instance is reachable as a
//! Tor onion service; the client takes an optional SOCKS5 proxy so the whole
//! transport rides an anonymizing circuit.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Candle model, wire decoders, domain types (no I/O)
//! 2. **HTTP API** — `SpotBitHttp`, a thin proxied `reqwest` wrapper
//! 3. **High-Level Client** — `SpotBitClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spotbit_sdk::prelude::*;
//!
//! let client = SpotBitClient::builder()
//!     .socks_proxy(Some(DEFAULT_TOR_PROXY))
//!     .build()?;
//!
//! let running = client.status().is_server_running().await?;
//! let price = client.prices().average("USD").await?;
//! let candle = price.to_candle();
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and serde helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client over an optional SOCKS5 (Tor) proxy.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `SpotBitClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::CurrencyPair;

    // Domain types
    pub use crate::domain::candle::Candle;
    pub use crate::domain::config::Configuration;
    pub use crate::domain::history::PriceHistory;
    pub use crate::domain::price::Price;

    // Errors
    pub use crate::error::{DecodeError, HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TOR_PROXY};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        ConfigClient, HistoryClient, PricesClient, SpotBitClient, SpotBitClientBuilder,
        StatusClient,
    };
}
