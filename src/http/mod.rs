//! HTTP client layer — `SpotBitHttp` over an optional SOCKS5 (Tor) proxy.

pub mod client;

pub use client::SpotBitHttp;
