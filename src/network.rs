//! Network URL constants for the SpotBit SDK.

/// Default API base URL — the public SpotBit onion service.
///
/// Only resolvable through a Tor SOCKS proxy; see [`DEFAULT_TOR_PROXY`].
pub const DEFAULT_API_URL: &str =
    "http://h6zwwkcivy2hjys6xpinlnz2f74dsmvltzsd4xb42vinhlcaoe7fdeqd.onion";

/// Default local Tor SOCKS5 proxy.
///
/// `socks5h` so hostname resolution happens inside the circuit, which onion
/// addresses require.
pub const DEFAULT_TOR_PROXY: &str = "socks5h://127.0.0.1:9050";
