//! Status domain — server liveness probe.

#[cfg(feature = "http")]
pub mod client;

/// The exact body a healthy server returns from `/status` (a JSON string).
pub const SERVER_RUNNING: &str = "server is running";

/// Decode a raw `/status` body into a running flag.
///
/// Only the exact string [`SERVER_RUNNING`] means running. Any other
/// string, a non-string body, or an unparsable body all read as "not
/// running"; this decoder never errors.
pub fn is_running_response(raw: &str) -> bool {
    serde_json::from_str::<String>(raw)
        .map(|s| s == SERVER_RUNNING)
        .unwrap_or(false)
}
