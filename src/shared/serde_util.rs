//! Custom serde helpers for backend wire formats.

use chrono::{DateTime, Utc};

/// Converts a millisecond epoch to `DateTime<Utc>`.
///
/// The backend emits timestamps as floating-point milliseconds (e.g.
/// `1600007951358.48`); going through nanoseconds keeps the sub-millisecond
/// fraction. `None` for non-finite input.
pub fn datetime_from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    Some(DateTime::from_timestamp_nanos((millis * 1_000_000.0) as i64))
}

/// Deserializes a millisecond-epoch `f64` into `DateTime<Utc>`.
///
/// SpotBit sends `timestamp` as epoch milliseconds (floating point), not
/// ISO 8601 strings.
pub mod timestamp_ms {
    use super::datetime_from_millis;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = f64::deserialize(deserializer)?;
        datetime_from_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))
    }
}

/// `Option` variant of [`timestamp_ms`] for keys that may be absent
/// (`oldest_timestamp`).
pub mod timestamp_ms_opt {
    use super::datetime_from_millis;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<f64>::deserialize(deserializer)? {
            Some(millis) => datetime_from_millis(millis)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis))),
            None => Ok(None),
        }
    }
}
