//! Candle domain — OHLC price summaries and the merge operation.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

/// An OHLC summary of price movement over a half-open time interval, plus
/// traded volume.
///
/// Candles are immutable values with validated bounds: `start <= end`,
/// `low <= high`, and both `open` and `close` fall within `[low, high]`.
/// Construction goes through [`Candle::new`], which yields `None` instead of
/// a candle when the bounds cannot hold; callers drop the point.
///
/// Equality and hashing are structural over all fields, so there is no `Ord`
/// impl. Time-series assembly sorts explicitly by [`Candle::end`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candle {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    low: Decimal,
    high: Decimal,
    open: Decimal,
    close: Decimal,
    volume: Decimal,
}

impl Candle {
    /// Build a candle, defaulting omitted fields and validating bounds.
    ///
    /// `start` defaults to `end`; `low`, `high` and `open` default to
    /// `close`. Negative volume is clamped to zero. Returns `None` when
    /// `start > end`, `low > high`, or `open`/`close` fall outside
    /// `[low, high]`.
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: DateTime<Utc>,
        low: Option<Decimal>,
        high: Option<Decimal>,
        open: Option<Decimal>,
        close: Decimal,
        volume: Decimal,
    ) -> Option<Self> {
        let start = start.unwrap_or(end);
        let low = low.unwrap_or(close);
        let high = high.unwrap_or(close);
        let open = open.unwrap_or(close);

        if start > end || low > high || open < low || open > high || close < low || close > high {
            return None;
        }

        Some(Self {
            start,
            end,
            low,
            high,
            open,
            close,
            volume: volume.max(Decimal::ZERO),
        })
    }

    /// A single-point candle: zero-length interval, all prices at `close`.
    pub fn point(end: DateTime<Utc>, close: Decimal) -> Self {
        Self {
            start: end,
            end,
            low: close,
            high: close,
            open: close,
            close,
            volume: Decimal::ZERO,
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn low(&self) -> Decimal {
        self.low
    }

    pub fn high(&self) -> Decimal {
        self.high
    }

    pub fn open(&self) -> Decimal {
        self.open
    }

    pub fn close(&self) -> Decimal {
        self.close
    }

    pub fn volume(&self) -> Decimal {
        self.volume
    }

    /// Merge two candles into one spanning both.
    ///
    /// Interval and price range are the union, volume is the sum. `open`
    /// comes from the operand with the earlier `start`, `close` from the
    /// operand with the later `end`; on an exact tie `self` wins. Combining
    /// a candle with a structurally equal one returns it unchanged (the
    /// volumes are the same reading, not additive).
    pub fn combined(&self, other: &Candle) -> Candle {
        if self == other {
            return self.clone();
        }
        let start = self.start.min(other.start);
        let end = self.end.max(other.end);
        let low = self.low.min(other.low);
        let high = self.high.max(other.high);
        let open = if self.start <= other.start {
            self.open
        } else {
            other.open
        };
        let close = if self.end >= other.end {
            self.close
        } else {
            other.close
        };
        Candle {
            start,
            end,
            low,
            high,
            open,
            close,
            volume: self.volume + other.volume,
        }
    }

    /// Left-fold [`Candle::combined`] over a sequence of candles.
    ///
    /// `None` for empty input. Interval, price range and volume of the
    /// result do not depend on ordering; the open/close tie-break does when
    /// candles share an exact earliest start or latest end, so callers that
    /// care supply an ordered sequence.
    pub fn combine_all<I>(candles: I) -> Option<Candle>
    where
        I: IntoIterator<Item = Candle>,
    {
        candles.into_iter().reduce(|acc, c| acc.combined(&c))
    }
}

// Compact keyed encoding: `start` only when it differs from `end`,
// `low`/`high` only when they differ, `open` only when it differs from
// `close`, `volume` only when positive. Decoding re-validates through
// `Candle::new`, so the pair is lossy on which optional keys were present
// but always yields a candle with consistent bounds.

impl Serialize for Candle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let has_start = self.start != self.end;
        let has_range = self.low != self.high;
        let has_open = self.open != self.close;
        let has_volume = self.volume > Decimal::ZERO;
        let len = 2 + has_start as usize + 2 * has_range as usize + has_open as usize
            + has_volume as usize;

        let mut s = serializer.serialize_struct("Candle", len)?;
        if has_start {
            s.serialize_field("start", &rfc3339(self.start))?;
        }
        s.serialize_field("end", &rfc3339(self.end))?;
        if has_range {
            s.serialize_field("low", &self.low)?;
            s.serialize_field("high", &self.high)?;
        }
        if has_open {
            s.serialize_field("open", &self.open)?;
        }
        s.serialize_field("close", &self.close)?;
        if has_volume {
            s.serialize_field("volume", &self.volume)?;
        }
        s.end()
    }
}

fn rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl<'de> Deserialize<'de> for Candle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            #[serde(default)]
            start: Option<DateTime<Utc>>,
            end: DateTime<Utc>,
            #[serde(default)]
            low: Option<Decimal>,
            #[serde(default)]
            high: Option<Decimal>,
            #[serde(default)]
            open: Option<Decimal>,
            close: Decimal,
            #[serde(default)]
            volume: Option<Decimal>,
        }

        let r = Repr::deserialize(deserializer)?;
        Candle::new(
            r.start,
            r.end,
            r.low,
            r.high,
            r.open,
            r.close,
            r.volume.unwrap_or_default(),
        )
        .ok_or_else(|| de::Error::custom("candle bounds violated"))
    }
}

impl std::fmt::Display for Candle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn date(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn full_candle() -> Candle {
        Candle::new(
            Some(date(100)),
            date(200),
            Some(dec("10")),
            Some(dec("40")),
            Some(dec("15")),
            dec("35"),
            dec("2.5"),
        )
        .unwrap()
    }

    #[test]
    fn test_new_keeps_valid_inputs() {
        let c = full_candle();
        assert_eq!(c.start(), date(100));
        assert_eq!(c.end(), date(200));
        assert_eq!(c.low(), dec("10"));
        assert_eq!(c.high(), dec("40"));
        assert_eq!(c.open(), dec("15"));
        assert_eq!(c.close(), dec("35"));
        assert_eq!(c.volume(), dec("2.5"));
    }

    #[test]
    fn test_new_defaults_omitted_fields() {
        let c = Candle::new(None, date(200), None, None, None, dec("35"), Decimal::ZERO).unwrap();
        assert_eq!(c.start(), date(200));
        assert_eq!(c.low(), dec("35"));
        assert_eq!(c.high(), dec("35"));
        assert_eq!(c.open(), dec("35"));
        assert_eq!(c, Candle::point(date(200), dec("35")));
    }

    #[test]
    fn test_new_rejects_inverted_time_range() {
        let c = Candle::new(
            Some(date(300)),
            date(200),
            None,
            None,
            None,
            dec("35"),
            Decimal::ZERO,
        );
        assert!(c.is_none());
    }

    #[test]
    fn test_new_rejects_inverted_price_range() {
        let c = Candle::new(
            None,
            date(200),
            Some(dec("40")),
            Some(dec("10")),
            None,
            dec("20"),
            Decimal::ZERO,
        );
        assert!(c.is_none());
    }

    #[test]
    fn test_new_rejects_open_outside_range() {
        let c = Candle::new(
            None,
            date(200),
            Some(dec("10")),
            Some(dec("40")),
            Some(dec("50")),
            dec("20"),
            Decimal::ZERO,
        );
        assert!(c.is_none());
    }

    #[test]
    fn test_new_rejects_close_outside_range() {
        let c = Candle::new(
            None,
            date(200),
            Some(dec("10")),
            Some(dec("40")),
            Some(dec("20")),
            dec("5"),
            Decimal::ZERO,
        );
        assert!(c.is_none());
    }

    #[test]
    fn test_negative_volume_clamped_to_zero() {
        let c = Candle::new(None, date(200), None, None, None, dec("35"), dec("-3")).unwrap();
        assert_eq!(c.volume(), Decimal::ZERO);
    }

    #[test]
    fn test_combined_with_self_is_identity() {
        let c = full_candle();
        let combined = c.combined(&c.clone());
        assert_eq!(combined, c);
        // in particular, volume is not doubled
        assert_eq!(combined.volume(), dec("2.5"));
    }

    #[test]
    fn test_combined_spans_both() {
        let a = full_candle();
        let b = Candle::new(
            Some(date(150)),
            date(300),
            Some(dec("5")),
            Some(dec("30")),
            Some(dec("25")),
            dec("8"),
            dec("1.5"),
        )
        .unwrap();
        let c = a.combined(&b);
        assert_eq!(c.start(), date(100));
        assert_eq!(c.end(), date(300));
        assert_eq!(c.low(), dec("5"));
        assert_eq!(c.high(), dec("40"));
        // a has the earlier start, b the later end
        assert_eq!(c.open(), a.open());
        assert_eq!(c.close(), b.close());
        assert_eq!(c.volume(), dec("4.0"));
    }

    #[test]
    fn test_combined_tie_break_prefers_left_operand() {
        let a = Candle::new(
            Some(date(100)),
            date(200),
            Some(dec("10")),
            Some(dec("40")),
            Some(dec("15")),
            dec("35"),
            dec("1"),
        )
        .unwrap();
        let b = Candle::new(
            Some(date(100)),
            date(200),
            Some(dec("12")),
            Some(dec("38")),
            Some(dec("20")),
            dec("30"),
            dec("1"),
        )
        .unwrap();
        let c = a.combined(&b);
        assert_eq!(c.open(), a.open());
        assert_eq!(c.close(), a.close());
        let d = b.combined(&a);
        assert_eq!(d.open(), b.open());
        assert_eq!(d.close(), b.close());
    }

    #[test]
    fn test_combined_associative_on_range_fields() {
        let a = full_candle();
        let b = Candle::new(
            Some(date(150)),
            date(250),
            Some(dec("8")),
            Some(dec("45")),
            Some(dec("40")),
            dec("9"),
            dec("1"),
        )
        .unwrap();
        let c = Candle::new(
            Some(date(50)),
            date(120),
            Some(dec("20")),
            Some(dec("22")),
            Some(dec("21")),
            dec("22"),
            dec("0.5"),
        )
        .unwrap();

        let left = a.combined(&b).combined(&c);
        let right = a.combined(&b.combined(&c));
        assert_eq!(left.start(), right.start());
        assert_eq!(left.end(), right.end());
        assert_eq!(left.low(), right.low());
        assert_eq!(left.high(), right.high());
        assert_eq!(left.volume(), right.volume());
    }

    #[test]
    fn test_combine_all_empty_is_none() {
        assert!(Candle::combine_all(Vec::new()).is_none());
    }

    #[test]
    fn test_combine_all_singleton_is_identity() {
        let c = full_candle();
        assert_eq!(Candle::combine_all([c.clone()]), Some(c));
    }

    #[test]
    fn test_combine_all_folds_in_order() {
        let a = full_candle();
        let b = Candle::new(
            Some(date(150)),
            date(300),
            Some(dec("5")),
            Some(dec("30")),
            Some(dec("25")),
            dec("8"),
            dec("1.5"),
        )
        .unwrap();
        let merged = Candle::combine_all([a.clone(), b.clone()]).unwrap();
        assert_eq!(merged, a.combined(&b));
    }

    #[test]
    fn test_serialize_point_candle_is_minimal() {
        let c = Candle::point(date(1_600_000_000), dec("10320.4375"));
        let json = serde_json::to_value(&c).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["close"], serde_json::json!("10320.4375"));
        assert_eq!(obj["end"], serde_json::json!("2020-09-13T12:26:40Z"));
    }

    #[test]
    fn test_serialize_full_candle_has_all_keys() {
        let json = serde_json::to_value(full_candle()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["start", "end", "low", "high", "open", "close", "volume"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_serialize_omits_zero_volume() {
        let c = Candle::new(
            Some(date(100)),
            date(200),
            Some(dec("10")),
            Some(dec("40")),
            Some(dec("15")),
            dec("35"),
            Decimal::ZERO,
        )
        .unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert!(!json.as_object().unwrap().contains_key("volume"));
    }

    #[test]
    fn test_roundtrip_recovers_valid_candle() {
        let c = full_candle();
        let json = serde_json::to_string(&c).unwrap();
        let back: Candle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_deserialize_rejects_violated_bounds() {
        let json = r#"{"end":"2020-09-13T12:26:40Z","low":"40","high":"10","close":"20"}"#;
        assert!(serde_json::from_str::<Candle>(json).is_err());
    }

    #[test]
    fn test_display_is_json() {
        let c = Candle::point(date(1_600_000_000), dec("42"));
        let shown = c.to_string();
        let parsed: serde_json::Value = serde_json::from_str(&shown).unwrap();
        assert_eq!(parsed["close"], serde_json::json!("42"));
    }
}
