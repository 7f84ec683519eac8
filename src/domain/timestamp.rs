//! Serde helpers for persisted note timestamps.
//!
//! Timestamps are written as RFC 3339 UTC strings with millisecond precision.
//! Older data may carry epoch milliseconds instead, either as a JSON number or
//! as a numeric string; both are accepted on read.

use chrono::{DateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use serde::de::{Error, Unexpected};
use serde::{Deserializer, Serializer};
use std::fmt::Formatter;

/// Precision kept in storage; values are truncated to this before persisting.
pub const SUBSEC_DIGITS: u16 = 3;

/// Format a timestamp the way it is persisted.
pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Truncate to the persisted precision.
pub fn truncate(value: DateTime<Utc>) -> DateTime<Utc> {
    value.trunc_subsecs(SUBSEC_DIGITS)
}

/// Parse either an RFC 3339 string or a string of epoch milliseconds.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    trimmed.parse::<i64>().ok().and_then(from_millis)
}

fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    struct TimestampVisitor;

    impl<'de> serde::de::Visitor<'de> for TimestampVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("an RFC 3339 timestamp or epoch milliseconds")
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            parse(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
            from_millis(v).ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v)
                .ok()
                .and_then(from_millis)
                .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
            if !v.is_finite() {
                return Err(E::invalid_value(Unexpected::Float(v), &self));
            }
            from_millis(v.trunc() as i64)
                .ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    deserializer.deserialize_any(TimestampVisitor)
}
