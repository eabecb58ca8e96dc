//! Shared deserialization helpers for loosely-typed API payloads.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

const LOG_TARGET: &str = "    models";

/// Timestamp layout used by SSC, which writes offsets without a colon (`+0000`).
const SSC_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Treat an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an optional timestamp, accepting both RFC 3339 and the SSC offset form.
///
/// A value that matches neither layout is dropped rather than failing the whole record.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(parse_timestamp(&text))
}

pub fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_str(text, SSC_TIMESTAMP_FORMAT))
        .inspect_err(|e| log::debug!(target: LOG_TARGET, "Ignoring unparseable timestamp '{text}': {e}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let ts = parse_timestamp("2024-03-05T14:07:09Z").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 3, 5));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (14, 7, 9));
    }

    #[test]
    fn test_parse_timestamp_ssc_offset() {
        let ts = parse_timestamp("2024-03-05T14:07:09.123+0200").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(ts.hour(), 14);
    }

    #[test]
    fn test_parse_timestamp_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
