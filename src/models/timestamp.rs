//! `created_at` handling for stored documents.
//!
//! Documents written by earlier versions of the service carry either native
//! BSON dates or ISO strings without an offset, so reads accept every form
//! and treat offset-less values as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use mongodb::bson::{self, Bson};
use serde::{de::Error, Deserialize};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Bson::deserialize(deserializer)? {
        Bson::DateTime(value) => DateTime::from_timestamp_millis(value.timestamp_millis()).ok_or_else(|| D::Error::custom("date out of range")),
        Bson::Int64(millis) => DateTime::from_timestamp_millis(millis).ok_or_else(|| D::Error::custom("date out of range")),
        Bson::String(raw) => parse(&raw).ok_or_else(|| D::Error::custom(format!("unrecognised timestamp '{}'", raw))),
        other => Err(D::Error::custom(format!(
            "expected a date or timestamp string, found {:?}",
            other.element_type()
        ))),
    }
}

/// Parses RFC 3339, falling back to an ISO 8601 value without offset.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT).ok().map(|naive| naive.and_utc()))
}

pub fn to_bson(value: &DateTime<Utc>) -> Bson {
    Bson::DateTime(bson::DateTime::from_millis(value.timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn offset_less_strings_are_read_as_utc() {
        let parsed = parse("2024-05-01T12:00:00.123456").unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + chrono::Duration::microseconds(123_456);
        assert_eq!(parsed, expected);

        assert_eq!(parse("2024-05-01T12:00:00Z"), Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single());
        assert!(parse("yesterday").is_none());
    }

    #[test]
    fn bson_dates_keep_millisecond_precision() {
        let value = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + chrono::Duration::milliseconds(250);
        let Bson::DateTime(stored) = to_bson(&value) else {
            panic!("expected a BSON date");
        };
        assert_eq!(DateTime::from_timestamp_millis(stored.timestamp_millis()), Some(value));
    }
}
