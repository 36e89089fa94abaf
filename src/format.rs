//! Date and Time Formatting
//!
//! Conversions between the reservation API's wire formats and the formats
//! shown on screen. The API speaks `YYYY-MM-DD` dates and `HH:MM` times;
//! people read `DD/MM/YYYY`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

/// Date format sent to the backend
pub const API_DATE: &str = "%Y-%m-%d";
/// Time format sent to the backend and shown to the user
pub const TIME: &str = "%H:%M";
/// Date format shown to the user
pub const DISPLAY_DATE: &str = "%d/%m/%Y";

/// Errors produced when a date or time string cannot be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid date: {0}")]
    Date(String),

    #[error("Invalid time: {0}")]
    Time(String),
}

/// Parse a date as the API sends it.
///
/// Accepts plain `YYYY-MM-DD` as well as full RFC 3339 timestamps, which some
/// backends return for date columns.
pub fn parse_api_date(s: &str) -> Result<NaiveDate, FormatError> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, API_DATE) {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }

    s.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, API_DATE).ok())
        .ok_or_else(|| FormatError::Date(s.to_string()))
}

/// Parse a time of day (`HH:MM` or `HH:MM:SS`)
pub fn parse_api_time(s: &str) -> Result<NaiveTime, FormatError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, TIME)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| FormatError::Time(s.to_string()))
}

/// Parse a server timestamp.
///
/// RFC 3339 first, then naive date-times (treated as UTC), then bare dates at
/// midnight.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, FormatError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, API_DATE)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| FormatError::Date(s.to_string()))
}

pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE).to_string()
}

pub fn format_api_time(time: NaiveTime) -> String {
    time.format(TIME).to_string()
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE).to_string()
}

/// Calendar date of a server timestamp, for "Registrado:" / "Creada:" lines
pub fn display_timestamp_date(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|dt| display_date(dt.date_naive()))
        .unwrap_or_else(|| "-".to_string())
}

/// Serde adapter for `YYYY-MM-DD` dates
pub mod api_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_api_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_api_date(&raw).map_err(serde::de::Error::custom)
    }

    /// For optional fields in update payloads (`skip_serializing_if` handles `None`)
    pub fn serialize_opt<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Serde adapter for `HH:MM` times
pub mod api_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_api_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_api_time(&raw).map_err(serde::de::Error::custom)
    }

    pub fn serialize_opt<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serialize(t, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Serde adapter for optional, leniently formatted server timestamps
pub mod timestamp_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match ts {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(s) if !s.trim().is_empty() => super::parse_timestamp(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_api_date_plain_and_rfc3339() {
        let plain = parse_api_date("2025-03-14").unwrap();
        assert_eq!((plain.year(), plain.month(), plain.day()), (2025, 3, 14));

        let full = parse_api_date("2025-03-14T00:00:00.000Z").unwrap();
        assert_eq!(full, plain);

        assert!(parse_api_date("14/03/2025").is_err());
    }

    #[test]
    fn test_parse_api_time_with_and_without_seconds() {
        let t = parse_api_time("20:30").unwrap();
        assert_eq!((t.hour(), t.minute()), (20, 30));
        assert_eq!(parse_api_time("20:30:00").unwrap(), t);
        assert!(parse_api_time("8pm").is_err());
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let a = parse_timestamp("2025-01-02T10:11:12.000Z").unwrap();
        let b = parse_timestamp("2025-01-02T10:11:12").unwrap();
        assert_eq!(a, b);

        let midnight = parse_timestamp("2025-01-02").unwrap();
        assert_eq!(midnight.hour(), 0);
    }

    #[test]
    fn test_display_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(display_date(date), "04/07/2025");
        assert_eq!(format_api_date(date), "2025-07-04");
        assert_eq!(display_timestamp_date(None), "-");
    }
}
