use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    /// en-US short month + day, e.g. "Jan 5"
    pub const MONTH_DAY_FORMAT: &str = "%b %-d";
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    /// ISO-8601 date-time without an offset, optional fractional seconds
    pub const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
}

/// Epoch milliseconds to a UTC datetime. `None` outside chrono's range.
pub fn epoch_ms_to_datetime(epoch_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(epoch_ms)
}

/// Axis label for a timestamp, rendered in the given time zone.
pub fn month_day_label<Tz>(epoch_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match epoch_ms_to_datetime(epoch_ms) {
        Some(dt) => dt
            .with_timezone(tz)
            .format(TimeUtils::MONTH_DAY_FORMAT)
            .to_string(),
        None => String::new(),
    }
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    match epoch_ms_to_datetime(epoch_ms) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Parses an ISO-8601 timestamp. RFC 3339 keeps its offset; a date-time
/// without offset, or a bare date, is read as UTC.
pub fn parse_iso8601_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, TimeUtils::NAIVE_DATE_TIME_FORMAT) {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, TimeUtils::STANDARD_TIME_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn utc_now_as_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}
