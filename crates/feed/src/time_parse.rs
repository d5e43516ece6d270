// ABOUTME: Publish time resolution for raw playlist entries.
// ABOUTME: Chooses between epoch timestamp, release timestamp, and YYYYMMDD upload date.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::raw::RawEntry;

/// Interprets a Unix timestamp in seconds. Zero and negative values are treated as missing.
pub fn parse_epoch_seconds(ts: Option<i64>) -> Option<DateTime<Utc>> {
    match ts {
        Some(secs) if secs > 0 => Utc.timestamp_opt(secs, 0).single(),
        _ => None,
    }
}

/// Parses a `YYYYMMDD` upload date to midnight UTC.
pub fn parse_upload_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Resolves when an entry was published.
///
/// Priority: `timestamp`, then `release_timestamp`, then `upload_date`.
/// Returns None when no source yields a usable value.
pub fn published_at(entry: &RawEntry) -> Option<DateTime<Utc>> {
    parse_epoch_seconds(entry.timestamp)
        .or_else(|| parse_epoch_seconds(entry.release_timestamp))
        .or_else(|| entry.upload_date.as_deref().and_then(parse_upload_date))
}
