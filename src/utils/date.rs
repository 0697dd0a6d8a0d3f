use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Parse a user-supplied timestamp.
///
/// Accepted forms:
/// - RFC 3339 (`2025-01-01T08:30:00+01:00`)
/// - `YYYY-MM-DD HH:MM` in the local timezone
/// - `YYYY-MM-DD` → local midnight
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<FixedOffset>> {
    parse_timestamp_in(s, &Local)
}

/// Same as [`parse_timestamp`], resolving zone-less input in `tz`.
pub fn parse_timestamp_in<Tz: TimeZone>(s: &str, tz: &Tz) -> AppResult<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AppError::Validation("date must not be empty".into()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    let naive = if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        dt
    } else if let Some(d) = parse_date(s) {
        d.and_hms_opt(0, 0, 0)
            .ok_or_else(|| AppError::InvalidDate(s.to_string()))?
    } else {
        return Err(AppError::InvalidDate(s.to_string()));
    };

    // earliest(): on a DST fold take the first instant; a gap has none
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
