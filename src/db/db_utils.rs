use crate::errors::AppError;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use rusqlite::types::Type;

/// Timestamp → stored TEXT (RFC 3339, seconds precision kept as written).
pub fn ts_to_db(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Stored TEXT → timestamp, reported as a conversion failure on column `idx`.
pub fn ts_from_db(idx: usize, raw: String) -> rusqlite::Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(&raw).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

/// True if a table named `name` exists.
pub fn table_exists(conn: &rusqlite::Connection, name: &str) -> rusqlite::Result<bool> {
    use rusqlite::OptionalExtension;

    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
