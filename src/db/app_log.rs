//! Internal maintenance log (init, applied migrations).
//!
//! This is not the streak audit log: nothing here is part of a lifecycle
//! transaction, and the rows are only meant for troubleshooting.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

#[derive(Debug, Clone)]
pub struct AppLogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `app_log` table.
pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO app_log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<AppLogRow>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, date, operation, target, message FROM app_log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(AppLogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
