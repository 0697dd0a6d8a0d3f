//! Streak store: the current-state `streaks` table.
//!
//! Every function takes a plain `&Connection` so it can run either on its
//! own or inside a lifecycle transaction (`Transaction` derefs to it).

use crate::db::db_utils::{ts_from_db, ts_to_db};
use crate::errors::{AppError, AppResult};
use crate::models::Streak;
use chrono::{DateTime, FixedOffset};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_STREAK: &str = "SELECT id, title, start_date, last_reset FROM streaks";

pub fn map_row(row: &Row) -> rusqlite::Result<Streak> {
    Ok(Streak {
        id: row.get(0)?,
        title: row.get(1)?,
        start_date: ts_from_db(2, row.get(2)?)?,
        last_reset: ts_from_db(3, row.get(3)?)?,
    })
}

/// Check the fields of a streak about to be created.
///
/// Returns the trimmed title.
pub fn validate_new(
    title: &str,
    start_date: &DateTime<FixedOffset>,
    last_reset: &DateTime<FixedOffset>,
) -> AppResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    if last_reset < start_date {
        return Err(AppError::Validation(format!(
            "last_reset ({}) is before start_date ({})",
            ts_to_db(last_reset),
            ts_to_db(start_date)
        )));
    }
    Ok(title.to_string())
}

pub fn insert(
    conn: &Connection,
    title: &str,
    start_date: DateTime<FixedOffset>,
    last_reset: DateTime<FixedOffset>,
) -> AppResult<Streak> {
    let title = validate_new(title, &start_date, &last_reset)?;

    conn.prepare_cached(
        "INSERT INTO streaks (title, start_date, last_reset)
         VALUES (?1, ?2, ?3)",
    )?
    .execute(params![title, ts_to_db(&start_date), ts_to_db(&last_reset)])?;

    Ok(Streak {
        id: conn.last_insert_rowid(),
        title,
        start_date,
        last_reset,
    })
}

/// All current streaks, in insertion order.
pub fn list(conn: &Connection) -> AppResult<Vec<Streak>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_STREAK} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find(conn: &Connection, id: i64) -> AppResult<Option<Streak>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_STREAK} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Streak> {
    find(conn, id)?.ok_or(AppError::NotFound(id))
}

/// Set `last_reset`, leaving every other column untouched.
pub fn update_last_reset(conn: &Connection, id: i64, ts: DateTime<FixedOffset>) -> AppResult<()> {
    let changed = conn
        .prepare_cached("UPDATE streaks SET last_reset = ?1 WHERE id = ?2")?
        .execute(params![ts_to_db(&ts), id])?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

/// Remove the row. Deleting an absent id is an error, not a no-op.
pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn
        .prepare_cached("DELETE FROM streaks WHERE id = ?1")?
        .execute([id])?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM streaks", [], |row| row.get(0))?)
}
