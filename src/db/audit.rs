//! Audit log: append-only `logs` table.
//!
//! No update or delete exists here; the schema also rejects
//! both with triggers.

use crate::db::db_utils::{ts_from_db, ts_to_db};
use crate::errors::AppError;
use crate::errors::AppResult;
use crate::models::{Action, LogEntry};
use chrono::{DateTime, FixedOffset};
use rusqlite::types::Type;
use rusqlite::{Connection, Row, params};

const SELECT_ENTRY: &str = "SELECT id, streak_id, action, timestamp, reason FROM logs";

pub fn map_row(row: &Row) -> rusqlite::Result<LogEntry> {
    let action_str: String = row.get(2)?;
    let action = Action::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            Box::new(AppError::InvalidAction(action_str.clone())),
        )
    })?;

    Ok(LogEntry {
        id: row.get(0)?,
        streak_id: row.get(1)?,
        action,
        timestamp: ts_from_db(3, row.get(3)?)?,
        reason: row.get(4)?,
    })
}

pub fn append(
    conn: &Connection,
    streak_id: i64,
    action: Action,
    timestamp: DateTime<FixedOffset>,
    reason: &str,
) -> AppResult<LogEntry> {
    conn.prepare_cached(
        "INSERT INTO logs (streak_id, action, timestamp, reason)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![
        streak_id,
        action.to_db_str(),
        ts_to_db(&timestamp),
        reason
    ])?;

    Ok(LogEntry {
        id: conn.last_insert_rowid(),
        streak_id,
        action,
        timestamp,
        reason: reason.to_string(),
    })
}

fn collect(conn: &Connection, sql: &str, streak_id: Option<i64>) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = match streak_id {
        Some(id) => stmt.query_map([id], map_row)?,
        None => stmt.query_map([], map_row)?,
    };

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// History of one streak, oldest first. Works for deleted streaks too.
pub fn list_for(conn: &Connection, streak_id: i64) -> AppResult<Vec<LogEntry>> {
    collect(
        conn,
        &format!("{SELECT_ENTRY} WHERE streak_id = ?1 ORDER BY id ASC"),
        Some(streak_id),
    )
}

/// Every entry, oldest first.
pub fn list_all(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    collect(conn, &format!("{SELECT_ENTRY} ORDER BY id ASC"), None)
}

/// Number of entries per action, in `create, reset, delete` order.
pub fn count_by_action(conn: &Connection) -> AppResult<Vec<(Action, i64)>> {
    let mut out = Vec::new();
    for action in [Action::Create, Action::Reset, Action::Delete] {
        let n: i64 = conn.query_row(
            "SELECT COUNT(*) FROM logs WHERE action = ?1",
            [action.to_db_str()],
            |row| row.get(0),
        )?;
        out.push((action, n));
    }
    Ok(out)
}
