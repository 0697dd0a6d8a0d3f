use crate::db::pool::DbPool;
use crate::db::{audit, streaks};
use crate::errors::AppResult;
use crate::models::{LogEntry, Streak};

/// Read-only queries; they never open a write transaction.
pub struct ListLogic;

impl ListLogic {
    pub fn streaks(pool: &DbPool) -> AppResult<Vec<Streak>> {
        streaks::list(&pool.conn)
    }

    /// Audit entries for one streak (live or deleted), or all of them.
    pub fn log(pool: &DbPool, streak_id: Option<i64>) -> AppResult<Vec<LogEntry>> {
        match streak_id {
            Some(id) => audit::list_for(&pool.conn, id),
            None => audit::list_all(&pool.conn),
        }
    }
}
