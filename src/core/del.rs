use crate::clock::Clock;
use crate::db::pool::DbPool;
use crate::db::{audit, streaks};
use crate::errors::AppResult;
use crate::models::{Action, DeletedStreak};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Log the deletion, then remove the row, in one transaction.
    ///
    /// A blank or missing `reason` falls back to the streak title. The
    /// returned history includes the new `delete` entry.
    pub fn apply(
        pool: &mut DbPool,
        clock: &impl Clock,
        id: i64,
        reason: Option<&str>,
    ) -> AppResult<DeletedStreak> {
        pool.write_tx(|tx| {
            let streak = streaks::get(tx, id)?;

            let reason = reason
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .unwrap_or(streak.title.as_str());

            // Entry first: it must never be missing for a row that is gone
            audit::append(tx, id, Action::Delete, clock.now(), reason)?;
            streaks::delete(tx, id)?;

            let log = audit::list_for(tx, id)?;
            Ok(DeletedStreak { streak, log })
        })
    }
}
