use crate::clock::Clock;
use crate::db::pool::DbPool;
use crate::db::{audit, streaks};
use crate::errors::{AppError, AppResult};
use crate::models::{Action, Streak};

pub struct ResetLogic;

impl ResetLogic {
    /// Move `last_reset` to now and append a `reset` entry with `reason`.
    ///
    /// `last_reset` never moves backwards: if the clock reads earlier than
    /// the stored value (future start date, clock skew) the stored value is
    /// kept and logged again.
    pub fn apply(
        pool: &mut DbPool,
        clock: &impl Clock,
        id: i64,
        reason: &str,
    ) -> AppResult<Streak> {
        pool.write_tx(|tx| {
            let mut streak = streaks::get(tx, id)?;

            let reason = reason.trim();
            if reason.is_empty() {
                return Err(AppError::Validation("a reset requires a non-empty reason".into()));
            }

            let at = clock.now().max(streak.last_reset);
            streaks::update_last_reset(tx, id, at)?;
            audit::append(tx, id, Action::Reset, at, reason)?;

            streak.last_reset = at;
            Ok(streak)
        })
    }
}
