use crate::clock::Clock;
use crate::db::pool::DbPool;
use crate::db::{audit, streaks};
use crate::errors::AppResult;
use crate::models::{Action, Streak};
use chrono::{DateTime, FixedOffset};

/// High-level business logic for the `create` command.
pub struct CreateLogic;

impl CreateLogic {
    /// Insert a streak and its `create` audit entry as one unit.
    ///
    /// The entry's reason is the title, so the history still says what was
    /// created once the row is gone.
    pub fn apply(
        pool: &mut DbPool,
        clock: &impl Clock,
        title: &str,
        start_date: DateTime<FixedOffset>,
        last_reset: DateTime<FixedOffset>,
    ) -> AppResult<Streak> {
        // Reject bad input before any lock is taken
        streaks::validate_new(title, &start_date, &last_reset)?;

        pool.write_tx(|tx| {
            let streak = streaks::insert(tx, title, start_date, last_reset)?;
            audit::append(tx, streak.id, Action::Create, clock.now(), &streak.title)?;
            Ok(streak)
        })
    }
}
