use crate::cli::parser::Commands;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::core::create::CreateLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_timestamp;

/// Create a new streak.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Create {
        title,
        start,
        last_reset,
    } = cmd
    {
        let clock = SystemClock;

        //
        // 1. Resolve dates: start defaults to now, last_reset to start
        //
        let start_date = match start {
            Some(s) => parse_timestamp(s)?,
            None => clock.now(),
        };
        let last_reset = match last_reset {
            Some(s) => parse_timestamp(s)?,
            None => start_date,
        };

        //
        // 2. Insert + audit entry
        //
        let mut pool = super::open_db(cfg)?;
        let streak = CreateLogic::apply(&mut pool, &clock, title, start_date, last_reset)?;

        success(format!(
            "Created streak #{} \"{}\" (since {})",
            streak.id,
            streak.title,
            streak.start_date.format(&cfg.date_format)
        ));
    }

    Ok(())
}
