use crate::cli::parser::Commands;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { id, reason } = cmd {
        let mut pool = super::open_db(cfg)?;

        // a missing --reason reaches the logic as "" and is rejected there
        let streak = ResetLogic::apply(
            &mut pool,
            &SystemClock,
            *id,
            reason.as_deref().unwrap_or(""),
        )?;

        success(format!(
            "Streak #{} \"{}\" reset at {}",
            streak.id,
            streak.title,
            streak.last_reset.format(&cfg.timestamp_format)
        ));
    }

    Ok(())
}
