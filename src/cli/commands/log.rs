use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        streak,
        json,
        internal,
    } = cmd
    {
        let pool = super::open_db(cfg)?;

        if *internal {
            return LogLogic::print_internal(&pool);
        }

        let entries = ListLogic::log(&pool, *streak)?;
        if *json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            LogLogic::print_entries(&entries, cfg);
        }
    }

    Ok(())
}
