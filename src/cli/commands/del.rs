use crate::cli::parser::Commands;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::log::LogLogic;
use crate::db::streaks;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, reason, yes } = cmd {
        let mut pool = super::open_db(cfg)?;

        //
        // Confirmation prompt (the streak must exist to be named in it)
        //
        if !*yes {
            let streak = streaks::get(&pool.conn, *id)?;
            let prompt = format!(
                "Delete streak #{} \"{}\"? Its history is kept, the streak is not.",
                streak.id, streak.title
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let deleted = DeleteLogic::apply(&mut pool, &SystemClock, *id, reason.as_deref())?;

        success(format!(
            "Streak #{} \"{}\" has been deleted.",
            deleted.streak.id, deleted.streak.title
        ));

        if cfg.show_log_on_delete {
            println!();
            LogLogic::print_entries(&deleted.log, cfg);
        }
    }

    Ok(())
}
