use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{add_missing_fields, check_missing_fields};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if (*check || *migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {} (run `rstreaks init`)",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            let missing = check_missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing fields: {} (fix with `rstreaks config --migrate`)",
                    missing.join(", ")
                ));
            }
        }

        if *migrate {
            add_missing_fields(&path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
