use crate::cli::parser::Commands;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::models::Streak;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_days};
use crate::utils::days_label;
use crate::utils::table::{Column, Table};
use serde::Serialize;

/// JSON row: the stored streak plus its derived day count.
#[derive(Serialize)]
struct StreakView<'a> {
    #[serde(flatten)]
    streak: &'a Streak,
    days: i64,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let pool = super::open_db(cfg)?;
        let streaks = ListLogic::streaks(&pool)?;
        let now = SystemClock.now();

        if *json {
            let views: Vec<StreakView> = streaks
                .iter()
                .map(|s| StreakView {
                    streak: s,
                    days: s.days_since_reset(now),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
            return Ok(());
        }

        if streaks.is_empty() {
            println!("No streaks yet. Create one with `rstreaks create <TITLE>`.");
            return Ok(());
        }

        header("Your streaks");

        let mut table = Table::new(vec![
            Column::right("ID"),
            Column::left("Title"),
            Column::left("Start"),
            Column::left("Last reset"),
            Column::right("Streak"),
        ]);

        for s in &streaks {
            table.add_row(vec![
                s.id.to_string(),
                s.title.clone(),
                s.start_date.format(&cfg.date_format).to_string(),
                s.last_reset.format(&cfg.date_format).to_string(),
                days_label(s.days_since_reset(now)),
            ]);
        }

        // colour the day counts after layout: ANSI codes would skew widths
        let rendered = table.render();
        for (i, line) in rendered.lines().enumerate() {
            match i.checked_sub(2).and_then(|r| streaks.get(r)) {
                Some(s) => println!(
                    "{}{}{}",
                    color_for_days(s.days_since_reset(now)),
                    line,
                    RESET
                ),
                None => println!("{line}"),
            }
        }
    }

    Ok(())
}
