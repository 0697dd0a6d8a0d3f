use crate::db::pool::DbPool;
use crate::db::{audit, streaks};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) CURRENT STREAKS
    //
    let count = streaks::count(&pool.conn)?;
    println!(
        "{}• Active streaks:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) AUDIT ENTRIES PER ACTION
    //
    println!("{}• Audit entries:{}", CYAN, RESET);
    for (action, n) in audit::count_by_action(&pool.conn)? {
        println!("    {:<7} {}", action.to_db_str(), n);
    }

    //
    // 4) HISTORY RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT timestamp FROM logs ORDER BY id ASC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM logs ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• History range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
