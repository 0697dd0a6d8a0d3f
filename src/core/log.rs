use crate::config::Config;
use crate::db::app_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Action, LogEntry};
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// Longest reason printed before truncation.
const REASON_MAX: usize = 60;

/// ANSI colour for an audit action
fn color_for_action(action: Action) -> Colour {
    match action {
        Action::Create => Colour::Green,
        Action::Reset => Colour::Yellow,
        Action::Delete => Colour::Red,
    }
}

/// ANSI colour for an internal operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 3 >= max {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    /// Print audit entries, one per line, colour-coded by action.
    pub fn print_entries(entries: &[LogEntry], cfg: &Config) {
        if entries.is_empty() {
            println!("No audit entries.");
            return;
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let sid_w = entries
            .iter()
            .map(|e| e.streak_id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Audit log:\n");

        for e in entries {
            let date = e.timestamp.format(&cfg.timestamp_format).to_string();

            // pad before colouring: ANSI codes have no display width
            let action = format!("{:<6}", e.action.to_db_str());
            let action = color_for_action(e.action).paint(action);

            println!(
                "{:>id_w$}: {} | #{:<sid_w$} {} => {}",
                e.id,
                date,
                e.streak_id,
                action,
                truncate(&e.reason, REASON_MAX),
                id_w = id_w,
                sid_w = sid_w
            );
        }
    }

    /// Print the internal maintenance log (`app_log`).
    pub fn print_internal(pool: &DbPool) -> AppResult<()> {
        let rows = app_log::load_all(&pool.conn)?;

        if rows.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_w = rows
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = rows
            .iter()
            .map(|r| r.operation.len() + r.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(REASON_MAX);

        println!("📜 Internal log:\n");

        for r in rows {
            let op_target = if r.target.is_empty() {
                r.operation.clone()
            } else {
                format!("{} ({})", r.operation, r.target)
            };
            let visible = truncate(&op_target, op_w);
            let padding = " ".repeat(op_w.saturating_sub(visible.width()));

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&r.operation).paint(op), rest)
                }
                None => color_for_operation(&r.operation)
                    .paint(visible.as_str())
                    .to_string(),
            };

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                r.id,
                r.date,
                colored,
                padding,
                r.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
