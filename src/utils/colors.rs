/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Streak length color:
/// 0 → grey (just reset)
/// \>= 30 → green
/// otherwise → reset
pub fn color_for_days(days: i64) -> &'static str {
    if days == 0 {
        GREY
    } else if days >= 30 {
        GREEN
    } else {
        RESET
    }
}
