//! Formatting utilities used for CLI outputs.

/// "1 day", "12 days"
pub fn days_label(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}
