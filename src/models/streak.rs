use super::log_entry::LogEntry;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Streak {
    pub id: i64,
    pub title: String,                    // ⇔ streaks.title (immutable)
    pub start_date: DateTime<FixedOffset>, // ⇔ streaks.start_date (RFC 3339)
    pub last_reset: DateTime<FixedOffset>, // ⇔ streaks.last_reset (RFC 3339)
}

impl Streak {
    /// Whole days elapsed since the last reset, never negative.
    ///
    /// This is the value the UI shows as the streak "count"; it is derived
    /// on read and never stored.
    pub fn days_since_reset(&self, now: DateTime<FixedOffset>) -> i64 {
        (now - self.last_reset).num_days().max(0)
    }
}

/// Outcome of a delete: the row as it was, plus its full history
/// (the `delete` entry included).
#[derive(Debug, Clone, Serialize)]
pub struct DeletedStreak {
    pub streak: Streak,
    pub log: Vec<LogEntry>,
}
