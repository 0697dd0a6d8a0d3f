use super::action::Action;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One immutable row of the audit log.
///
/// `streak_id` is a weak reference: after a delete the streak row is gone
/// but its entries stay.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,
    pub streak_id: i64,
    pub action: Action,
    pub timestamp: DateTime<FixedOffset>,
    pub reason: String,
}
