pub mod action;
pub mod log_entry;
pub mod streak;

pub use action::Action;
pub use log_entry::LogEntry;
pub use streak::{DeletedStreak, Streak};
