//! # Features Layer
//!
//! - **journal**: durable record of check-in replies
//! - **reminders**: recurring check-in prompts per conversation

pub mod journal;
pub mod reminders;

pub use journal::{JournalEntry, JournalStats, JournalStore};
pub use reminders::ReminderScheduler;

/// Bot version from Cargo.toml
pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
