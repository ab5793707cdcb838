//! Per-command handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add HelpHandler
//! - 1.0.0: ReminderHandler (start, stop) and JournalHandler (stats, last)

pub mod help;
pub mod journal;
pub mod reminders;

use std::sync::Arc;

use super::handler::ChatCommandHandler;

/// Create all registered command handlers
pub fn create_all_handlers() -> Vec<Arc<dyn ChatCommandHandler>> {
    vec![
        Arc::new(reminders::ReminderHandler),
        Arc::new(journal::JournalHandler),
        Arc::new(help::HelpHandler),
    ]
}
