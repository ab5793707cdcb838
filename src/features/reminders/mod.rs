//! # Reminders Feature
//!
//! Recurring check-in prompts, one cadence per conversation.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 2.0.0: Per-conversation cadences with cancellation tokens instead of a shared polling loop

pub mod scheduler;

pub use scheduler::{ReminderScheduler, CHECK_IN_PROMPT, DEFAULT_INTERVAL};
