// Core layer - shared types, collaborator seams and configuration
pub mod core;

// Features layer - journal and reminders
pub mod features;

// Transport layer - Discord delivery
pub mod transport;

// Application layer
pub mod command_handler;
pub mod commands;

pub use crate::core::Config;

pub use crate::features::{JournalEntry, JournalStats, JournalStore, ReminderScheduler};

pub use crate::commands::{CommandContext, CommandHandler, CompanionSettings};
pub use crate::transport::DiscordDelivery;
