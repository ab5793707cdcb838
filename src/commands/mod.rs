//! # Command System
//!
//! `/command` handling for chat messages.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add /help
//! - 1.0.0: Handler trait, registry and context for start, stop, stats, last

pub mod context;
pub mod handler;
pub mod handlers;
pub mod messages;
pub mod registry;

// Re-export the CommandHandler from the handler module
pub use crate::command_handler::{parse_command, CommandHandler};

pub use context::{CommandContext, CompanionSettings};
pub use handler::ChatCommandHandler;
pub use registry::CommandRegistry;
