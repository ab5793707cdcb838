//! # Core Module
//!
//! Shared types, collaborator seams, configuration and error kinds.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add Clock seam for timestamping and windowed journal queries
//! - 1.0.0: Initial creation with config, delivery and response modules

pub mod clock;
pub mod config;
pub mod conversation;
pub mod delivery;
pub mod error;
pub mod response;

// Re-export commonly used items
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use conversation::ConversationId;
pub use delivery::Delivery;
pub use error::{DeliveryError, JournalError};
pub use response::{chunk_for_message, chunk_text, MESSAGE_LIMIT};
