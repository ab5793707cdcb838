//! # Journal Feature
//!
//! Durable record of check-in replies.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod entry;
pub mod storage;
pub mod store;

pub use entry::JournalEntry;
pub use storage::{FileStorage, JournalStorage, MemoryStorage};
pub use store::{JournalStats, JournalStore};
