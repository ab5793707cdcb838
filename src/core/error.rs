//! Error kinds raised by the journal and delivery collaborators
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::core::conversation::ConversationId;
use thiserror::Error;

/// Failures of the journal store
///
/// Read failures are recoverable (callers of `load_all` see an empty journal),
/// write failures mean the entry was not recorded.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("journal storage could not be read: {0}")]
    StorageRead(String),

    #[error("journal storage could not be written: {0}")]
    StorageWrite(String),
}

/// A message could not be delivered to a conversation
#[derive(Debug, Error)]
#[error("delivery to conversation {conversation_id} failed: {reason}")]
pub struct DeliveryError {
    pub conversation_id: ConversationId,
    pub reason: String,
}

impl DeliveryError {
    pub fn new(conversation_id: ConversationId, reason: impl Into<String>) -> Self {
        Self {
            conversation_id,
            reason: reason.into(),
        }
    }
}
