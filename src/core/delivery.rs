//! Outbound message delivery seam
//!
//! The reminder scheduler and the command layer only ever talk to chats
//! through this trait, so the transport can be swapped (Discord, tests).
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::core::conversation::ConversationId;
use crate::core::error::DeliveryError;
use async_trait::async_trait;

/// Sends text to a conversation
#[async_trait]
pub trait Delivery: Send + Sync {
    async fn deliver(&self, conversation_id: ConversationId, text: &str)
        -> Result<(), DeliveryError>;
}
