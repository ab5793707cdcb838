//! # Discord Transport
//!
//! Delivers check-ins and replies to Discord channels through serenity's
//! HTTP client. A conversation is a Discord channel (guild text channel or DM).
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::core::{chunk_for_message, ConversationId, Delivery, DeliveryError};
use async_trait::async_trait;
use log::debug;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;

impl From<ChannelId> for ConversationId {
    fn from(channel_id: ChannelId) -> Self {
        // Snowflakes fit in 63 bits, the cast is lossless both ways
        ConversationId(channel_id.0 as i64)
    }
}

/// Channel a conversation maps back to
pub fn channel_for(conversation_id: ConversationId) -> ChannelId {
    ChannelId(conversation_id.get() as u64)
}

pub struct DiscordDelivery {
    http: Arc<Http>,
}

impl DiscordDelivery {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Delivery for DiscordDelivery {
    async fn deliver(
        &self,
        conversation_id: ConversationId,
        text: &str,
    ) -> Result<(), DeliveryError> {
        let channel_id = channel_for(conversation_id);

        // Discord rejects empty messages
        for chunk in chunk_for_message(text)
            .into_iter()
            .filter(|chunk| !chunk.trim().is_empty())
        {
            channel_id
                .say(&self.http, &chunk)
                .await
                .map_err(|e| DeliveryError::new(conversation_id, e.to_string()))?;
        }

        debug!("📤 Delivered {} bytes to channel {channel_id}", text.len());
        Ok(())
    }
}
