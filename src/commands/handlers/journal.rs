//! Journal command handlers
//!
//! Handles: stats, last
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::ChatCommandHandler;
use crate::commands::messages;
use crate::core::ConversationId;

pub struct JournalHandler;

#[async_trait]
impl ChatCommandHandler for JournalHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["stats", "last"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        command: &str,
        conversation_id: ConversationId,
    ) -> Result<()> {
        match command {
            "stats" => {
                let stats = ctx.on_stats_requested().await;
                debug!("Stats for conversation {conversation_id}: {stats:?}");
                ctx.reply(conversation_id, &messages::stats(&stats)).await
            }
            "last" => {
                let entries = ctx.on_recent_requested(ctx.settings.recent_limit).await;
                let text = messages::recent_entries(&entries, &ctx.settings.display_offset);
                ctx.reply(conversation_id, &text).await
            }
            _ => Ok(()),
        }
    }
}
