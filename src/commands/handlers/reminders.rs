//! Reminder command handlers
//!
//! Handles: start, stop
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::ChatCommandHandler;
use crate::commands::messages;
use crate::core::ConversationId;

pub struct ReminderHandler;

#[async_trait]
impl ChatCommandHandler for ReminderHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "stop"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        command: &str,
        conversation_id: ConversationId,
    ) -> Result<()> {
        match command {
            "start" => self.handle_start(&ctx, conversation_id).await,
            "stop" => self.handle_stop(&ctx, conversation_id).await,
            _ => Ok(()),
        }
    }
}

impl ReminderHandler {
    /// Greet, then switch check-ins on (which sends the first one)
    async fn handle_start(&self, ctx: &CommandContext, conversation_id: ConversationId) -> Result<()> {
        ctx.reply(conversation_id, &messages::welcome(ctx.scheduler.interval()))
            .await?;
        ctx.on_conversation_start(conversation_id);
        Ok(())
    }

    async fn handle_stop(&self, ctx: &CommandContext, conversation_id: ConversationId) -> Result<()> {
        if !ctx.on_conversation_stop(conversation_id) {
            info!("/stop in conversation {conversation_id} with no active check-ins");
        }
        ctx.reply(conversation_id, messages::STOPPED).await
    }
}
