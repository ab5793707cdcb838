//! Help command handler
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::ChatCommandHandler;
use crate::commands::messages;
use crate::core::ConversationId;

pub struct HelpHandler;

#[async_trait]
impl ChatCommandHandler for HelpHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["help"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        _command: &str,
        conversation_id: ConversationId,
    ) -> Result<()> {
        ctx.reply(conversation_id, messages::HELP).await
    }
}
