//! Routes incoming chat text to command handlers or the journal
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::commands::context::CommandContext;
use crate::commands::registry::CommandRegistry;
use crate::core::ConversationId;
use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new(context: CommandContext) -> Self {
        Self {
            context: Arc::new(context),
            registry: CommandRegistry::with_defaults(),
        }
    }

    pub fn context(&self) -> &Arc<CommandContext> {
        &self.context
    }

    /// Handle one incoming message from a conversation
    ///
    /// Registered `/commands` are dispatched to their handler. Any other
    /// non-blank text, including unknown commands, is recorded in the journal.
    pub async fn handle_message(&self, conversation_id: ConversationId, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            debug!("Ignoring blank message in conversation {conversation_id}");
            return Ok(());
        }

        if let Some(name) = parse_command(content) {
            if let Some(handler) = self.registry.get(&name) {
                info!("🎯 Processing /{name} for conversation {conversation_id}");
                return handler
                    .handle(self.context.clone(), &name, conversation_id)
                    .await;
            }
            debug!("Unknown command /{name}, recording as journal text");
        }

        self.context
            .on_message_received(conversation_id, content)
            .await?;
        Ok(())
    }
}

/// Extract a lowercase command name from `/name` or `/name@botname`
pub fn parse_command(content: &str) -> Option<String> {
    let first = content.split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);

    if name.is_empty() {
        None
    } else {
        Some(name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::testing::{harness, harness_with_storage};
    use crate::commands::messages;
    use crate::features::journal::MemoryStorage;
    use std::time::Duration;

    const ID: ConversationId = ConversationId(77);

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/start"), Some("start".to_string()));
        assert_eq!(parse_command("  /STATS please"), Some("stats".to_string()));
        assert_eq!(parse_command("/last@care_bot"), Some("last".to_string()));
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("feeling ok /start"), None);
        assert_eq!(parse_command(""), None);
    }

    #[tokio::test]
    async fn test_plain_text_is_journaled() {
        let h = harness();
        let handler = CommandHandler::new(h.context.clone());

        handler.handle_message(ID, "warm hands, calm breath").await.unwrap();

        let entries = handler.context().journal.load_all().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "warm hands, calm breath");
        assert_eq!(entries[0].conversation_id, ID);
        assert_eq!(h.delivery.last_text().as_deref(), Some(messages::RECORDED));
    }

    #[tokio::test]
    async fn test_unknown_command_is_journaled() {
        let h = harness();
        let handler = CommandHandler::new(h.context.clone());

        handler.handle_message(ID, "/breathe slowly").await.unwrap();

        let entries = handler.context().journal.load_all().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "/breathe slowly");
    }

    #[tokio::test]
    async fn test_blank_message_is_ignored() {
        let h = harness();
        let handler = CommandHandler::new(h.context.clone());

        handler.handle_message(ID, "   ").await.unwrap();

        assert!(handler.context().journal.load_all().await.is_empty());
        assert!(h.delivery.sent().is_empty());
    }

    #[tokio::test]
    async fn test_commands_are_not_journaled() {
        let h = harness();
        let handler = CommandHandler::new(h.context.clone());

        handler.handle_message(ID, "/stats").await.unwrap();
        handler.handle_message(ID, "/last").await.unwrap();
        handler.handle_message(ID, "/help").await.unwrap();

        assert!(handler.context().journal.load_all().await.is_empty());
        assert_eq!(h.delivery.sent().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_write_surfaces_error() {
        let h = harness_with_storage(std::sync::Arc::new(MemoryStorage::with_contents("{")));
        let handler = CommandHandler::new(h.context.clone());

        assert!(handler.handle_message(ID, "hello").await.is_err());
        assert_eq!(
            h.delivery.last_text().as_deref(),
            Some(messages::RECORD_FAILED)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_stop_flow() {
        let h = harness();
        let handler = CommandHandler::new(h.context.clone());

        handler.handle_message(ID, "/start").await.unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(handler.context().scheduler.is_active(ID));

        handler.handle_message(ID, "/stop").await.unwrap();
        assert!(!handler.context().scheduler.is_active(ID));

        let before = h.delivery.sent().len();
        tokio::time::sleep(handler.context().scheduler.interval() * 3).await;
        assert_eq!(h.delivery.sent().len(), before);
    }
}
