//! Chat command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::context::CommandContext;
use crate::core::ConversationId;

/// Trait for `/command` handlers
///
/// Each handler processes one or more commands and sends its own replies
/// through the context. Handlers are registered with a CommandRegistry and
/// dispatched by command name.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl ChatCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         command: &str,
///         conversation_id: ConversationId,
///     ) -> Result<()> {
///         ctx.reply(conversation_id, "pong").await
///     }
/// }
/// ```
#[async_trait]
pub trait ChatCommandHandler: Send + Sync {
    /// Command name(s) this handler processes, lowercase without the slash
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context with scheduler, journal and delivery
    /// * `command` - The matched command name
    /// * `conversation_id` - Conversation the command came from
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        command: &str,
        conversation_id: ConversationId,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::testing::harness;

    struct PingHandler;

    #[async_trait]
    impl ChatCommandHandler for PingHandler {
        fn command_names(&self) -> &'static [&'static str] {
            &["ping"]
        }

        async fn handle(
            &self,
            ctx: Arc<CommandContext>,
            command: &str,
            conversation_id: ConversationId,
        ) -> Result<()> {
            ctx.reply(conversation_id, &format!("pong from /{command}")).await
        }
    }

    #[tokio::test]
    async fn test_dispatch_through_trait_object() {
        let h = harness();
        let handler: Arc<dyn ChatCommandHandler> = Arc::new(PingHandler);

        handler
            .handle(Arc::new(h.context.clone()), "ping", ConversationId(5))
            .await
            .unwrap();

        assert_eq!(handler.command_names(), &["ping"]);
        assert_eq!(h.delivery.count_for(ConversationId(5)), 1);
        assert_eq!(h.delivery.last_text().as_deref(), Some("pong from /ping"));
    }
}
