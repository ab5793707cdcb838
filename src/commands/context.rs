//! Shared context for command handlers
//!
//! Composes the reminder scheduler and the journal store. The two never
//! reference each other; every cross-component flow goes through here.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add CompanionSettings built from Config
//! - 1.0.0: Initial implementation with conversation lifecycle and journal queries

use crate::commands::messages;
use crate::core::{Clock, Config, ConversationId, Delivery, JournalError};
use crate::features::journal::{JournalEntry, JournalStats, JournalStore};
use crate::features::reminders::ReminderScheduler;
use anyhow::Result;
use chrono::{FixedOffset, Offset, Utc};
use log::{error, info, warn};
use std::sync::Arc;

/// Tunables for the command layer
#[derive(Debug, Clone)]
pub struct CompanionSettings {
    pub stats_window: chrono::Duration,
    pub recent_limit: usize,
    /// Offset used when rendering timestamps back to the user
    pub display_offset: FixedOffset,
}

impl CompanionSettings {
    pub fn from_config(config: &Config) -> Self {
        let display_offset = config
            .timezone_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                warn!(
                    "TIMEZONE_OFFSET_MINUTES {} out of range, showing times in UTC",
                    config.timezone_offset_minutes
                );
                utc_offset()
            });

        Self {
            stats_window: chrono::Duration::days(i64::from(config.stats_window_days)),
            recent_limit: config.recent_limit,
            display_offset,
        }
    }
}

impl Default for CompanionSettings {
    fn default() -> Self {
        Self {
            stats_window: chrono::Duration::days(7),
            recent_limit: 10,
            display_offset: utc_offset(),
        }
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Shared context for all command handlers
#[derive(Clone)]
pub struct CommandContext {
    pub scheduler: Arc<ReminderScheduler>,
    pub journal: Arc<JournalStore>,
    pub delivery: Arc<dyn Delivery>,
    pub clock: Arc<dyn Clock>,
    pub settings: CompanionSettings,
}

impl CommandContext {
    pub fn new(
        scheduler: Arc<ReminderScheduler>,
        journal: Arc<JournalStore>,
        delivery: Arc<dyn Delivery>,
        clock: Arc<dyn Clock>,
        settings: CompanionSettings,
    ) -> Self {
        Self {
            scheduler,
            journal,
            delivery,
            clock,
            settings,
        }
    }

    /// Begin (or restart) check-ins for a conversation
    pub fn on_conversation_start(&self, conversation_id: ConversationId) {
        self.scheduler.start(conversation_id);
    }

    /// Stop check-ins; returns whether any were active
    pub fn on_conversation_stop(&self, conversation_id: ConversationId) -> bool {
        self.scheduler.stop(conversation_id)
    }

    /// Record a reply in the journal and acknowledge it
    ///
    /// The acknowledgement is best effort. If the entry cannot be recorded the
    /// user is told so and the error is returned.
    pub async fn on_message_received(
        &self,
        conversation_id: ConversationId,
        text: &str,
    ) -> Result<JournalEntry, JournalError> {
        let entry = JournalEntry::new(conversation_id, text, self.clock.now());

        match self.journal.append(entry.clone()).await {
            Ok(()) => {
                info!("📝 Recorded journal entry for conversation {conversation_id}");
                self.notify(conversation_id, messages::RECORDED).await;
                Ok(entry)
            }
            Err(e) => {
                error!("Failed to record journal entry for conversation {conversation_id}: {e}");
                self.notify(conversation_id, messages::RECORD_FAILED).await;
                Err(e)
            }
        }
    }

    /// Reply count over the configured stats window
    pub async fn on_stats_requested(&self) -> JournalStats {
        self.journal
            .stats(self.clock.now(), self.settings.stats_window)
            .await
    }

    /// The latest `n` entries, oldest first
    pub async fn on_recent_requested(&self, n: usize) -> Vec<JournalEntry> {
        self.journal.tail(n).await
    }

    /// Send a reply, surfacing delivery failures to the caller
    pub async fn reply(&self, conversation_id: ConversationId, text: &str) -> Result<()> {
        self.delivery.deliver(conversation_id, text).await?;
        Ok(())
    }

    /// Send a reply, logging delivery failures
    async fn notify(&self, conversation_id: ConversationId, text: &str) {
        if let Err(e) = self.delivery.deliver(conversation_id, text).await {
            warn!("Failed to send acknowledgement: {e}");
        }
    }
}
