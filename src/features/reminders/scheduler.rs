//! # Feature: Check-in Reminders
//!
//! Sends the check-in prompt to a conversation once on start and then every
//! interval until stopped. Each active conversation owns exactly one
//! cadence task, identified by its cancellation token.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 2.0.0: One task per conversation, restartable and cancellable via DashMap of tokens
//! - 1.0.0: Initial release with fixed 3 hour cadence

use crate::core::{ConversationId, Delivery};
use dashmap::DashMap;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Reference cadence between check-ins
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3 * 60 * 60);

const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// The four-question reflective prompt
pub const CHECK_IN_PROMPT: &str = "🌿 A pause to care for yourself 🌿

1) What am I feeling in my body right now?
2) Where is my attention?
3) What do I need right now? (breath, water, a pause, movement, tenderness, something else)
4) What good thing has happened?

Just reply in one message, as it is, no filtering 💚";

pub struct ReminderScheduler {
    delivery: Arc<dyn Delivery>,
    prompt: Arc<str>,
    interval: Duration,
    /// Active cadences by conversation
    cadences: DashMap<ConversationId, CancellationToken>,
}

impl ReminderScheduler {
    pub fn new(delivery: Arc<dyn Delivery>, interval: Duration) -> Self {
        if interval < MIN_INTERVAL {
            warn!("Check-in interval {interval:?} too short, using {MIN_INTERVAL:?}");
        }

        Self {
            delivery,
            prompt: Arc::from(CHECK_IN_PROMPT),
            interval: interval.max(MIN_INTERVAL),
            cadences: DashMap::new(),
        }
    }

    /// Replace the prompt text sent on every check-in
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Arc::from(prompt.into());
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start (or restart) check-ins for a conversation
    ///
    /// Delivers one check-in right away, then one per interval measured from
    /// this call. Any previous cadence for the conversation is cancelled.
    /// Must be called from within a tokio runtime.
    pub fn start(&self, conversation_id: ConversationId) {
        let token = CancellationToken::new();

        if let Some(previous) = self.cadences.insert(conversation_id, token.clone()) {
            previous.cancel();
            info!("Restarting check-ins for conversation {conversation_id}");
        } else {
            info!(
                "Starting check-ins for conversation {conversation_id} every {:?}",
                self.interval
            );
        }

        tokio::spawn(run_cadence(
            self.delivery.clone(),
            self.prompt.clone(),
            self.interval,
            conversation_id,
            token,
        ));
    }

    /// Stop check-ins for a conversation
    ///
    /// Returns `false` if no cadence was active. A delivery already in flight
    /// may still complete, no new one starts.
    pub fn stop(&self, conversation_id: ConversationId) -> bool {
        match self.cadences.remove(&conversation_id) {
            Some((_, token)) => {
                token.cancel();
                info!("Stopped check-ins for conversation {conversation_id}");
                true
            }
            None => {
                debug!("No active check-ins to stop for conversation {conversation_id}");
                false
            }
        }
    }

    pub fn is_active(&self, conversation_id: ConversationId) -> bool {
        self.cadences.contains_key(&conversation_id)
    }

    pub fn active_count(&self) -> usize {
        self.cadences.len()
    }

    /// Cancel every cadence
    pub fn shutdown(&self) {
        let count = self.cadences.len();
        self.cadences.retain(|_, token| {
            token.cancel();
            false
        });
        info!("Cancelled {count} check-in cadences");
    }
}

async fn run_cadence(
    delivery: Arc<dyn Delivery>,
    prompt: Arc<str>,
    interval: Duration,
    conversation_id: ConversationId,
    token: CancellationToken,
) {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The first tick completes immediately
    ticker.tick().await;
    if token.is_cancelled() {
        debug!("Check-in cadence for conversation {conversation_id} cancelled before first check-in");
        return;
    }
    send_check_in(delivery.as_ref(), conversation_id, &prompt).await;

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                if token.is_cancelled() {
                    break;
                }
                send_check_in(delivery.as_ref(), conversation_id, &prompt).await;
            }
        }
    }

    debug!("Check-in cadence for conversation {conversation_id} ended");
}

async fn send_check_in(delivery: &dyn Delivery, conversation_id: ConversationId, prompt: &str) {
    match delivery.deliver(conversation_id, prompt).await {
        Ok(()) => debug!("Sent check-in to conversation {conversation_id}"),
        Err(e) => warn!("Check-in delivery failed, keeping cadence: {e}"),
    }
}
