//! # Feature: Care Journal
//!
//! Append-only journal of check-in replies with windowed and tail queries.
//! Every operation re-reads the backing storage; nothing is cached between
//! calls. Appends are read-modify-write of the whole journal, serialized
//! within the process by an async mutex.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Refuse to overwrite an unreadable journal on append
//! - 1.1.0: Serialize appends within the process
//! - 1.0.0: Initial release with load, append, recent and tail queries

use crate::core::JournalError;
use crate::features::journal::entry::JournalEntry;
use crate::features::journal::storage::{FileStorage, JournalStorage};
use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

const EMPTY_JOURNAL: &[u8] = b"[]";

/// Reply count over a trailing window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalStats {
    pub window: Duration,
    pub count: usize,
}

pub struct JournalStore {
    storage: Arc<dyn JournalStorage>,
    write_lock: Mutex<()>,
}

impl JournalStore {
    pub fn new(storage: Arc<dyn JournalStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Journal backed by a JSON file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::new(path)))
    }

    /// All entries in insertion order, or an error if the journal is unreadable
    ///
    /// A missing journal is initialised to an empty one as a side effect.
    pub async fn try_load_all(&self) -> Result<Vec<JournalEntry>, JournalError> {
        let exists = self
            .storage
            .exists()
            .await
            .map_err(|e| JournalError::StorageRead(e.to_string()))?;

        if !exists {
            info!("No journal found, creating an empty one");
            if let Err(e) = self.storage.write_all(EMPTY_JOURNAL).await {
                // Nothing was recorded yet, so the empty view is still accurate
                warn!("Failed to initialise empty journal: {e}");
            }
            return Ok(Vec::new());
        }

        let bytes = self
            .storage
            .read_all()
            .await
            .map_err(|e| JournalError::StorageRead(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| JournalError::StorageRead(e.to_string()))
    }

    /// All entries in insertion order
    ///
    /// An unreadable journal is logged and reported as empty.
    pub async fn load_all(&self) -> Vec<JournalEntry> {
        match self.try_load_all().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Treating journal as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Record an entry and persist the whole journal
    ///
    /// On error the entry is not recorded. An unreadable journal is left
    /// untouched and reported as `StorageRead`.
    pub async fn append(&self, entry: JournalEntry) -> Result<(), JournalError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.try_load_all().await?;
        let conversation_id = entry.conversation_id;
        entries.push(entry);

        let bytes = serde_json::to_vec_pretty(&entries)
            .map_err(|e| JournalError::StorageWrite(e.to_string()))?;
        self.storage
            .write_all(&bytes)
            .await
            .map_err(|e| JournalError::StorageWrite(e.to_string()))?;

        debug!(
            "Appended journal entry for conversation {conversation_id} ({} total)",
            entries.len()
        );
        Ok(())
    }

    /// Entries with `timestamp >= now - window`, in insertion order
    ///
    /// A window reaching past the earliest representable time has no lower
    /// bound.
    pub async fn recent_within_window(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Vec<JournalEntry> {
        let cutoff = now.checked_sub_signed(window);
        self.load_all()
            .await
            .into_iter()
            .filter(|entry| cutoff.map_or(true, |cutoff| entry.timestamp >= cutoff))
            .collect()
    }

    /// The last `min(n, len)` entries, oldest first
    pub async fn tail(&self, n: usize) -> Vec<JournalEntry> {
        let entries = self.load_all().await;
        let skip = entries.len().saturating_sub(n);
        entries.into_iter().skip(skip).collect()
    }

    pub async fn stats(&self, now: DateTime<Utc>, window: Duration) -> JournalStats {
        JournalStats {
            window,
            count: self.recent_within_window(now, window).await.len(),
        }
    }
}
