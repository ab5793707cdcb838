//! Journal entry record
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::core::ConversationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded reply
///
/// Persisted as `{"chatId", "message", "timestamp"}` with an RFC 3339
/// timestamp, the layout existing `responses.json` files already use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(rename = "chatId")]
    pub conversation_id: ConversationId,

    pub message: String,

    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(
        conversation_id: ConversationId,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            conversation_id,
            message: message.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reads_existing_journal_layout() {
        let json = r#"[
  {
    "chatId": 123456789,
    "message": "tired, but the tea helped",
    "timestamp": "2024-03-01T09:15:30.250Z"
  }
]"#;

        let entries: Vec<JournalEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].conversation_id, ConversationId(123456789));
        assert_eq!(entries[0].message, "tired, but the tea helped");
        assert_eq!(
            entries[0].timestamp,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 30).unwrap()
                + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_writes_chat_id_field() {
        let entry = JournalEntry::new(
            ConversationId(9),
            "hi",
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        );
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["chatId"], 9);
        assert_eq!(value["message"], "hi");
        assert!(value["timestamp"].as_str().unwrap().starts_with("2024-03-01T09:00:00"));
    }
}
