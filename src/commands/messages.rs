//! User-facing reply texts
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Welcome text and stats header render the configured durations
//! - 1.0.0: Initial texts for start, stop, stats, last and acknowledgements

use crate::features::journal::{JournalEntry, JournalStats};
use chrono::FixedOffset;
use std::time::Duration;

pub const STOPPED: &str =
    "Okay 💙 I'll go quiet for now. When you want reminders again, just send /start.";

pub const RECORDED: &str = "I'm with you 💚 Your reply is saved in your care journal.";

pub const RECORD_FAILED: &str =
    "I couldn't save that to your journal just now 😔 Please send it again in a moment.";

pub const EMPTY_JOURNAL: &str = "Your journal is empty for now 🌱 That's easy to fix: \
just reply to my next check-in 💚";

pub const HELP: &str = "🌿 **What I can do**

/start - turn check-in reminders on (and get one right now)
/stop - pause reminders
/stats - how many times you replied recently
/last - your latest journal entries
/help - this message

Anything else you write is saved to your care journal.";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn welcome(interval: Duration) -> String {
    format!(
        "Hi 🌸\n\
         I'm your companion for finding your way back to yourself.\n\n\
         Every {} I'll remind you to ask yourself four questions.\n\
         Reminders are already on ✅\n\n\
         If you want me to stop, send /stop.",
        format_duration(interval.as_secs() as i64)
    )
}

pub fn stats(stats: &JournalStats) -> String {
    let window = format_duration(stats.window.num_seconds());
    let times = if stats.count == 1 { "time" } else { "times" };
    let closing = if stats.count == 0 {
        "Your attention missed you... 💛"
    } else {
        "Proud of you 💚 Keep caring for yourself just as gently!"
    };

    format!(
        "🌿 Stats for the last {window} 🌿\n\nYou replied to me {} {times}.\n\n{closing}",
        stats.count
    )
}

/// Numbered listing of entries, timestamps rendered in `offset`
pub fn recent_entries(entries: &[JournalEntry], offset: &FixedOffset) -> String {
    if entries.is_empty() {
        return EMPTY_JOURNAL.to_string();
    }

    let lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let time = entry.timestamp.with_timezone(offset).format(TIMESTAMP_FORMAT);
            format!("{}) {time}\n{}", index + 1, entry.message)
        })
        .collect();

    format!(
        "📝 Latest entries in your care journal:\n\n{}",
        lines.join("\n\n")
    )
}

/// Format a duration in seconds into a human-readable string
pub fn format_duration(seconds: i64) -> String {
    fn unit(value: i64, name: &str) -> String {
        format!("{} {}{}", value, name, if value == 1 { "" } else { "s" })
    }

    if seconds < 60 {
        unit(seconds, "second")
    } else if seconds < 3600 {
        unit(seconds / 60, "minute")
    } else if seconds < 86400 {
        let mins = (seconds % 3600) / 60;
        if mins > 0 {
            format!("{} {}", unit(seconds / 3600, "hour"), unit(mins, "minute"))
        } else {
            unit(seconds / 3600, "hour")
        }
    } else {
        let hours = (seconds % 86400) / 3600;
        if hours > 0 {
            format!("{} {}", unit(seconds / 86400, "day"), unit(hours, "hour"))
        } else {
            unit(seconds / 86400, "day")
        }
    }
}
