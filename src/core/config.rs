//! Bot configuration loaded from environment variables
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! Call `dotenvy::dotenv().ok()` before `Config::from_env()` to pick up a
//! local `.env` file.

use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use std::time::Duration;

/// Default check-in cadence: every 3 hours
pub const DEFAULT_CHECKIN_INTERVAL_MINUTES: u64 = 180;
pub const DEFAULT_STATS_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_RECENT_LIMIT: usize = 10;
pub const DEFAULT_JOURNAL_PATH: &str = "responses.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub journal_path: String,
    pub checkin_interval: Duration,
    pub stats_window_days: u32,
    pub recent_limit: usize,
    /// Offset applied when rendering journal timestamps back to the user
    pub timezone_offset_minutes: i32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| anyhow!("DISCORD_TOKEN environment variable not set"))?;

        let interval_minutes: u64 = parse_or(
            &lookup,
            "CHECKIN_INTERVAL_MINUTES",
            DEFAULT_CHECKIN_INTERVAL_MINUTES,
        )?;
        if interval_minutes == 0 {
            return Err(anyhow!("CHECKIN_INTERVAL_MINUTES must be greater than zero"));
        }
        let interval_secs = interval_minutes
            .checked_mul(60)
            .ok_or_else(|| anyhow!("CHECKIN_INTERVAL_MINUTES is too large: {interval_minutes}"))?;

        let stats_window_days = parse_or(&lookup, "STATS_WINDOW_DAYS", DEFAULT_STATS_WINDOW_DAYS)?;
        if stats_window_days == 0 {
            return Err(anyhow!("STATS_WINDOW_DAYS must be greater than zero"));
        }

        let recent_limit = parse_or(&lookup, "RECENT_LIMIT", DEFAULT_RECENT_LIMIT)?;
        if recent_limit == 0 {
            return Err(anyhow!("RECENT_LIMIT must be greater than zero"));
        }

        Ok(Config {
            discord_token,
            journal_path: lookup("JOURNAL_PATH")
                .unwrap_or_else(|| DEFAULT_JOURNAL_PATH.to_string()),
            checkin_interval: Duration::from_secs(interval_secs),
            stats_window_days,
            recent_limit,
            timezone_offset_minutes: parse_or(&lookup, "TIMEZONE_OFFSET_MINUTES", 0)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.journal_path, "responses.json");
        assert_eq!(config.checkin_interval, Duration::from_secs(3 * 60 * 60));
        assert_eq!(config.stats_window_days, 7);
        assert_eq!(config.recent_limit, 10);
        assert_eq!(config.timezone_offset_minutes, 0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("JOURNAL_PATH", "/var/lib/carebot/journal.json"),
            ("CHECKIN_INTERVAL_MINUTES", "45"),
            ("STATS_WINDOW_DAYS", "30"),
            ("RECENT_LIMIT", "5"),
            ("TIMEZONE_OFFSET_MINUTES", "-300"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.journal_path, "/var/lib/carebot/journal.json");
        assert_eq!(config.checkin_interval, Duration::from_secs(45 * 60));
        assert_eq!(config.stats_window_days, 30);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.timezone_offset_minutes, -300);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        assert!(Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("CHECKIN_INTERVAL_MINUTES", "soon"),
        ]))
        .is_err());

        assert!(Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("CHECKIN_INTERVAL_MINUTES", "0"),
        ]))
        .is_err());

        assert!(Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("RECENT_LIMIT", "0"),
        ]))
        .is_err());
    }

    #[test]
    fn test_oversized_interval_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("CHECKIN_INTERVAL_MINUTES", &u64::MAX.to_string()),
        ]));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("too large"), "unexpected error: {err}");
    }

    #[test]
    fn test_largest_stats_window_accepted() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("STATS_WINDOW_DAYS", &u32::MAX.to_string()),
        ]))
        .unwrap();

        assert_eq!(config.stats_window_days, u32::MAX);
    }
}
