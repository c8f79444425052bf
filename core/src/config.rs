//! Application configuration

use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_NAME: &str = "bosswatch";

fn default_refresh_secs() -> u64 {
    5
}

fn default_utc_offset() -> String {
    // The deployment this tracker was built for runs on Manila time
    "+08:00".to_string()
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Display timezone as a fixed UTC offset, e.g. `"+08:00"`
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,

    /// Observation log path; `None` uses the platform data directory
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Live table refresh period in seconds
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            utc_offset: default_utc_offset(),
            data_file: None,
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        confy::load(APP_NAME, None).unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self.clone()).map_err(ConfigError::Save)
    }

    /// Parsed display offset, falling back to UTC when the configured
    /// value is malformed.
    pub fn display_offset(&self) -> FixedOffset {
        match parse_offset(&self.utc_offset) {
            Some(offset) => offset,
            None => {
                tracing::warn!(offset = %self.utc_offset, "invalid utc_offset in config, using UTC");
                Utc.fix()
            }
        }
    }

    /// Resolved observation log path.
    pub fn data_file_path(&self) -> PathBuf {
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        match dirs::data_dir() {
            Some(dir) => dir.join(APP_NAME).join("observations.jsonl"),
            None => PathBuf::from("observations.jsonl"),
        }
    }
}

/// Parse a `"±HH:MM"` offset string.
pub fn parse_offset(input: &str) -> Option<FixedOffset> {
    let input = input.trim();
    let (sign, rest) = match input.split_at_checked(1)? {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };

    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_and_negative_offsets() {
        assert_eq!(
            parse_offset("+08:00"),
            FixedOffset::east_opt(8 * 3600)
        );
        assert_eq!(
            parse_offset("-05:30"),
            FixedOffset::east_opt(-(5 * 3600 + 30 * 60))
        );
    }

    #[test]
    fn rejects_malformed_offsets() {
        for input in ["08:00", "+8", "+25:00", "+08:75", "", "UTC+8"] {
            assert!(parse_offset(input).is_none(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn default_config_has_a_valid_offset() {
        let config = AppConfig::default();
        assert_eq!(
            config.display_offset(),
            FixedOffset::east_opt(8 * 3600).expect("+08:00")
        );
    }
}
