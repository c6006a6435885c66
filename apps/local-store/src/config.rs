//! Runtime configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const DB_PATH_VAR: &str = "TRACKER_DB_PATH";
pub const DAY_RESET_HOUR_VAR: &str = "TRACKER_DAY_RESET_HOUR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// SQLite file backing the store.
    pub db_path: PathBuf,
    /// Hour (0-23) at which a new day starts for default workout dates.
    pub day_reset_hour: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            day_reset_hour: 0,
        }
    }
}

impl TrackerConfig {
    /// Load from the environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(DB_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(DAY_RESET_HOUR_VAR) {
            config.day_reset_hour = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|hour| *hour < 24)
                .ok_or(ConfigError::InvalidValue {
                    key: DAY_RESET_HOUR_VAR,
                    value: raw,
                })?;
        }

        Ok(config)
    }
}

/// Platform data directory, falling back to the working directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daily-tracker")
        .join("tracker.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<TrackerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TrackerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = load(&[]).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert!(config.db_path.ends_with("daily-tracker/tracker.db"));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = load(&[(DB_PATH_VAR, "/tmp/t.db"), (DAY_RESET_HOUR_VAR, " 4 ")]).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/t.db"));
        assert_eq!(config.day_reset_hour, 4);
    }

    #[test]
    fn out_of_range_hour_is_rejected() {
        let err = load(&[(DAY_RESET_HOUR_VAR, "24")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: DAY_RESET_HOUR_VAR,
                value: "24".to_string()
            }
        );
        assert!(load(&[(DAY_RESET_HOUR_VAR, "dawn")]).is_err());
    }
}
