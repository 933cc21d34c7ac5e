//! Configuration for spindraw
//!
//! A single JSON file with defaults matching the original contest: two
//! winners per category, six total, 5000 prize per winner out of a 30000
//! pool, and a 3000 ms spin slowing from 300 ms to 50 ms ticks.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orchestrator::{DrawCaps, DrawSettings};
use crate::sequencer::SpinTiming;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the winner log
    pub data_dir: PathBuf,
    /// JSON roster of candidates
    pub roster_file: PathBuf,
    pub caps: DrawCaps,
    pub timing: SpinTiming,
    /// Pause between successive draws in a batch, in milliseconds
    pub draw_pause_ms: u64,
    pub prize_per_winner: u64,
    pub total_prize_pool: u64,
    /// Base64 SHA-256 digest of the operator secret; the default secret
    /// applies when absent
    pub operator_secret_digest: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./raffle-data"),
            roster_file: PathBuf::from("./roster.json"),
            caps: DrawCaps::default(),
            timing: SpinTiming::default(),
            draw_pause_ms: 2000,
            prize_per_winner: 5000,
            total_prize_pool: 30_000,
            operator_secret_digest: None,
        }
    }
}

impl AppConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate invariants the rest of the engine assumes.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.caps.per_category == 0 {
            return Err(ConfigError::Invalid("caps.per_category must be > 0".into()));
        }
        if self.caps.global == 0 {
            return Err(ConfigError::Invalid("caps.global must be > 0".into()));
        }
        if self.timing.duration_ms == 0 {
            return Err(ConfigError::Invalid("timing.duration_ms must be > 0".into()));
        }
        if self.timing.end_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "timing.end_interval_ms must be > 0".into(),
            ));
        }
        if self.timing.end_interval_ms > self.timing.start_interval_ms {
            return Err(ConfigError::Invalid(
                "timing.end_interval_ms must not exceed timing.start_interval_ms".into(),
            ));
        }
        if self.prize_per_winner == 0 {
            return Err(ConfigError::Invalid("prize_per_winner must be > 0".into()));
        }
        if self.prize_per_winner.saturating_mul(self.caps.global as u64) > self.total_prize_pool {
            return Err(ConfigError::Invalid(
                "total_prize_pool cannot fund caps.global winners".into(),
            ));
        }
        Ok(())
    }

    /// Map the file shape onto orchestrator settings.
    pub fn draw_settings(&self) -> DrawSettings {
        DrawSettings {
            caps: self.caps,
            timing: self.timing,
            draw_pause: Duration::from_millis(self.draw_pause_ms),
            prize_per_winner: self.prize_per_winner,
            total_prize_pool: self.total_prize_pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        AppConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_caps_are_rejected() {
        let mut config = AppConfig::default();
        config.caps.per_category = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.caps.global = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_tick_intervals_are_rejected() {
        let mut config = AppConfig::default();
        config.timing.start_interval_ms = 50;
        config.timing.end_interval_ms = 300;
        assert!(config.validate().is_err());
    }

    #[test]
    fn underfunded_prize_pool_is_rejected() {
        let mut config = AppConfig::default();
        config.total_prize_pool = 10_000; // six winners at 5000 each need 30000
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"prize_per_winner": 1000}"#).unwrap();
        assert_eq!(config.prize_per_winner, 1000);
        assert_eq!(config.caps.per_category, 2);
        assert_eq!(config.timing.duration_ms, 3000);
    }

    #[test]
    fn load_rejects_invalid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("spindraw.json");
        std::fs::write(&path, r#"{"caps": {"per_category": 0, "global": 6}}"#).unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.caps, config.caps);
        assert_eq!(back.timing, config.timing);
    }
}
