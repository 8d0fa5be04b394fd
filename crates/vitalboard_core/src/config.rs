//! Runtime configuration.
//!
//! # Invariants
//! - Every field has a default, so an empty JSON object is a valid config.
//! - `validate` applies the same normalization rules as `init_logging`.

use crate::logging::{
    default_log_level, init_logging, normalize_level, normalize_log_dir, LoggingError,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_RECORDING_LATENCY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Cosmetic delay applied by simulated recording.
    pub recording_latency_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            recording_latency_ms: DEFAULT_RECORDING_LATENCY_MS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config document: {err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl DashboardConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level)?;
        if let Some(dir) = &self.log_dir {
            normalize_log_dir(dir)?;
        }
        Ok(())
    }

    pub fn recording_latency(&self) -> Duration {
        Duration::from_millis(self.recording_latency_ms)
    }

    /// Starts file logging when `log_dir` is set.
    ///
    /// Returns `Ok(false)` when logging is disabled by config.
    pub fn apply_logging(&self) -> Result<bool, ConfigError> {
        match &self.log_dir {
            Some(dir) => {
                init_logging(&self.log_level, dir)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DashboardConfig};
    use std::time::Duration;

    #[test]
    fn empty_document_uses_defaults() {
        let config = DashboardConfig::from_json("{}").expect("empty config is valid");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.recording_latency(), Duration::from_millis(500));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = DashboardConfig::from_json(
            r#"{"log_level": "WARN", "log_dir": "/tmp/vitalboard", "recording_latency_ms": 0}"#,
        )
        .expect("valid config");
        assert_eq!(config.log_level, "WARN");
        assert!(config.recording_latency().is_zero());
    }

    #[test]
    fn invalid_level_and_relative_dir_are_rejected() {
        let level = DashboardConfig::from_json(r#"{"log_level": "loud"}"#)
            .expect_err("unknown level");
        assert!(matches!(level, ConfigError::Logging(_)));

        let dir = DashboardConfig::from_json(r#"{"log_dir": "relative/logs"}"#)
            .expect_err("relative dir");
        assert!(dir.to_string().contains("absolute"));
    }

    #[test]
    fn disabled_logging_is_reported() {
        let config = DashboardConfig::default();
        assert!(!config.apply_logging().expect("no-op without log_dir"));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = DashboardConfig::from_json("{").expect_err("truncated json");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
