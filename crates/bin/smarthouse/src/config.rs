//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `smarthouse.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;
use smarthouse_app::remote_control::DEFAULT_SLOT_COUNT;
use smarthouse_domain::undo_order::UndoOrder;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote control settings.
    pub remote: RemoteConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Remote control configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Number of slots on the remote.
    pub slot_count: usize,
    /// Order in which macro commands undo their components.
    pub macro_undo_order: UndoOrder,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `smarthouse.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("smarthouse.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides read through `lookup`. `RUST_LOG` wins over
    /// `SMARTHOUSE_LOG` when both are set.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("SMARTHOUSE_SLOTS") {
            self.remote.slot_count = parse_env("SMARTHOUSE_SLOTS", val)?;
        }
        if let Some(val) = lookup("SMARTHOUSE_MACRO_UNDO") {
            self.remote.macro_undo_order = parse_env("SMARTHOUSE_MACRO_UNDO", val)?;
        }
        if let Some(val) = lookup("SMARTHOUSE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.remote.slot_count == 0 {
            return Err(ConfigError::Validation(
                "slot_count must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            macro_undo_order: UndoOrder::Forward,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthouse=info,smarthouse_app=info,smarthouse_adapter_virtual=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
