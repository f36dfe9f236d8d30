//! TOML-based application configuration.
//!
//! Stores start-up preferences:
//! - Default focus and break lengths
//! - Alert behavior (terminal bell, external sound command)
//! - Log level
//!
//! Configuration lives at `~/.config/pomodoro/config.toml`. The timer only
//! reads it; duration edits made while the timer runs are never written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, CoreError, Result};
use crate::timer::{DurationSettings, DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};

/// Environment variable overriding the full config file path.
pub const CONFIG_PATH_ENV: &str = "POMODORO_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationsConfig {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

/// What happens when a session runs out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Ring the terminal bell.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// Command spawned to play a sound, e.g. `paplay /usr/share/sounds/bell.oga`.
    #[serde(default)]
    pub sound_command: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub durations: DurationsConfig,
    #[serde(default)]
    pub alert: AlertConfig,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_focus_minutes() -> u32 {
    DEFAULT_FOCUS_MINUTES
}
fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for DurationsConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bell: true,
            sound_command: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Returns `~/.config/pomodoro[-dev]/` based on POMODORO_ENV.
///
/// Set POMODORO_ENV=dev to use the development directory.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join(".config");

    let env = std::env::var("POMODORO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("pomodoro-dev")
    } else {
        base_dir.join("pomodoro")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                ),
                serde_json::Value::Number(_) => serde_json::Value::Number(
                    value
                        .parse::<u64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                        .into(),
                ),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot set a whole section".into()));
                }
                // Optional strings: an empty value clears them.
                serde_json::Value::Null | serde_json::Value::String(_) if value.is_empty() => {
                    serde_json::Value::Null
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Config file location: `POMODORO_CONFIG` or `<data_dir>/config.toml`.
    pub fn path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into())
            }
        };
        let cfg: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(cfg)
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        let save_failed = |e: std::io::Error| -> CoreError {
            ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(save_failed)?;
        }
        std::fs::write(path, content).map_err(save_failed)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, in memory only.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting durations fall outside their bounds.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: if value.is_empty() {
                    "value cannot be empty".into()
                } else {
                    e.to_string()
                },
            })?;
        updated.durations()?;
        *self = updated;
        Ok(())
    }

    /// Validated duration settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a duration is out of bounds.
    pub fn durations(&self) -> Result<DurationSettings, ConfigError> {
        DurationSettings::new(self.durations.focus_minutes, self.durations.break_minutes)
    }
}
