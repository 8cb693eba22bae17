// Configuration module for the profile card application
// Supplies the static display strings, photo path and window settings

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::profile::ProfileData;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Window settings for the GUI binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 680.0,
            title: "card_sight".to_string(),
        }
    }
}

/// Top-level configuration, loaded from an optional TOML file
///
/// Every field has a default, so a missing file or a partial file
/// is never an error - only malformed TOML or invalid values are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardConfig {
    // 标量字段在前, 保证 TOML 序列化时先于子表输出
    pub log_level: LogLevelConfig,
    pub profile: ProfileData,
    pub window: WindowConfig,
}

/// Log filter level, kept as a plain string for env_logger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogLevelConfig(pub String);

impl Default for LogLevelConfig {
    fn default() -> Self {
        Self("warn".to_string())
    }
}

impl CardConfig {
    /// Load configuration from a TOML file, falling back to defaults
    /// when the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("配置文件 {} 不存在, 使用默认配置", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let config: CardConfig = toml::from_str(&raw)?;
        config.validate()?;

        log::info!("配置加载成功: {}", path.display());
        Ok(config)
    }

    /// Write the current configuration back to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Validate field-level constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.full_name.trim().is_empty() {
            return Err(ConfigError::Invalid("profile.full_name 不能为空".to_string()));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "窗口尺寸非法: {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}
