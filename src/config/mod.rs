use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Application configuration (`rtimeclock.conf`, YAML).
///
/// The time-clock data itself (users, settings.json) lives under `data_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_export_format")]
    pub default_export_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_export_format() -> String {
    "xlsx".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            default_export_format: default_export_format(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeclock")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    /// Default location of the data directory
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize the configuration file.
    ///
    /// Returns the config that was (or, in test mode, would have been) written.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Config::default();

        if let Some(dir) = custom_data {
            config.data_dir = dir;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
