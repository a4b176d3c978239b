//! User configuration file handling
//!
//! Manages settings from ~/.config/tween/settings.json

use crate::core::errors::TweenResult;
use crate::core::settings::TweenSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// User configuration from ~/.config/tween/settings.json
///
/// These settings override built-in defaults but are overridden by
/// whatever the host panel sets at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Preview settings (slider range, default percent, preview UPM)
    pub settings: Option<TweenSettings>,
}

impl ConfigFile {
    /// Get the path to the tween config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("tween")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Get the path to the logs directory
    pub fn logs_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Get the path to the current log file
    pub fn current_log_file() -> PathBuf {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d");
        Self::logs_dir().join(format!("tween-{}.log", timestamp))
    }

    /// Initialize the logs directory
    pub fn initialize_logs_directory() -> TweenResult<()> {
        let logs_dir = Self::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        debug!("Created logs directory: {:?}", logs_dir);
        Ok(())
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> TweenResult<()> {
        let path = Self::config_path();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// The configured settings, or defaults when none are stored
    pub fn settings_or_default(&self) -> TweenSettings {
        self.settings.clone().unwrap_or_default()
    }
}
