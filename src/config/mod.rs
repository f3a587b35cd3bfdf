//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Three preferences survive restarts: the display language, the dark-mode
//! flag, and the CRT frame variant. Everything else in the application is
//! transient per-screen state.
//!
//! # Examples
//!
//! ```no_run
//! use archivio::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Toggle dark mode and persist it
//! config.dark_mode = Some(!config.dark_mode.unwrap_or(false));
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::crt::FrameVariant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Archivio";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// UI language code (e.g. "en-US", "fr").
    pub language: Option<String>,
    /// Dark-mode flag. `None` means "follow the system theme".
    #[serde(default)]
    pub dark_mode: Option<bool>,
    /// Preferred CRT monitor frame skin.
    #[serde(default)]
    pub frame_variant: Option<FrameVariant>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            dark_mode: None,
            frame_variant: Some(FrameVariant::default()),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let config = Config {
            language: Some("fr".to_string()),
            dark_mode: Some(true),
            frame_variant: Some(FrameVariant::Pixel),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.dark_mode, config.dark_mode);
        assert_eq!(loaded.frame_variant, config.frame_variant);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert!(loaded.dark_mode.is_none());
    }

    #[test]
    fn unknown_frame_variant_falls_back_to_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "frame_variant = \"teletext\"").expect("failed to write toml");

        // The whole document fails to deserialize, so defaults apply.
        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.frame_variant, Some(FrameVariant::Smooth));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            language: Some("en-US".to_string()),
            dark_mode: Some(false),
            frame_variant: Some(FrameVariant::FourBit),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn double_toggle_round_trips_through_disk() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let mut config = Config::default();
        let original = config.dark_mode.unwrap_or(false);

        for _ in 0..2 {
            let current = config.dark_mode.unwrap_or(false);
            config.dark_mode = Some(!current);
            save_to_path(&config, &config_path).expect("failed to save config");
            config = load_from_path(&config_path).expect("failed to load config");
            assert_eq!(config.dark_mode, Some(!current));
        }

        assert_eq!(config.dark_mode, Some(original));
    }
}
