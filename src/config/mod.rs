// SPDX-License-Identifier: MPL-2.0
//! This module handles the scrub bar's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_scrubber::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.scrubbing_enabled = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.scrubbing_enabled, Some(false));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
use crate::scrub::speed::{SpeedTable, SpeedTier};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedScrubber";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scrubbing_enabled: Option<bool>,
    #[serde(default)]
    pub handle_radius: Option<f32>,
    #[serde(default)]
    pub speed_tiers: Option<Vec<SpeedTier>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scrubbing_enabled: Some(true),
            handle_radius: Some(defaults::DEFAULT_HANDLE_RADIUS),
            speed_tiers: None,
        }
    }
}

impl Config {
    /// Speed table described by this configuration, or the default tiers
    /// when none are configured.
    pub fn speed_table(&self) -> SpeedTable {
        match &self.speed_tiers {
            Some(tiers) => SpeedTable::from_tiers(tiers.iter().copied()),
            None => SpeedTable::default(),
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
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            scrubbing_enabled: Some(false),
            handle_radius: Some(14.0),
            speed_tiers: Some(vec![
                SpeedTier {
                    distance: 0.0,
                    multiplier: 1.0,
                },
                SpeedTier {
                    distance: 80.0,
                    multiplier: 0.3,
                },
            ]),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.scrubbing_enabled, config.scrubbing_enabled);
        assert_eq!(loaded.handle_radius, config.handle_radius);
        assert_eq!(loaded.speed_tiers, config.speed_tiers);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.scrubbing_enabled, Some(true));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            scrubbing_enabled: Some(true),
            handle_radius: Some(10.0),
            speed_tiers: None,
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_enables_scrubbing() {
        let config = Config::default();
        assert_eq!(config.scrubbing_enabled, Some(true));
        assert_eq!(config.handle_radius, Some(defaults::DEFAULT_HANDLE_RADIUS));
        assert!(config.speed_tiers.is_none());
    }

    #[test]
    fn speed_table_falls_back_to_default_tiers() {
        let config = Config::default();
        let table = config.speed_table();
        assert_eq!(table.speed_at(0.0), 1.0);
        assert_eq!(table.speed_at(150.0), 0.1);
    }

    #[test]
    fn speed_table_uses_configured_tiers() {
        let config = Config {
            speed_tiers: Some(vec![
                SpeedTier {
                    distance: 0.0,
                    multiplier: 1.0,
                },
                SpeedTier {
                    distance: 30.0,
                    multiplier: 0.2,
                },
            ]),
            ..Config::default()
        };
        let table = config.speed_table();
        assert_eq!(table.speed_at(29.0), 1.0);
        assert_eq!(table.speed_at(30.0), 0.2);
    }
}
