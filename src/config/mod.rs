// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_overture::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::{DEFAULT_FEATURE_URL, DEFAULT_LOADER_URL};

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// User preferences persisted between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    #[serde(default)]
    pub clips: ClipsConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Where the two clips come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipsConfig {
    /// Override for the hosted loader clip URL.
    pub loader_url: Option<String>,
    /// Override for the hosted feature clip URL.
    pub feature_url: Option<String>,
    /// Directory holding `loader.webm` / `feature.webm` for offline use.
    /// When set and the files exist, no download happens.
    pub local_dir: Option<PathBuf>,
}

impl ClipsConfig {
    /// Returns the effective loader clip URL.
    pub fn loader_url(&self) -> &str {
        self.loader_url.as_deref().unwrap_or(DEFAULT_LOADER_URL)
    }

    /// Returns the effective feature clip URL.
    pub fn feature_url(&self) -> &str {
        self.feature_url.as_deref().unwrap_or(DEFAULT_FEATURE_URL)
    }
}

/// Presentation of the enter control.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default)]
    pub style: PromptStyle,
}

/// Visual variant of the enter control. Both variants emit the same
/// activation signal; this is a cosmetic choice only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    /// Label plus a circled arrow glyph.
    #[default]
    Badge,
    /// Label only.
    Plain,
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
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
            language: Some("fr".to_string()),
            clips: ClipsConfig {
                loader_url: Some("https://example.com/a.webm".into()),
                feature_url: None,
                local_dir: Some(PathBuf::from("/media/clips")),
            },
            prompt: PromptConfig {
                style: PromptStyle::Plain,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.clips.loader_url, config.clips.loader_url);
        assert_eq!(loaded.clips.local_dir, config.clips.local_dir);
        assert_eq!(loaded.prompt.style, PromptStyle::Plain);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_clip_sources_use_hosted_urls() {
        let config = Config::default();
        assert_eq!(config.clips.loader_url(), DEFAULT_LOADER_URL);
        assert_eq!(config.clips.feature_url(), DEFAULT_FEATURE_URL);
        assert!(config.clips.local_dir.is_none());
    }

    #[test]
    fn url_overrides_replace_defaults() {
        let clips = ClipsConfig {
            loader_url: Some("https://example.com/x.webm".into()),
            ..ClipsConfig::default()
        };
        assert_eq!(clips.loader_url(), "https://example.com/x.webm");
        assert_eq!(clips.feature_url(), DEFAULT_FEATURE_URL);
    }
}
