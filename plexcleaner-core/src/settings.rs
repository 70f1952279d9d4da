//! Settings file (path rewriting, extra title rules).
//!
//! Lives at `~/.config/plexcleaner/settings.toml` unless a path is given.
//! A missing default file means default settings; a missing explicit file
//! is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::library::LibraryConfig;
use crate::path_config::PathConfig;
use crate::title::{Replacement, TitleRules};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathConfig,
    pub title: TitleSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSettings {
    /// Applied after the built-in `&` → `and` rule
    pub replacements: Vec<Replacement>,
}

/// Canonical path to the settings file: `~/.config/plexcleaner/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("plexcleaner").join("settings.toml")
}

/// Load settings from `explicit`, or from [`settings_path`] when it exists.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let default = settings_path();
            if !default.exists() {
                return Ok(Settings::default());
            }
            default
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_settings(&contents).map_err(|message| ConfigError::Parse {
        path: path.display().to_string(),
        message,
    })
}

/// Parse the TOML body of a settings file.
pub fn parse_settings(contents: &str) -> Result<Settings, String> {
    toml::from_str(contents).map_err(|e| e.to_string())
}

impl Settings {
    /// Library configuration, with `overrides` taking precedence over the file.
    pub fn library_config(self, overrides: PathConfig) -> LibraryConfig {
        let titles = self
            .title
            .replacements
            .into_iter()
            .fold(TitleRules::default(), TitleRules::with);
        LibraryConfig::new(overrides.or(self.paths), titles)
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
