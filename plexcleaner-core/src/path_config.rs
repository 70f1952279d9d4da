//! Rewriting of catalog paths before they are checked on disk.
//!
//! Useful when the catalog was written by a server that mounts the media
//! under a different prefix than the host running the reconciliation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Path rewriting options. The default value rewrites nothing, and an empty
/// option counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Every `"{value}/"` occurrence is removed from the path
    pub remove_from_path: Option<String>,
    /// Prepended verbatim after removal
    pub append_to_path: Option<String>,
}

impl PathConfig {
    pub fn new(remove_from_path: Option<String>, append_to_path: Option<String>) -> Self {
        Self {
            remove_from_path: non_empty(remove_from_path),
            append_to_path: non_empty(append_to_path),
        }
    }

    fn remove(&self) -> Option<&str> {
        self.remove_from_path.as_deref().filter(|v| !v.is_empty())
    }

    fn prefix(&self) -> Option<&str> {
        self.append_to_path.as_deref().filter(|v| !v.is_empty())
    }

    /// Reject a removal value that could never match a `"{value}/"` segment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remove) = self.remove() {
            if remove.ends_with('/') {
                return Err(ConfigError::invalid_path_option(
                    "remove_from_path",
                    format!("'{remove}' must not end with '/'"),
                ));
            }
        }
        Ok(())
    }

    /// Strip first, then prepend.
    pub fn apply(&self, path: &str) -> String {
        let stripped = match self.remove() {
            Some(remove) => path.replace(&format!("{remove}/"), ""),
            None => path.to_string(),
        };
        match self.prefix() {
            Some(prefix) => format!("{prefix}{stripped}"),
            None => stripped,
        }
    }

    /// Fill options that are unset or empty here from `fallback`.
    pub fn or(self, fallback: PathConfig) -> Self {
        Self {
            remove_from_path: non_empty(self.remove_from_path)
                .or(non_empty(fallback.remove_from_path)),
            append_to_path: non_empty(self.append_to_path).or(non_empty(fallback.append_to_path)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "tests/path_config_tests.rs"]
mod tests;
