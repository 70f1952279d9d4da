//! Title canonicalization and similarity scoring.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A literal substitution applied to every occurrence of `from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Ordered replacement rules turning a catalog title into a filesystem title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRules {
    replacements: Vec<Replacement>,
}

impl Default for TitleRules {
    fn default() -> Self {
        Self {
            replacements: vec![Replacement::new("&", "and")],
        }
    }
}

impl TitleRules {
    /// Rules with no substitutions at all.
    pub fn empty() -> Self {
        Self {
            replacements: Vec::new(),
        }
    }

    /// Append a rule, applied after every existing one.
    pub fn with(mut self, replacement: Replacement) -> Self {
        self.replacements.push(replacement);
        self
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    /// An empty pattern would match between every character.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(r) = self.replacements.iter().find(|r| r.from.is_empty()) {
            return Err(ConfigError::invalid_replacement(format!(
                "empty pattern (replacement '{}')",
                r.to
            )));
        }
        Ok(())
    }

    /// Apply every rule in order.
    pub fn canonicalize(&self, title: &str) -> String {
        self.replacements
            .iter()
            .fold(title.to_string(), |acc, r| acc.replace(&r.from, &r.to))
    }
}

/// Jaro-Winkler refuses to score an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnscorableTitle;

/// Jaro-Winkler similarity in `[0.0, 1.0]`.
pub(crate) fn similarity(raw: &str, canonical: &str) -> Result<f64, UnscorableTitle> {
    if raw.is_empty() || canonical.is_empty() {
        return Err(UnscorableTitle);
    }
    Ok(strsim::jaro_winkler(raw, canonical))
}

#[cfg(test)]
#[path = "tests/title_tests.rs"]
mod tests;
