use thiserror::Error;

/// Errors in the configuration shared by every record of a build.
///
/// Fatal to the whole [`Library::build`](crate::Library::build) call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A path rewriting option is present but unusable
    #[error("Invalid path option '{option}': {reason}")]
    InvalidPathOption {
        option: &'static str,
        reason: String,
    },

    /// A title replacement rule is unusable
    #[error("Invalid title replacement: {0}")]
    InvalidReplacement(String),

    /// The settings file could not be read
    #[error("Cannot read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for the settings schema
    #[error("Cannot parse settings file {path}: {message}")]
    Parse { path: String, message: String },
}

impl ConfigError {
    pub fn invalid_path_option(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidPathOption {
            option,
            reason: reason.into(),
        }
    }

    pub fn invalid_replacement(msg: impl Into<String>) -> Self {
        Self::InvalidReplacement(msg.into())
    }
}

/// A single catalog row that cannot become a [`MediaItem`](crate::MediaItem).
///
/// The aggregator logs and skips these; one bad row never aborts a build.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// A required column is NULL or empty
    #[error("Record {id}: missing required field '{field}'")]
    MissingField { id: i64, field: &'static str },

    /// A column holds a value outside its domain
    #[error("Record {id}: invalid {field}: {reason}")]
    InvalidField {
        id: i64,
        field: &'static str,
        reason: String,
    },
}

impl RecordError {
    pub fn missing(id: i64, field: &'static str) -> Self {
        Self::MissingField { id, field }
    }

    pub fn invalid(id: i64, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            id,
            field,
            reason: reason.into(),
        }
    }

    /// Identifier of the offending row.
    pub fn record_id(&self) -> i64 {
        match self {
            Self::MissingField { id, .. } | Self::InvalidField { id, .. } => *id,
        }
    }
}
