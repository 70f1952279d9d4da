use plexcleaner_core::ConfigError;
use plexcleaner_db::DbError;
use thiserror::Error;

/// Errors that end a CLI command, each with its own exit code.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// No movie survived the build
    #[error("Library is empty.")]
    EmptyLibrary,

    /// At least one file is missing and `--interrupt` was given
    #[error("Missing media file on the filesystem ({0} movies)")]
    MissingFile(usize),

    /// The export target cannot hold the library
    #[error("Not enough space on export target: {needed} Bytes > {available} Bytes")]
    InsufficientSpace { needed: u64, available: u64 },

    /// Plex database could not be read
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Settings or path options are invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Process exit code. `2` is left to clap for usage errors.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyLibrary => 3,
            Self::MissingFile(_) => 4,
            Self::InsufficientSpace { .. } => 5,
            Self::Database(_) => 6,
            Self::Config(_) => 7,
            Self::Io(_) | Self::Serialize(_) | Self::Other(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            CliError::EmptyLibrary,
            CliError::MissingFile(1),
            CliError::InsufficientSpace {
                needed: 2,
                available: 1,
            },
            CliError::Database(DbError::NotFound("/x".into())),
            CliError::Config(ConfigError::invalid_replacement("x")),
            CliError::other("boom"),
        ];
        let codes: Vec<i32> = errors.iter().map(CliError::exit_code).collect();
        assert_eq!(codes, vec![3, 4, 5, 6, 7, 1]);
        assert!(!codes.contains(&0) && !codes.contains(&2));
    }

    #[test]
    fn test_space_message() {
        let err = CliError::InsufficientSpace {
            needed: 2048,
            available: 1024,
        };
        assert_eq!(
            err.to_string(),
            "Not enough space on export target: 2048 Bytes > 1024 Bytes"
        );
    }
}
