pub(crate) mod export;
pub(crate) mod plan;
pub(crate) mod stats;

use std::io;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use plexcleaner_core::{Library, PathConfig, load_settings, log_event};
use plexcleaner_db::{database_path, fetch_records, open_library};

use crate::cli_types::GlobalArgs;
use crate::error::CliError;

/// Read the Plex database and build the library with the configured path rewriting.
pub(crate) fn load_library(global: &GlobalArgs) -> Result<Library, CliError> {
    let settings = load_settings(global.config.as_deref())?;
    let overrides = PathConfig::new(
        global.remove_from_path.clone(),
        global.append_to_path.clone(),
    );
    let config = settings.library_config(overrides);

    let db_path = database_path(&global.plex_home, global.database_override.as_deref());
    log::info!(
        "Reading Plex database: {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let conn = open_library(&db_path)?;
    let rows = fetch_records(&conn, global.limit)?;

    Ok(Library::build(rows, &config, &log_event)?)
}

/// Absolute form of a user-given root, with symlinks resolved when it exists.
pub(crate) fn absolute_root(path: &Path) -> io::Result<PathBuf> {
    path.canonicalize().or_else(|_| std::path::absolute(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_root_becomes_absolute() {
        let cwd = std::env::current_dir().unwrap().canonicalize().unwrap();
        assert_eq!(absolute_root(Path::new(".")).unwrap(), cwd);

        let missing = absolute_root(Path::new("not-yet-created")).unwrap();
        assert!(missing.is_absolute());
        assert!(missing.ends_with("not-yet-created"));
    }

    #[test]
    fn test_existing_root_is_canonical() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");
        std::fs::create_dir(&nested).unwrap();
        let roundabout = nested.join("..").join("out");
        assert_eq!(
            absolute_root(&roundabout).unwrap(),
            nested.canonicalize().unwrap()
        );
    }
}
