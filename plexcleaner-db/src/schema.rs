//! Locating and opening the Plex library database.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Plex database not found at {}", .0.display())]
    NotFound(PathBuf),
}

/// Library database, relative to the Plex installation root.
pub const DATABASE_RELATIVE_PATH: &str = "Library/Application Support/Plex Media Server/Plug-in Support/Databases/com.plexapp.plugins.library.db";

/// Database location: `database_override` if given, else under `plex_home`.
pub fn database_path(plex_home: &Path, database_override: Option<&Path>) -> PathBuf {
    match database_override {
        Some(path) => path.to_path_buf(),
        None => plex_home.join(DATABASE_RELATIVE_PATH),
    }
}

/// Open the library database read-only. Plex keeps writing to it while running.
pub fn open_library(path: &Path) -> Result<Connection, DbError> {
    if !path.is_file() {
        return Err(DbError::NotFound(path.to_path_buf()));
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

/// Open an in-memory database holding the tables the movie query reads.
/// Useful for testing.
pub fn open_memory() -> Result<Connection, DbError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(PLEX_SUBSET_SQL)?;
    Ok(conn)
}

/// Columns of the Plex schema touched by [`MOVIE_QUERY`](crate::MOVIE_QUERY).
const PLEX_SUBSET_SQL: &str = "
CREATE TABLE section_locations (
    id INTEGER PRIMARY KEY,
    library_section_id INTEGER,
    root_path VARCHAR(255)
);

CREATE TABLE metadata_items (
    id INTEGER PRIMARY KEY,
    library_section_id INTEGER,
    metadata_type INTEGER,
    guid VARCHAR(255),
    title VARCHAR(255),
    studio VARCHAR(255),
    year INTEGER,
    tags_star VARCHAR(255),
    user_thumb_url VARCHAR(255)
);

CREATE TABLE media_items (
    id INTEGER PRIMARY KEY,
    library_section_id INTEGER,
    section_location_id INTEGER,
    metadata_item_id INTEGER,
    frames_per_second FLOAT
);

CREATE TABLE media_parts (
    id INTEGER PRIMARY KEY,
    media_item_id INTEGER,
    file VARCHAR(255),
    size INTEGER
);
";
