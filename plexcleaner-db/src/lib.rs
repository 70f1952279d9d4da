//! Read-only access to the Plex Media Server library database.
//!
//! Yields one [`RawRecord`](plexcleaner_core::RawRecord) per movie, with
//! database types normalized to text at this boundary.

pub mod records;
pub mod schema;

pub use records::{MOVIE_QUERY, fetch_records};
pub use schema::{DATABASE_RELATIVE_PATH, DbError, database_path, open_library, open_memory};
