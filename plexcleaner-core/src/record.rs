//! Raw catalog rows as handed over by a record source.

use serde::{Deserialize, Serialize};

/// GUID scheme used by Plex for items with no external agent match.
pub const LOCAL_GUID_SCHEME: &str = "local://";

/// One movie row of the catalog, in source column order.
///
/// All text is already normalized to `String` by the record source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: i64,
    pub title: String,
    /// Absolute path of the media file as stored in the catalog
    pub original_file: String,
    pub year: Option<String>,
    pub size: u64,
    pub frame_rate: f64,
    /// Agent GUID, e.g. `com.plexapp.agents.imdb://tt0111161?lang=en`
    pub guid: String,
    /// Number of media parts the catalog holds for this entry
    pub duplicate_count: u32,
    /// Artwork reference, e.g. `metadata://posters/com.plexapp.agents.imdb_1a2b`
    pub jacket: String,
    /// Root of the library section the file belongs to
    pub library_root: String,
    pub studio: Option<String>,
    /// Cast names joined with `|`
    pub cast_tags: Option<String>,
}

impl RawRecord {
    /// Whether the GUID points at external agent metadata.
    pub fn is_matched(&self) -> bool {
        !self.guid.starts_with(LOCAL_GUID_SCHEME)
    }

    /// Cast names in catalog order, each trimmed of surrounding whitespace.
    /// Names left empty after trimming are dropped.
    pub fn cast(&self) -> Vec<String> {
        self.cast_tags
            .as_deref()
            .map(|tags| {
                tags.split('|')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
