//! Flat, versioned export of a [`MediaItem`] for logs and reports.

use serde::{Deserialize, Serialize};

use crate::media::MediaItem;

/// Bump when a field is added, removed or renamed.
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Every stored attribute and every computed path of one item.
///
/// Computed paths honor the root override given to [`ExportRecord::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub schema_version: u32,
    pub id: i64,
    pub original_file: String,
    pub file_directory: String,
    pub base_filename: String,
    pub file_extension: String,
    pub title: String,
    pub canonical_title: String,
    pub title_similarity: f64,
    pub year: Option<String>,
    pub size: u64,
    pub frame_rate: f64,
    pub exists: bool,
    pub matched: bool,
    pub duplicate_count: u32,
    pub library_root: String,
    pub studio: Option<String>,
    pub cast: Option<Vec<String>>,
    pub jacket_path: Option<String>,
    pub correct_directory_name: String,
    pub correct_filename: String,
    pub correct_relative_path: String,
    pub correct_absolute_file: String,
    pub correct_absolute_directory: String,
    pub needs_update: bool,
}

impl ExportRecord {
    pub fn new(item: &MediaItem, root_override: Option<&str>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            id: item.id(),
            original_file: item.original_file().to_string(),
            file_directory: item.file_directory().to_string(),
            base_filename: item.base_filename().to_string(),
            file_extension: item.file_extension().to_string(),
            title: item.title().to_string(),
            canonical_title: item.canonical_title().to_string(),
            title_similarity: item.title_similarity(),
            year: item.year().map(str::to_string),
            size: item.size(),
            frame_rate: item.frame_rate(),
            exists: item.exists(),
            matched: item.is_matched(),
            duplicate_count: item.duplicate_count(),
            library_root: item.library_root().to_string(),
            studio: item.studio().map(str::to_string),
            cast: item.cast().map(<[String]>::to_vec),
            jacket_path: item.jacket_path().map(str::to_string),
            correct_directory_name: item.correct_directory_name(),
            correct_filename: item.correct_filename(),
            correct_relative_path: item.correct_relative_path(),
            correct_absolute_file: item.correct_absolute_file(root_override),
            correct_absolute_directory: item.correct_absolute_directory(root_override),
            needs_update: item.needs_update(root_override),
        }
    }
}

impl MediaItem {
    /// The item as a single-line JSON object.
    pub fn to_json(&self, root_override: Option<&str>) -> Result<String, serde_json::Error> {
        serde_json::to_string(&ExportRecord::new(self, root_override))
    }
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
