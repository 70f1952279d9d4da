//! Fully resolved catalog entries.

use std::path::{Path, PathBuf};

use crate::error::RecordError;
use crate::events::LibraryEvent;
use crate::jacket;
use crate::library::LibraryConfig;
use crate::record::RawRecord;
use crate::title;

/// Fields that only exist for items matched to external agent metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalMetadata {
    pub studio: Option<String>,
    /// Cast names in catalog order
    pub cast: Vec<String>,
    /// Sharded jacket path relative to the movie metadata root
    pub jacket_path: String,
}

/// One catalog movie after path rewriting, title canonicalization and the
/// filesystem check. Built once; every derived path is a pure function of it.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub(crate) id: i64,
    pub(crate) original_file: String,
    pub(crate) file_directory: String,
    pub(crate) base_filename: String,
    pub(crate) file_extension: String,
    pub(crate) title: String,
    pub(crate) canonical_title: String,
    pub(crate) title_similarity: f64,
    pub(crate) year: Option<String>,
    pub(crate) size: u64,
    pub(crate) frame_rate: f64,
    pub(crate) exists: bool,
    pub(crate) duplicate_count: u32,
    pub(crate) library_root: String,
    pub(crate) external: Option<ExternalMetadata>,
}

impl MediaItem {
    /// Resolve a raw row.
    ///
    /// Fails only when the row cannot name a media file at all. An empty
    /// title is accepted; its similarity falls back to `0.0` and the
    /// observer is told.
    pub fn new(
        record: RawRecord,
        config: &LibraryConfig,
        observer: &dyn Fn(LibraryEvent<'_>),
    ) -> Result<Self, RecordError> {
        let id = record.id;
        if record.original_file.trim().is_empty() {
            return Err(RecordError::missing(id, "original_file"));
        }
        if record.duplicate_count == 0 {
            return Err(RecordError::invalid(id, "duplicate_count", "must be at least 1"));
        }

        let original_file = config.paths.apply(&record.original_file);
        let path = Path::new(&original_file);
        let base_filename = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) if !original_file.ends_with('/') => stem.to_string(),
            _ => {
                return Err(RecordError::invalid(
                    id,
                    "original_file",
                    format!("'{original_file}' does not name a file"),
                ));
            }
        };
        let file_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let file_directory = path
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        let canonical_title = config.titles.canonicalize(&record.title);
        let title_similarity = match title::similarity(&record.title, &canonical_title) {
            Ok(score) => score,
            Err(_) => {
                observer(LibraryEvent::SimilarityUnscored {
                    id,
                    title: &record.title,
                });
                0.0
            }
        };

        let external = record.is_matched().then(|| ExternalMetadata {
            studio: record.studio.clone().filter(|s| !s.trim().is_empty()),
            cast: record.cast(),
            jacket_path: jacket::relative_jacket_path(&record.guid, &record.jacket),
        });

        let exists = path.exists();

        Ok(Self {
            id,
            file_directory,
            base_filename,
            file_extension,
            canonical_title,
            title_similarity,
            year: record.year.filter(|y| !y.trim().is_empty()),
            size: record.size,
            frame_rate: record.frame_rate,
            exists,
            duplicate_count: record.duplicate_count,
            library_root: record.library_root,
            external,
            title: record.title,
            original_file,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Media file path after path configuration.
    pub fn original_file(&self) -> &str {
        &self.original_file
    }

    pub fn file_directory(&self) -> &str {
        &self.file_directory
    }

    pub fn base_filename(&self) -> &str {
        &self.base_filename
    }

    /// Extension including the leading dot, or empty.
    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn canonical_title(&self) -> &str {
        &self.canonical_title
    }

    /// Jaro-Winkler similarity of raw and canonical title; `0.0` if unscorable.
    pub fn title_similarity(&self) -> f64 {
        self.title_similarity
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Whether the media file was present when the item was built.
    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn is_matched(&self) -> bool {
        self.external.is_some()
    }

    pub fn duplicate_count(&self) -> u32 {
        self.duplicate_count
    }

    pub fn is_duplicate(&self) -> bool {
        self.duplicate_count > 1
    }

    pub fn library_root(&self) -> &str {
        &self.library_root
    }

    pub fn external(&self) -> Option<&ExternalMetadata> {
        self.external.as_ref()
    }

    pub fn studio(&self) -> Option<&str> {
        self.external.as_ref().and_then(|e| e.studio.as_deref())
    }

    pub fn cast(&self) -> Option<&[String]> {
        self.external.as_ref().map(|e| e.cast.as_slice())
    }

    pub fn jacket_path(&self) -> Option<&str> {
        self.external.as_ref().map(|e| e.jacket_path.as_str())
    }

    /// Stored jacket under a Plex installation root; `None` when unmatched.
    pub fn metadata_jacket(&self, metadata_home: &Path) -> Option<PathBuf> {
        self.jacket_path()
            .map(|relative| jacket::metadata_jacket_path(metadata_home, relative))
    }
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
