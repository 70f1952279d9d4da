//! Library aggregation: one pass over catalog rows, folding totals.

use std::collections::BTreeSet;

use crate::error::{ConfigError, RecordError};
use crate::events::LibraryEvent;
use crate::media::MediaItem;
use crate::path_config::PathConfig;
use crate::record::RawRecord;
use crate::title::TitleRules;
use crate::util::BYTES_TO_GB;

/// Read-only configuration shared by every row of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryConfig {
    pub paths: PathConfig,
    pub titles: TitleRules,
}

impl LibraryConfig {
    pub fn new(paths: PathConfig, titles: TitleRules) -> Self {
        Self { paths, titles }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.paths.validate()?;
        self.titles.validate()
    }
}

/// Row counters gathered during a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryStats {
    /// Items kept in the library
    pub retained: usize,
    /// Rows discarded because the catalog flags them as duplicates
    pub duplicates: usize,
    /// Rows that could not be turned into items
    pub rejected: usize,
    /// Retained items whose file is missing on disk
    pub missing: usize,
    /// Retained items without external agent metadata
    pub unmatched: usize,
}

impl LibraryStats {
    fn merge(self, other: Self) -> Self {
        Self {
            retained: self.retained + other.retained,
            duplicates: self.duplicates + other.duplicates,
            rejected: self.rejected + other.rejected,
            missing: self.missing + other.missing,
            unmatched: self.unmatched + other.unmatched,
        }
    }
}

/// Retained items plus the aggregates computed over them.
#[derive(Debug, Clone, Default)]
pub struct Library {
    items: Vec<MediaItem>,
    roots: BTreeSet<String>,
    effective_size: u64,
    has_missing_file: bool,
    stats: LibraryStats,
}

impl Library {
    /// Build a library from catalog rows, in source order.
    ///
    /// Bad rows and duplicates are reported to `observer` and skipped. Only an
    /// invalid `config` fails the call. An empty result is left for the
    /// caller to judge.
    pub fn build<I>(
        rows: I,
        config: &LibraryConfig,
        observer: &dyn Fn(LibraryEvent<'_>),
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Result<RawRecord, RecordError>>,
    {
        config.validate()?;

        let mut library = Self::default();
        for row in rows {
            let item = row.and_then(|record| {
                observer(LibraryEvent::RowRead { record: &record });
                MediaItem::new(record, config, observer)
            });
            match item {
                Ok(item) => library.insert(item, observer),
                Err(error) => {
                    observer(LibraryEvent::Rejected { error: &error });
                    library.stats.rejected += 1;
                }
            }
        }

        observer(LibraryEvent::Summary {
            roots: library.roots.len(),
            effective_size: library.effective_size,
        });
        Ok(library)
    }

    /// Fold one item into the aggregates, or discard it as a duplicate.
    fn insert(&mut self, item: MediaItem, observer: &dyn Fn(LibraryEvent<'_>)) {
        if item.is_duplicate() {
            observer(LibraryEvent::Duplicate { item: &item });
            self.stats.duplicates += 1;
            return;
        }

        if !self.roots.contains(item.library_root()) {
            self.roots.insert(item.library_root().to_string());
        }

        // A catalog entry can outlive its file
        if item.exists() && item.is_matched() {
            self.effective_size += item.size();
        }

        if !item.exists() {
            self.has_missing_file = true;
            self.stats.missing += 1;
            observer(LibraryEvent::MissingFile { item: &item });
        }

        if !item.is_matched() {
            self.stats.unmatched += 1;
        }

        self.stats.retained += 1;
        self.items.push(item);
    }

    /// Combine two partial libraries built from disjoint row ranges.
    ///
    /// Items keep `self` first, then `other`; every aggregate is a sum, union
    /// or logical or, so the merge is associative.
    pub fn merge(mut self, other: Library) -> Library {
        self.items.extend(other.items);
        self.roots.extend(other.roots);
        self.effective_size += other.effective_size;
        self.has_missing_file |= other.has_missing_file;
        self.stats = self.stats.merge(other.stats);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Distinct library section roots, sorted.
    pub fn roots(&self) -> &BTreeSet<String> {
        &self.roots
    }

    /// Bytes of retained items that exist on disk and are matched.
    pub fn effective_size(&self) -> u64 {
        self.effective_size
    }

    pub fn effective_size_gb(&self) -> f64 {
        self.effective_size as f64 * BYTES_TO_GB
    }

    pub fn has_missing_file(&self) -> bool {
        self.has_missing_file
    }

    pub fn stats(&self) -> LibraryStats {
        self.stats
    }

    /// Items whose file would move for the given root override.
    pub fn needs_update_count(&self, root_override: Option<&str>) -> usize {
        self.items
            .iter()
            .filter(|item| item.needs_update(root_override))
            .count()
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a MediaItem;
    type IntoIter = std::slice::Iter<'a, MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "tests/library_tests.rs"]
mod tests;
