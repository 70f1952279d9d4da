//! Observer events emitted while a library is built.
//!
//! The core never logs on its own; callers pass an observer, usually
//! [`log_event`], into [`Library::build`](crate::Library::build).

use crate::error::RecordError;
use crate::media::MediaItem;
use crate::record::RawRecord;
use crate::util::format_gigabytes;

/// Something worth reporting about a single row or the finished build.
#[derive(Debug, Clone, Copy)]
pub enum LibraryEvent<'a> {
    /// A row arrived from the record source
    RowRead { record: &'a RawRecord },
    /// A row could not be turned into an item and was skipped
    Rejected { error: &'a RecordError },
    /// Title similarity could not be computed and was set to `0.0`
    SimilarityUnscored { id: i64, title: &'a str },
    /// The catalog holds several parts for this item; it was discarded
    Duplicate { item: &'a MediaItem },
    /// The media file was not found on disk
    MissingFile { item: &'a MediaItem },
    /// All rows consumed
    Summary { roots: usize, effective_size: u64 },
}

/// Observer that ignores everything.
pub fn ignore_event(_event: LibraryEvent<'_>) {}

/// Observer forwarding events to the `log` facade.
pub fn log_event(event: LibraryEvent<'_>) {
    match event {
        LibraryEvent::RowRead { record } => {
            log::debug!("Catalog row {}: {:?}", record.id, record);
        }
        LibraryEvent::Rejected { error } => {
            log::warn!("Skipping catalog row: {}", error);
        }
        LibraryEvent::SimilarityUnscored { id, title } => {
            log::debug!("Cannot score title {:?} of record {}", title, id);
        }
        LibraryEvent::Duplicate { item } => {
            log::warn!(
                "Movie {} has duplicate file. Will not process.",
                item.original_file()
            );
        }
        LibraryEvent::MissingFile { item } => {
            log::warn!(
                "The file {} is missing from the library",
                item.original_file()
            );
        }
        LibraryEvent::Summary {
            roots,
            effective_size,
        } => {
            log::info!("There are {} different media source", roots);
            log::info!("Library size is {}", format_gigabytes(effective_size));
        }
    }
}
