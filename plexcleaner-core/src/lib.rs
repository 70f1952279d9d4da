//! Reconciliation of Plex movie catalog rows against the filesystem.
//!
//! Each [`RawRecord`] becomes a [`MediaItem`] carrying a canonical title,
//! canonical paths and integrity flags; a [`Library`] folds them into
//! totals. Nothing here moves files or writes to a database.

pub mod error;
pub mod events;
pub mod export;
pub mod jacket;
pub mod library;
pub mod media;
pub mod naming;
pub mod path_config;
pub mod record;
pub mod settings;
pub mod title;
pub mod util;

#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod fixtures;

pub use error::{ConfigError, RecordError};
pub use events::{LibraryEvent, ignore_event, log_event};
pub use export::{EXPORT_SCHEMA_VERSION, ExportRecord};
pub use library::{Library, LibraryConfig, LibraryStats};
pub use media::{ExternalMetadata, MediaItem};
pub use path_config::PathConfig;
pub use record::{LOCAL_GUID_SCHEME, RawRecord};
pub use settings::{Settings, load_settings, settings_path};
pub use title::{Replacement, TitleRules};
