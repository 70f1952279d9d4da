use std::cell::RefCell;

use super::*;
use crate::events::ignore_event;
use crate::fixtures::{item, record};
use crate::path_config::PathConfig;

#[test]
fn splits_original_file() {
    let movie = item(record(1, "Heat", "/data/Movies/Heat/heat.1995.mkv"));
    assert_eq!(movie.original_file(), "/data/Movies/Heat/heat.1995.mkv");
    assert_eq!(movie.file_directory(), "/data/Movies/Heat");
    assert_eq!(movie.base_filename(), "heat.1995");
    assert_eq!(movie.file_extension(), ".mkv");
}

#[test]
fn file_without_extension() {
    let movie = item(record(1, "Heat", "/data/Movies/Heat/heat"));
    assert_eq!(movie.base_filename(), "heat");
    assert_eq!(movie.file_extension(), "");
}

#[test]
fn canonicalizes_and_scores_title() {
    let movie = item(record(1, "Tom & Jerry", "/m/t.avi"));
    assert_eq!(movie.title(), "Tom & Jerry");
    assert_eq!(movie.canonical_title(), "Tom and Jerry");
    assert!(movie.title_similarity() > 0.9 && movie.title_similarity() < 1.0);
}

#[test]
fn empty_title_scores_zero_and_notifies() {
    let seen = RefCell::new(Vec::new());
    let movie = MediaItem::new(
        record(7, "", "/m/t.avi"),
        &LibraryConfig::default(),
        &|event| {
            if let LibraryEvent::SimilarityUnscored { id, .. } = event {
                seen.borrow_mut().push(id);
            }
        },
    )
    .unwrap();
    assert_eq!(movie.title_similarity(), 0.0);
    assert_eq!(*seen.borrow(), vec![7]);
}

#[test]
fn applies_path_configuration_first() {
    let config = LibraryConfig::new(
        PathConfig::new(Some("share".into()), Some("/volume1".into())),
        Default::default(),
    );
    let movie = MediaItem::new(
        record(1, "Heat", "/share/Movies/Heat/heat.mkv"),
        &config,
        &ignore_event,
    )
    .unwrap();
    assert_eq!(movie.original_file(), "/volume1/Movies/Heat/heat.mkv");
    assert_eq!(movie.file_directory(), "/volume1/Movies/Heat");
}

#[test]
fn empty_year_is_absent() {
    let mut raw = record(1, "Heat", "/m/heat.mkv");
    raw.year = Some(String::new());
    assert_eq!(item(raw).year(), None);
}

#[test]
fn matched_item_has_external_metadata() {
    let mut raw = record(1, "Heat", "/m/heat.mkv");
    raw.studio = Some("Warner Bros.".into());
    raw.cast_tags = Some("Al Pacino|Robert De Niro".into());
    let movie = item(raw);

    assert!(movie.is_matched());
    assert_eq!(movie.studio(), Some("Warner Bros."));
    assert_eq!(
        movie.cast().unwrap(),
        &["Al Pacino".to_string(), "Robert De Niro".to_string()]
    );
    assert_eq!(
        movie.jacket_path(),
        Some(
            "6/03061b4128279d5d2c08f6625cc4eef087ffd7a.bundle/Contents/_stored/posters/com.plexapp.agents.imdb_5f1c"
        )
    );
}

#[test]
fn matched_item_without_cast_has_empty_cast() {
    let movie = item(record(1, "Heat", "/m/heat.mkv"));
    assert_eq!(movie.cast(), Some(&[] as &[String]));
    assert_eq!(movie.studio(), None);
}

#[test]
fn local_guid_has_no_external_metadata() {
    let mut raw = record(1, "Heat", "/m/heat.mkv");
    raw.guid = "local://abc".into();
    raw.studio = Some("MGM".into());
    raw.cast_tags = Some("Someone".into());
    let movie = item(raw);

    assert!(!movie.is_matched());
    assert!(movie.external().is_none());
    assert_eq!(movie.studio(), None);
    assert_eq!(movie.cast(), None);
    assert_eq!(movie.jacket_path(), None);
    assert_eq!(movie.metadata_jacket(std::path::Path::new("/plex")), None);
}

#[test]
fn metadata_jacket_under_plex_home() {
    let movie = item(record(1, "Heat", "/m/heat.mkv"));
    let jacket = movie
        .metadata_jacket(std::path::Path::new("/var/lib/plexmediaserver"))
        .unwrap();
    assert!(jacket.starts_with(
        "/var/lib/plexmediaserver/Library/Application Support/Plex Media Server/Metadata/Movies/6"
    ));
}

#[test]
fn existence_is_checked_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("heat.mkv");
    std::fs::write(&present, b"x").unwrap();
    let missing = dir.path().join("gone.mkv");

    assert!(item(record(1, "Heat", present.to_str().unwrap())).exists());
    assert!(!item(record(2, "Gone", missing.to_str().unwrap())).exists());
}

#[test]
fn rejects_rows_without_a_file() {
    let err = MediaItem::new(record(3, "Heat", "  "), &LibraryConfig::default(), &ignore_event)
        .unwrap_err();
    assert_eq!(err, RecordError::missing(3, "original_file"));

    let err = MediaItem::new(
        record(4, "Heat", "/data/Movies/"),
        &LibraryConfig::default(),
        &ignore_event,
    )
    .unwrap_err();
    assert_eq!(err.record_id(), 4);
}

#[test]
fn rejects_zero_duplicate_count() {
    let mut raw = record(5, "Heat", "/m/heat.mkv");
    raw.duplicate_count = 0;
    assert!(MediaItem::new(raw, &LibraryConfig::default(), &ignore_event).is_err());
}
