use super::*;
use crate::fixtures::{item, record};

#[test]
fn export_carries_fields_and_computed_paths() {
    let mut raw = record(9, "Tom & Jerry", "/data/Movies/tj/tj.avi");
    raw.studio = Some("MGM".into());
    let movie = item(raw);
    let export = ExportRecord::new(&movie, None);

    assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
    assert_eq!(export.id, 9);
    assert_eq!(export.canonical_title, "Tom and Jerry");
    assert_eq!(export.file_extension, ".avi");
    assert_eq!(export.correct_directory_name, "MGM - Tom and Jerry (1992)");
    assert_eq!(export.correct_filename, "MGM - 1992 - Tom and Jerry.avi");
    assert_eq!(export.correct_absolute_file, movie.correct_absolute_file(None));
    assert_eq!(export.studio.as_deref(), Some("MGM"));
    assert_eq!(export.cast, Some(Vec::new()));
    assert!(export.matched);
    assert!(export.needs_update);
}

#[test]
fn unmatched_export_has_null_external_fields() {
    let mut raw = record(3, "Home", "/m/home.mp4");
    raw.guid = "local://3".into();
    let json: serde_json::Value =
        serde_json::from_str(&item(raw).to_json(None).unwrap()).unwrap();

    assert_eq!(json["matched"], serde_json::Value::Bool(false));
    assert!(json["studio"].is_null());
    assert!(json["cast"].is_null());
    assert!(json["jacket_path"].is_null());
}

#[test]
fn json_is_reproducible_and_round_trips() {
    let movie = item(record(4, "Heat", "/m/heat/heat.mkv"));
    let first = movie.to_json(Some("/export")).unwrap();
    let second = movie.to_json(Some("/export")).unwrap();
    assert_eq!(first, second);
    assert!(!first.contains('\n'));

    let parsed: ExportRecord = serde_json::from_str(&first).unwrap();
    assert_eq!(parsed, ExportRecord::new(&movie, Some("/export")));
    assert_eq!(parsed.correct_absolute_directory, "/export/Heat (1992)");
}

#[test]
fn json_field_order_is_fixed() {
    let json = item(record(1, "Heat", "/m/heat.mkv")).to_json(None).unwrap();
    assert!(json.starts_with("{\"schema_version\":1,\"id\":1,\"original_file\":"));
    assert!(json.ends_with("\"needs_update\":true}"));
}
