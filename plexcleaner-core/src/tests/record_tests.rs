use super::*;
use crate::fixtures::record;

#[test]
fn cast_names_are_trimmed_in_catalog_order() {
    let mut raw = record(1, "Heat", "/m/heat.mkv");
    raw.cast_tags = Some(" Al Pacino |Robert De Niro| Val Kilmer".into());
    assert_eq!(raw.cast(), vec!["Al Pacino", "Robert De Niro", "Val Kilmer"]);
}

#[test]
fn blank_cast_names_are_dropped() {
    let mut raw = record(1, "Heat", "/m/heat.mkv");
    raw.cast_tags = Some("Al Pacino|| |Robert De Niro|".into());
    assert_eq!(raw.cast(), vec!["Al Pacino", "Robert De Niro"]);

    raw.cast_tags = None;
    assert!(raw.cast().is_empty());
}

#[test]
fn local_guid_is_unmatched() {
    let mut raw = record(1, "Heat", "/m/heat.mkv");
    assert!(raw.is_matched());
    raw.guid = format!("{LOCAL_GUID_SCHEME}abc");
    assert!(!raw.is_matched());
}
