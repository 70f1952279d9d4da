use super::*;

#[test]
fn test_empty_settings() {
    let settings = parse_settings("").unwrap();
    assert_eq!(settings, Settings::default());
    let config = settings.library_config(PathConfig::default());
    assert_eq!(config, LibraryConfig::default());
}

#[test]
fn test_full_settings() {
    let settings = parse_settings(
        r#"
        [paths]
        remove_from_path = "mnt"
        append_to_path = "/volume1"

        [title]
        replacements = [{ from = ":", to = " -" }]
        "#,
    )
    .unwrap();
    assert_eq!(settings.paths.remove_from_path.as_deref(), Some("mnt"));

    let config = settings.library_config(PathConfig::new(None, Some("/cli".into())));
    assert_eq!(config.paths.remove_from_path.as_deref(), Some("mnt"));
    assert_eq!(config.paths.append_to_path.as_deref(), Some("/cli"));
    assert_eq!(config.titles.canonicalize("Alien: Resurrection & Co"), "Alien - Resurrection and Co");
}

#[test]
fn test_invalid_settings() {
    assert!(parse_settings("[paths]\nremove_from_path = 3").is_err());
}

#[test]
fn test_missing_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        load_settings(Some(&missing)),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn test_load_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[paths]\nappend_to_path = \"/nas\"\n").unwrap();
    let settings = load_settings(Some(&path)).unwrap();
    assert_eq!(settings.paths.append_to_path.as_deref(), Some("/nas"));
}
