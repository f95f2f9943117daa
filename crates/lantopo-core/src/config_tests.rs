//! Tests for layered configuration loading.

use std::io::Write;

use crate::config::Settings;

#[test]
fn test_defaults() {
    let settings = Settings::load(None).unwrap();
    assert_eq!(settings.graph.capacity, 50);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_toml_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[graph]\ncapacity = 8\n\n[logging]\nlevel = \"debug\"").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.graph.capacity, 8);
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[graph]\ncapacity = 12").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.graph.capacity, 12);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let settings = Settings::load(Some(std::path::Path::new("/nonexistent/lantopo.toml")));
    // figment's Toml::file is lenient about missing files.
    assert_eq!(settings.unwrap(), Settings::default());
}

#[test]
fn test_settings_round_trip() {
    let settings = Settings::default();
    let rendered = toml::to_string(&settings).unwrap();
    let restored: Settings = toml::from_str(&rendered).unwrap();
    assert_eq!(settings, restored);
}
