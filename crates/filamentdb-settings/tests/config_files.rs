use filamentdb_core::{BarOverflow, MaterialFamily};
use filamentdb_settings::{Config, SettingsError};
use filamentdb_ui::ViewMode;
use tempfile::tempdir;

fn custom() -> Config {
    let mut config = Config::default();
    config.display.default_family = MaterialFamily::Esun;
    config.display.default_view = ViewMode::Table;
    config.display.bar_overflow = BarOverflow::Allow;
    config.display.show_ticks = false;
    config.display.bar_width = 30;
    config
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    custom().save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), custom());
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    custom().save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("default_family = \"esun\""));
    assert_eq!(Config::load_from_file(&path).unwrap(), custom());
}

#[test]
fn test_invalid_file_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[display]\ncolumn_width = 2\n").unwrap();
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid { .. }));
}

#[test]
fn test_malformed_json_reports_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path).unwrap_err(),
        SettingsError::Json(_)
    ));
}

#[test]
fn test_explicit_path_wins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    custom().save_to_file(&path).unwrap();
    let config = Config::load_or_default(Some(path.as_path())).unwrap();
    assert_eq!(config.display.default_view, ViewMode::Table);
}

#[test]
fn test_missing_explicit_path_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Config::load_or_default(Some(path.as_path())).unwrap_err(),
        SettingsError::Io(_)
    ));
}
