use motionkit_core::{Color, Insets, Point};
use motionkit_motion::PathKind;
use motionkit_settings::{Config, SettingsError};
use tempfile::tempdir;

fn customized() -> Config {
    let mut config = Config::default();
    config.surface.width = 640.0;
    config.surface.insets = Insets::new(24.0, 0.0, 12.0, 0.0);
    config.template.path_kind = PathKind::Boundary;
    config.template.fill_color = Color::rgba(0x12, 0x34, 0x56, 0x80);
    config.animation.period_ms = 16;
    config.animation.seed = Some(1234);
    config.demo.clicks = vec![Point::new(1.5, 2.5)];
    config.demo.snapshot_path = Some("frame.png".into());
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = customized();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("path_kind = \"boundary\""));
    assert!(text.contains("#12345680"));
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = customized();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let config = Config::load_or_default(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[animation]\nperiod_ms = 0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_malformed_toml_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[template\nwidth = ").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::TomlError(_)));
}

#[test]
fn test_bad_color_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"template": {"fill_color": "blue"}}"#).unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::JsonError(_)));
}

#[test]
fn test_invalid_config_is_not_saved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::default();
    config.template.width = -3.0;

    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}
