//! Configuration tests

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// The generated template must parse back into the same values
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved.theme, config.theme);
    assert_eq!(resolved.compact_width, config.compact_width);
    assert_eq!(resolved.scroll, config.scroll);
    assert_eq!(resolved.features, config.features);
    assert_eq!(resolved.logging.level, config.logging.level);
    assert_eq!(resolved.logging.file_rotation, config.logging.file_rotation);
    assert_eq!(resolved.logging.file_prefix, config.logging.file_prefix);
}

#[test]
fn test_config_roundtrip_custom() {
    let mut config = Config::default();
    config.theme = "Nord".to_string();
    config.compact_width = 100;
    config.scroll.smooth = false;
    config.features.footer = false;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let resolved = Config::resolve(parsed, no_env);

    assert_eq!(resolved.theme, "Nord");
    assert_eq!(resolved.compact_width, 100);
    assert!(!resolved.scroll.smooth);
    assert!(!resolved.features.footer);
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(config.theme, DEFAULT_THEME);
    assert_eq!(config.compact_width, DEFAULT_COMPACT_WIDTH);
    assert!(config.scroll.smooth);
    assert_eq!(config.scroll.frame_ms, 16);
    assert!(config.features.mouse);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_partial_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "Dark"

[scroll]
frame_ms = 33
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.theme, "Dark");
    assert_eq!(config.scroll.frame_ms, 33);
    assert!(config.scroll.smooth, "unset keys keep defaults");
    assert_eq!(config.compact_width, DEFAULT_COMPACT_WIDTH);
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "Dark"
compact_width = 70

[scroll]
smooth = true

[logging]
level = "warn"
"#,
    )
    .unwrap();
    let env = env_from(&[
        ("FOLIO_THEME", "Light"),
        ("FOLIO_COMPACT_WIDTH", "120"),
        ("FOLIO_SMOOTH_SCROLL", "0"),
        ("FOLIO_LOG_LEVEL", "debug"),
    ]);
    let config = Config::resolve(file, env);

    assert_eq!(config.theme, "Light");
    assert_eq!(config.compact_width, 120);
    assert!(!config.scroll.smooth);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_invalid_env_values_fall_through() {
    let file: FileConfig = toml::from_str("compact_width = 64").unwrap();
    let env = env_from(&[
        ("FOLIO_COMPACT_WIDTH", "wide"),
        ("FOLIO_SMOOTH_SCROLL", "maybe"),
    ]);
    let config = Config::resolve(file, env);

    assert_eq!(config.compact_width, 64);
    assert!(config.scroll.smooth);
}

#[test]
fn test_zero_frame_interval_is_clamped() {
    let file: FileConfig = toml::from_str("[scroll]\nframe_ms = 0").unwrap();
    let config = Config::resolve(file, no_env);
    assert_eq!(config.scroll.frame_ms, 1);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
}

// ─────────────────────────────────────────────────────────────────────────────
// File I/O
// ─────────────────────────────────────────────────────────────────────────────

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("folio-config-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_missing_file_is_not_an_error() {
    let dir = scratch_dir("missing");
    let file = Config::read_file_config(&dir.join("config.toml")).unwrap();
    assert!(file.theme.is_none());
}

#[test]
fn test_malformed_file_names_path() {
    let dir = scratch_dir("malformed");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "theme = [unterminated").unwrap();

    let err = Config::read_file_config(&path).unwrap_err();
    assert!(format!("{err}").contains("config.toml"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_write_default_then_read() {
    let dir = scratch_dir("write");
    let path = dir.join("nested").join("config.toml");

    Config::write_default(&path).unwrap();
    let file = Config::read_file_config(&path).unwrap();
    assert_eq!(file.theme.as_deref(), Some(DEFAULT_THEME));

    let _ = std::fs::remove_dir_all(&dir);
}
