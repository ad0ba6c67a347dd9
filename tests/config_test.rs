//! Integration tests for Settings file loading with layered precedence.
//!
//! Layers: defaults < global file < explicit file. These tests pass paths
//! directly, so a real global config on the host does not interfere.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use demobank::application::ApplicationError;
use demobank::config::{expand_path, Settings};

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_files_when_loading_then_defaults() {
    let settings = Settings::load_files(None, None).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_file_when_loading_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "demobank.toml",
        r#"
bank_name = "Тест Банк"
projection_months = 6
"#,
    );

    let settings = Settings::load_files(Some(&global), None).expect("load settings");

    assert_eq!(settings.bank_name, "Тест Банк");
    assert_eq!(settings.projection_months, 6);
    assert_eq!(settings.currency_symbol, "₽", "unspecified field keeps default");
    assert!(settings.strict_answers);
}

#[test]
fn given_global_and_explicit_files_when_loading_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "global.toml",
        r#"
bank_name = "Тест Банк"
projection_months = 6
"#,
    );
    let explicit = write_config(
        &dir,
        "local.toml",
        r#"
projection_months = 24
strict_answers = false
currency_symbol = "RUB"
"#,
    );

    let settings = Settings::load_files(Some(&global), Some(&explicit)).expect("load settings");

    assert_eq!(settings.bank_name, "Тест Банк", "global layer survives");
    assert_eq!(settings.projection_months, 24);
    assert_eq!(settings.currency_symbol, "RUB");
    assert!(!settings.strict_answers);
}

#[test]
fn given_missing_explicit_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Settings::load_files(None, Some(&missing)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn given_invalid_toml_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let bad = write_config(&dir, "bad.toml", "projection_months = \"twelve\"\n");

    let err = Settings::load_files(Some(&bad), None).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("parse"));
}

#[test]
fn given_settings_when_showing_then_emits_every_field() {
    let text = Settings::default().to_toml().unwrap();
    for key in [
        "bank_name",
        "projection_months",
        "currency_symbol",
        "strict_answers",
    ] {
        assert!(text.contains(key), "missing {key} in:\n{text}");
    }
}

#[test]
fn given_plain_path_when_expanding_then_unchanged() {
    let path = PathBuf::from("/tmp/demobank.toml");
    assert_eq!(expand_path(&path), path);
}
