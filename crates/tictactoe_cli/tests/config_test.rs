//! Tests for loading play configuration from TOML files.

use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use tictactoe_cli::PlayConfig;
use tictactoe_engine::Symbol;

#[test]
fn test_from_file_reads_all_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(
        &path,
        "symbol = \"O\"\nthinking_delay_ms = 50\nshow_hints = true\n",
    )
    .expect("Failed to write TOML");

    let config = PlayConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.symbol(), Symbol::O);
    assert_eq!(config.thinking_delay(), Duration::from_millis(50));
    assert!(*config.show_hints());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("partial.toml");
    fs::write(&path, "show_hints = true\n").expect("Failed to write TOML");

    let config = PlayConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.symbol(), Symbol::X);
    assert_eq!(*config.thinking_delay_ms(), 500);
    assert!(*config.show_hints());
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.toml");

    let err = PlayConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "symbol = \"Z\"").expect("Failed to write TOML");

    let err = PlayConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
