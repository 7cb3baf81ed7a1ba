//! Tests for loading configuration from disk.

use gess::{GameEngine, GessConfig, SuicidePolicy};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "suicide = \"forbidden\"").unwrap();
    writeln!(file, "log_filter = \"gess=debug\"").unwrap();

    let config = GessConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.suicide(), SuicidePolicy::Forbidden);
    assert_eq!(config.log_filter(), "gess=debug");

    let engine = GameEngine::with_policy(*config.suicide());
    assert_eq!(engine.policy(), SuicidePolicy::Forbidden);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GessConfig::load_or_default(dir.path().join("gess.toml")).unwrap();
    assert_eq!(config, GessConfig::default());

    let err = GessConfig::from_file(dir.path().join("gess.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "suicide = [").unwrap();
    assert!(GessConfig::load_or_default(file.path()).is_err());
}
