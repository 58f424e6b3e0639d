//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use std::path::PathBuf;

use test_case::test_case;

use crate::config::{ConfigLoader, LanaiConfig, Validate};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LanaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary.wildcard_char(), '_');
    assert_eq!(config.dictionary.tst_config().max_word_len, None);
}

/// Test that configuration validation catches invalid values.
#[test_case(|c: &mut LanaiConfig| c.dictionary.wildcard = String::new(), "dictionary.wildcard" ; "empty wildcard")]
#[test_case(|c: &mut LanaiConfig| c.dictionary.wildcard = "**".to_string(), "dictionary.wildcard" ; "two char wildcard")]
#[test_case(|c: &mut LanaiConfig| c.dictionary.max_word_len = Some(0), "dictionary.max_word_len" ; "zero word length")]
#[test_case(|c: &mut LanaiConfig| c.dictionary.default_max_results = 0, "dictionary.default_max_results" ; "zero results")]
#[test_case(|c: &mut LanaiConfig| c.corpus.max_entries = Some(0), "corpus.max_entries" ; "zero entries")]
#[test_case(|c: &mut LanaiConfig| c.log.level = "verbose".to_string(), "log.level" ; "unknown level")]
fn test_config_validation(mutate: fn(&mut LanaiConfig), expected_key: &str) {
    let mut config = LanaiConfig::default();
    mutate(&mut config);

    match config.validate() {
        Err(ConfigError::ValidationError { key, .. }) => assert_eq!(key, expected_key),
        other => panic!("expected validation error for {expected_key}, got {other:?}"),
    }
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "lanai.toml",
            r#"
            [dictionary]
            wildcard = "?"
            default_max_results = 25

            [corpus]
            path = "/srv/words.txt"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "LANAI_TEST_FILE")
        .load()
        .unwrap();

    assert_eq!(config.dictionary.wildcard_char(), '?');
    assert_eq!(config.dictionary.default_max_results, 25);
    assert_eq!(config.corpus.path, Some(PathBuf::from("/srv/words.txt")));

    // Other values should be defaults
    assert_eq!(config.log, LanaiConfig::default().log);
    assert_eq!(config.corpus.max_entries, None);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("lanai_env.toml", "[dictionary]\ndefault_max_results = 25\n")
        .unwrap();

    fixture.set_env("LANAI_TEST_ENV__DICTIONARY__DEFAULT_MAX_RESULTS", "3");
    fixture.set_env("LANAI_TEST_ENV__LOG__LEVEL", "debug");

    let config = ConfigLoader::new(Some(&config_path), "LANAI_TEST_ENV")
        .load()
        .unwrap();

    assert_eq!(config.dictionary.default_max_results, 3);
    assert_eq!(config.log.level, "debug");
}

/// Test that invalid values in a file are rejected at load time.
#[test]
fn test_invalid_file_is_rejected() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("lanai_bad.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let err = ConfigLoader::new(Some(&config_path), "LANAI_TEST_BAD")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

/// Test missing and unsupported configuration files.
#[test]
fn test_bad_config_paths() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    let err = ConfigLoader::new(Some(&missing), "LANAI_TEST_PATHS")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));

    let ini = fixture.create_file("lanai.ini", "[log]\n").unwrap();
    let err = ConfigLoader::new(Some(&ini), "LANAI_TEST_PATHS")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

/// Test that the generated default configuration round-trips through the loader.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&LanaiConfig::default()).unwrap();
    let config_path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "LANAI_TEST_GEN")
        .load()
        .unwrap();
    assert_eq!(config, LanaiConfig::default());
}

/// Test loading without any file uses defaults.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<PathBuf>, "LANAI_TEST_NONE")
        .load()
        .unwrap();
    assert_eq!(config, LanaiConfig::default());
}
