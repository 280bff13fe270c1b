// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, LauConfig, LauTrieConfig, Validate};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LauConfig::default();
    assert!(config.validate().is_ok());
    assert!(!config.trie.case_sensitive);
    assert_eq!(config.trie.default_max_results, 10);
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_toml() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "lau.toml",
            r#"
            [trie]
            case_sensitive = true
            default_max_results = 5
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "LAU_TOML_TEST").load().unwrap();
    assert!(config.trie.case_sensitive);
    assert_eq!(config.trie.default_max_results, 5);
}

/// Missing keys fall back to their defaults.
#[test]
fn test_partial_file_keeps_defaults() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("partial.toml", "[trie]\ncase_sensitive = true\n")
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "LAU_PARTIAL_TEST").load().unwrap();
    assert!(config.trie.case_sensitive);
    assert_eq!(config.trie.default_max_results, 10);
}

/// Test loading configuration from a JSON file written with serde_json.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let expected = LauConfig {
        trie: LauTrieConfig::new().with_default_max_results(3),
    };
    let path = fixture
        .create_file("lau.json", serde_json::to_string(&expected).unwrap())
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "LAU_JSON_TEST").load().unwrap();
    assert_eq!(config, expected);
}

/// Environment variables override file values.
#[test]
fn test_env_overrides_file() {
    let mut fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("env.toml", "[trie]\ndefault_max_results = 5\n")
        .unwrap();
    fixture.set_env("LAU_ENV_TEST__TRIE__DEFAULT_MAX_RESULTS", "7");
    fixture.set_env("LAU_ENV_TEST__TRIE__CASE_SENSITIVE", "true");

    let config = ConfigLoader::new(Some(&path), "LAU_ENV_TEST").load().unwrap();
    assert_eq!(config.trie.default_max_results, 7);
    assert!(config.trie.case_sensitive);
}

/// Invalid values are rejected after loading.
#[test]
fn test_invalid_value_rejected() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("zero.toml", "[trie]\ndefault_max_results = 0\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "LAU_ZERO_TEST").load();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange { .. })));
}

/// Unknown extensions and missing files are reported.
#[test]
fn test_bad_paths() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("lau.ini", "").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&path), "LAU_INI_TEST").load(),
        Err(ConfigError::ParseError(_))
    ));

    let missing = fixture.temp_dir.path().join("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "LAU_MISSING_TEST").load(),
        Err(ConfigError::FileNotFound(_))
    ));
    assert_eq!(
        ConfigLoader::new(Some(&missing), "LAU_MISSING_TEST")
            .load_or_default()
            .unwrap(),
        LauConfig::default()
    );
}

/// The rendered TOML document loads back into the same configuration.
#[test]
fn test_to_toml_string_loads_back() {
    let fixture = TestFixture::new().unwrap();
    let expected = LauConfig {
        trie: LauTrieConfig::new()
            .with_case_sensitive(true)
            .with_default_max_results(4),
    };
    let rendered = expected.to_toml_string().unwrap();
    assert!(rendered.contains("[trie]"));

    let path = fixture.create_file("rendered.toml", rendered).unwrap();
    let config = ConfigLoader::new(Some(&path), "LAU_RENDER_TEST").load().unwrap();
    assert_eq!(config, expected);
}
