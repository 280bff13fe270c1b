// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration module for the Lau Trie.
//!
//! Settings can be loaded from files (TOML, YAML, JSON) and overridden with
//! environment variables. All configuration values are validated before use.

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod trie;

pub use trie::LauTrieConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LAU";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LauConfig {
    /// Trie configuration
    pub trie: LauTrieConfig,
}

impl LauConfig {
    /// Renders the configuration as a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

impl Validate for LauConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()
    }
}

/// Configuration loader layering defaults, an optional file and the environment.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// Environment overrides use `__` as the separator, e.g.
    /// `LAU__TRIE__CASE_SENSITIVE=true`.
    ///
    /// # Returns
    ///
    /// * `Ok(LauConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<LauConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&LauConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError(format!(
                "Error parsing config file {}: {cause}",
                uri.unwrap_or_default()
            )),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let lau_config: LauConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        lau_config.validate()?;
        tracing::debug!(
            case_sensitive = lau_config.trie.case_sensitive,
            default_max_results = lau_config.trie.default_max_results,
            "Loaded configuration"
        );

        Ok(lau_config)
    }

    /// Loads the configuration, falling back to defaults when the file is missing.
    pub fn load_or_default(&self) -> ConfigResult<LauConfig> {
        match self.load() {
            Ok(config) => Ok(config),
            Err(ConfigError::FileNotFound(path)) => {
                tracing::warn!("Configuration file not found at: {}", path.display());
                let fallback = ConfigLoader {
                    config_path: None,
                    env_prefix: self.env_prefix.clone(),
                };
                fallback.load()
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(None::<PathBuf>, ENV_PREFIX)
    }
}
