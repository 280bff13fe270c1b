// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie configuration module.
//!
//! This module defines the settings a [`LauTrie`](crate::data_structures::LauTrie)
//! is constructed with.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default number of autocomplete suggestions returned by `suggest`.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Configuration for the Lau Trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauTrieConfig {
    /// Whether words keep their case; fixed for the lifetime of a trie
    pub case_sensitive: bool,

    /// Suggestion count used when the caller does not pass one
    pub default_max_results: usize,
}

impl LauTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: false
    /// - default_max_results: 10
    pub fn new() -> Self {
        Self {
            case_sensitive: false,
            default_max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set whether words are matched case-sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the suggestion count used by `suggest`.
    pub fn with_default_max_results(mut self, default_max_results: usize) -> Self {
        self.default_max_results = default_max_results;
        self
    }
}

impl Default for LauTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for LauTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_max_results == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.default_max_results".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
