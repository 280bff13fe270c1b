// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for the Lau Trie crate.
//!
//! Component errors stay close to their component (the trie keeps its own
//! `LauTrieError`); this module gathers them into one crate-level type.

use crate::data_structures::LauTrieError;
use thiserror::Error;

pub mod config;

/// Result type alias used throughout the crate.
pub type LauResult<T> = Result<T, LauError>;

/// Core error enum for the Lau Trie crate.
#[derive(Error, Debug)]
pub enum LauError {
    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] LauTrieError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while reading word lists.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
