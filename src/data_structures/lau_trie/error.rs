// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lau Trie.

/// Errors that can occur in Lau Trie operations.
///
/// Everything other than a bad argument is handled as a no-op or an empty
/// result, so this enum stays small.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LauTrieError {
    /// An argument was outside its accepted range.
    #[error("Invalid argument {name} = {value}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// What the argument must satisfy.
        reason: &'static str,
    },
}

/// Result type for Lau Trie operations
pub type LauTrieResult<T> = Result<T, LauTrieError>;
