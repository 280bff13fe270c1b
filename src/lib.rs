// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Trie Library
//!
//! An in-memory prefix tree over words with bounded autocomplete suggestion
//! retrieval, for callers such as search-box autocomplete that hold their whole
//! vocabulary in memory.
//!
//! # Architecture
//!
//! - [`data_structures::LauTrie`] owns the nodes and the word-level operations
//! - [`config`] loads and validates trie settings from files and the environment
//! - [`error`] gathers component errors into [`error::LauError`]
//!
//! # Example
//!
//! ```
//! use lau_trie_lib::data_structures::LauTrie;
//!
//! let trie = LauTrie::new(["cat", "car", "card", "dog"], false);
//! assert!(trie.contains_word("CAT"));
//!
//! let suggestions = trie.autocomplete_suggestions("ca", 2).unwrap();
//! assert_eq!(suggestions.len(), 2);
//! ```

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lau Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a trie from `words` using the configuration `loader` resolves.
///
/// A missing configuration file is not an error; defaults are used instead.
pub fn build_trie<I, S>(
    loader: &config::ConfigLoader,
    words: I,
) -> error::LauResult<data_structures::LauTrie>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let config = loader.load_or_default()?;
    Ok(data_structures::LauTrie::with_config(words, config.trie))
}
