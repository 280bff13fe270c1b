// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for the Lau Trie crate.
//!
//! This module contains the prefix tree and its supporting types.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit error types for every fallible operation
//! - Deterministic iteration wherever results depend on order

pub mod lau_trie;

// Re-export common data structures
pub use lau_trie::{LauTrie, LauTrieError, LauTrieResult, SharedLauTrie, Suggestions};
