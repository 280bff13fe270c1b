// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Shared handle for using one trie from several threads.
//!
//! The trie itself carries no synchronization. This handle puts the whole
//! structure behind a single reader/writer lock: queries share the read lock,
//! every mutation takes the write lock.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{LauTrie, LauTrieResult, LauTrieStats, Suggestions};

/// Cloneable, thread-safe handle to a [`LauTrie`].
#[derive(Debug, Clone, Default)]
pub struct SharedLauTrie {
    inner: Arc<RwLock<LauTrie>>,
}

impl SharedLauTrie {
    /// Wraps an existing trie.
    pub fn new(trie: LauTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// See [`LauTrie::add_word`].
    pub fn add_word<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.write().add_word(word)
    }

    /// See [`LauTrie::remove_word`].
    pub fn remove_word<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.write().remove_word(word)
    }

    /// See [`LauTrie::contains_word`].
    pub fn contains_word<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.read().contains_word(word)
    }

    /// See [`LauTrie::autocomplete_suggestions`].
    pub fn autocomplete_suggestions<P: AsRef<str>>(
        &self,
        prefix: P,
        max_results: i64,
    ) -> LauTrieResult<Suggestions> {
        self.inner.read().autocomplete_suggestions(prefix, max_results)
    }

    /// See [`LauTrie::stats`].
    pub fn stats(&self) -> LauTrieStats {
        self.inner.read().stats()
    }

    /// Runs `f` with shared access to the trie.
    pub fn read<R>(&self, f: impl FnOnce(&LauTrie) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the trie.
    pub fn write<R>(&self, f: impl FnOnce(&mut LauTrie) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl From<LauTrie> for SharedLauTrie {
    fn from(trie: LauTrie) -> Self {
        Self::new(trie)
    }
}
