// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Trie Implementation
//!
//! This module provides an in-memory prefix tree over words with bounded
//! autocomplete suggestions. Suggestions are taken from the subtree of the
//! queried prefix first and, when that subtree is too small, topped up from
//! the sibling branches one level above it.

mod error;
mod node;
mod normalize;
mod shared;

#[cfg(test)]
mod tests;

use std::io::BufRead;

use indexmap::IndexSet;
use serde::Serialize;

use crate::config::LauTrieConfig;
use crate::error::LauResult;

pub use error::{LauTrieError, LauTrieResult};
pub use node::{NodeArena, NodeId, TerminalNodes, TrieNode};
pub use normalize::normalize_word;
pub use shared::SharedLauTrie;

/// Words returned by an autocomplete query.
///
/// Deduplicated, iterating in the order the words were collected.
pub type Suggestions = IndexSet<String>;

/// Snapshot of the trie counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LauTrieStats {
    /// Nodes created so far, root excluded
    pub total_nodes: usize,

    /// Nodes currently marking the end of a word
    pub total_terminal_nodes: usize,

    /// Whether the trie matches words case-sensitively
    pub case_sensitive: bool,
}

/// Lau Trie is an in-memory prefix tree for autocomplete lookups.
///
/// Key features:
/// * Case-insensitive word matching (configurable at construction)
/// * Removal only clears the terminal flag, so the node count never shrinks
/// * Reproducible suggestion sets: children iterate in insertion order
///
/// The trie does no internal locking; see [`SharedLauTrie`] for shared access.
#[derive(Debug, Clone)]
pub struct LauTrie {
    /// Node storage, root at `NodeId::ROOT`
    nodes: NodeArena,

    /// Configuration options
    config: LauTrieConfig,

    /// Nodes ever created, root excluded
    total_nodes: usize,

    /// Nodes currently flagged terminal
    total_terminal_nodes: usize,
}

impl LauTrie {
    /// Creates a trie holding `words`.
    ///
    /// # Arguments
    ///
    /// * `words` - Initial vocabulary, possibly empty.
    /// * `case_sensitive` - Whether words keep their case.
    pub fn new<I, S>(words: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, LauTrieConfig::new().with_case_sensitive(case_sensitive))
    }

    /// Creates a trie holding `words` with the specified configuration.
    pub fn with_config<I, S>(words: I, config: LauTrieConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self {
            nodes: NodeArena::new(),
            config,
            total_nodes: 0,
            total_terminal_nodes: 0,
        };
        trie.add_words(words);
        trie
    }

    /// Creates a trie from a word list with one word per line.
    ///
    /// Lines are normalized like any other input, so a blank line marks the
    /// empty word.
    pub fn from_reader<R: BufRead>(reader: R, config: LauTrieConfig) -> LauResult<Self> {
        let mut trie = Self::with_config(std::iter::empty::<&str>(), config);
        for line in reader.lines() {
            trie.add_word(line?);
        }
        tracing::debug!(
            words = trie.total_terminal_nodes,
            nodes = trie.total_nodes,
            "Loaded word list"
        );
        Ok(trie)
    }

    /// Adds a single word to the trie.
    ///
    /// Adding the empty word marks the root terminal.
    ///
    /// # Returns
    ///
    /// `true` if the word was new, `false` if it was already present.
    pub fn add_word<W: AsRef<str>>(&mut self, word: W) -> bool {
        let word = normalize_word(word.as_ref(), self.config.case_sensitive);

        let mut current = NodeId::ROOT;
        for c in word.chars() {
            let (next, created) = self.nodes.child_or_insert(current, c);
            if created {
                self.total_nodes += 1;
            }
            current = next;
        }

        let node = self.nodes.get_mut(current);
        if node.is_terminal {
            return false;
        }
        node.is_terminal = true;
        self.total_terminal_nodes += 1;
        tracing::debug!(word = %word, "Added word");
        true
    }

    /// Adds every word of `words`.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word);
        }
    }

    /// Removes a word from the trie.
    ///
    /// Only the terminal flag is cleared; the path stays in place for words
    /// sharing its prefix and for re-insertion. Unknown words are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the word was present and has been removed.
    pub fn remove_word<W: AsRef<str>>(&mut self, word: W) -> bool {
        let Some(id) = self.get_node(word.as_ref()) else {
            return false;
        };

        let node = self.nodes.get_mut(id);
        if !node.is_terminal {
            return false;
        }
        node.is_terminal = false;
        self.total_terminal_nodes -= 1;
        tracing::debug!(word = %self.nodes.word(id), "Removed word");
        true
    }

    /// Checks whether a word is stored in the trie.
    ///
    /// The empty word is never reported as present, even after it was added.
    pub fn contains_word<W: AsRef<str>>(&self, word: W) -> bool {
        let word = normalize_word(word.as_ref(), self.config.case_sensitive);
        if word.is_empty() {
            return false;
        }

        self.find(&word)
            .map_or(false, |id| self.nodes.get(id).is_terminal)
    }

    /// Returns the node reached by following the whole normalized word.
    pub(crate) fn get_node(&self, word: &str) -> Option<NodeId> {
        let word = normalize_word(word, self.config.case_sensitive);
        self.find(&word)
    }

    fn find(&self, normalized: &str) -> Option<NodeId> {
        normalized
            .chars()
            .try_fold(NodeId::ROOT, |id, c| self.nodes.child(id, c))
    }

    /// Returns up to `max_results` stored words starting with `prefix`.
    ///
    /// Words below the prefix node come first, in children insertion order.
    /// If they fall short, the remaining slots are filled from the prefix's
    /// parent, skipping the branch already explored. Widening stops after that
    /// single level, so fewer than `max_results` words is a normal outcome.
    /// Filler words share only the parent's prefix, not the full `prefix`.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::InvalidArgument` - If `max_results` is not positive.
    pub fn autocomplete_suggestions<P: AsRef<str>>(
        &self,
        prefix: P,
        max_results: i64,
    ) -> LauTrieResult<Suggestions> {
        let max_results = usize::try_from(max_results)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| LauTrieError::InvalidArgument {
                name: "max_results",
                value: max_results.to_string(),
                reason: "must be a positive integer",
            })?;

        Ok(self.collect_suggestions(prefix.as_ref(), max_results))
    }

    /// Returns suggestions for `prefix` using the configured default count.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::InvalidArgument` - If the configured count is zero.
    pub fn suggest<P: AsRef<str>>(&self, prefix: P) -> LauTrieResult<Suggestions> {
        let max_results = i64::try_from(self.config.default_max_results).unwrap_or(i64::MAX);
        self.autocomplete_suggestions(prefix, max_results)
    }

    fn collect_suggestions(&self, prefix: &str, max_results: usize) -> Suggestions {
        let mut suggestions = Suggestions::new();

        let Some(found) = self.get_node(prefix) else {
            tracing::trace!(prefix, "Unknown prefix");
            return suggestions;
        };

        for id in self.nodes.terminal_nodes(found, None).take(max_results) {
            suggestions.insert(self.nodes.word(id));
        }

        if suggestions.len() < max_results {
            let node = self.nodes.get(found);
            if let Some(parent) = node.parent {
                let remaining = max_results - suggestions.len();
                tracing::debug!(
                    prefix,
                    found = suggestions.len(),
                    remaining,
                    "Widening autocomplete to parent scope"
                );
                for id in self
                    .nodes
                    .terminal_nodes(parent, Some(node.character))
                    .take(remaining)
                {
                    suggestions.insert(self.nodes.word(id));
                }
            }
        }

        suggestions
    }

    /// Returns every stored word in depth-first children insertion order.
    pub fn words(&self) -> Vec<String> {
        self.nodes
            .terminal_nodes(NodeId::ROOT, None)
            .map(|id| self.nodes.word(id))
            .collect()
    }

    /// Number of nodes created so far, root excluded. Never decreases.
    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    /// Number of nodes currently marking the end of a word.
    pub fn total_terminal_nodes(&self) -> usize {
        self.total_terminal_nodes
    }

    /// Number of stored words, the empty word included.
    pub fn len(&self) -> usize {
        self.total_terminal_nodes
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.total_terminal_nodes == 0
    }

    /// Whether the trie matches words case-sensitively.
    pub fn is_case_sensitive(&self) -> bool {
        self.config.case_sensitive
    }

    /// The configuration this trie was built with.
    pub fn config(&self) -> &LauTrieConfig {
        &self.config
    }

    /// Returns a snapshot of the trie counters.
    pub fn stats(&self) -> LauTrieStats {
        LauTrieStats {
            total_nodes: self.total_nodes,
            total_terminal_nodes: self.total_terminal_nodes,
            case_sensitive: self.config.case_sensitive,
        }
    }

    #[cfg(test)]
    pub(crate) fn arena(&self) -> &NodeArena {
        &self.nodes
    }
}

impl Default for LauTrie {
    fn default() -> Self {
        Self::with_config(std::iter::empty::<&str>(), LauTrieConfig::default())
    }
}

impl<S: AsRef<str>> Extend<S> for LauTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_words(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for LauTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::with_config(iter, LauTrieConfig::default())
    }
}
