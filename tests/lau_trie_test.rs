// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Lau Trie public API.

use std::io::Cursor;
use std::sync::{Arc, Barrier};
use std::thread;

use anyhow::Result;
use lau_trie_lib::config::{ConfigLoader, LauTrieConfig};
use lau_trie_lib::data_structures::{LauTrie, LauTrieError, SharedLauTrie};
use test_case::test_case;

/// The reference scenario: build, query, remove, re-add.
#[test]
fn test_autocomplete_scenario() -> Result<()> {
    let mut trie = LauTrie::new(["cat", "car", "card", "dog"], false);
    assert!(trie.contains_word("CAT"));

    let suggestions = trie.autocomplete_suggestions("ca", 2)?;
    assert_eq!(suggestions.len(), 2);
    for word in &suggestions {
        assert!(["cat", "car", "card"].contains(&word.as_str()));
    }

    let nodes = trie.total_nodes();
    trie.remove_word("cat");
    assert!(!trie.contains_word("cat"));
    assert_eq!(trie.total_nodes(), nodes);

    trie.add_word("cat");
    assert_eq!(trie.total_nodes(), nodes);
    assert!(trie.contains_word("cat"));
    Ok(())
}

/// Filler from the parent scope need not share the full prefix.
#[test]
fn test_parent_scope_fallback() -> Result<()> {
    let trie = LauTrie::new(["cat", "dog"], false);
    let suggestions = trie.autocomplete_suggestions("c", 5)?;
    assert!(suggestions.contains("cat"));
    assert!(suggestions.contains("dog"));
    Ok(())
}

#[test_case(false, "Cat", "cat", true ; "insensitive agrees")]
#[test_case(true, "Cat", "cat", false ; "sensitive disagrees")]
#[test_case(true, "cat", "cat", true ; "sensitive exact")]
fn test_case_policy(case_sensitive: bool, stored: &str, query: &str, expected: bool) {
    let trie = LauTrie::new([stored], case_sensitive);
    assert_eq!(trie.contains_word(query), expected);
}

#[test]
fn test_invalid_argument_is_reported() {
    let trie = LauTrie::new(["cat"], false);
    for max_results in [0, -5] {
        assert!(matches!(
            trie.autocomplete_suggestions("c", max_results),
            Err(LauTrieError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn test_build_from_word_list_and_config() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lau.toml");
    std::fs::write(&path, "[trie]\ncase_sensitive = true\ndefault_max_results = 2\n")?;

    let config = ConfigLoader::new(Some(&path), "LAU_INTEGRATION_TEST").load()?;
    let trie = LauTrie::from_reader(Cursor::new("Alpha\nalpine\nAlps\n"), config.trie)?;

    assert!(trie.contains_word("Alpha"));
    assert!(!trie.contains_word("alpha"));
    assert_eq!(trie.suggest("Al")?.len(), 2);

    let loader = ConfigLoader::new(Some(&path), "LAU_INTEGRATION_TEST");
    let trie = lau_trie_lib::build_trie(&loader, ["x"])?;
    assert!(trie.is_case_sensitive());
    Ok(())
}

/// Concurrent readers and writers through the shared handle.
#[test]
fn test_shared_trie_across_threads() {
    const THREAD_COUNT: usize = 4;
    const WORDS_PER_THREAD: usize = 100;

    let shared = SharedLauTrie::new(LauTrie::with_config(
        std::iter::empty::<&str>(),
        LauTrieConfig::new(),
    ));
    let barrier = Arc::new(Barrier::new(THREAD_COUNT));

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let trie = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..WORDS_PER_THREAD {
                    trie.add_word(format!("t{thread_id}w{i}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let stats = shared.stats();
    assert_eq!(stats.total_terminal_nodes, THREAD_COUNT * WORDS_PER_THREAD);
    for thread_id in 0..THREAD_COUNT {
        assert!(shared.contains_word(format!("t{thread_id}w0")));
    }
}
