// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word normalization shared by every trie operation.

use std::borrow::Cow;

/// Normalizes a word before it touches the trie.
///
/// Surrounding whitespace is trimmed, so empty and whitespace-only input both
/// become `""`. Without case sensitivity the result is folded to lowercase.
pub fn normalize_word(word: &str, case_sensitive: bool) -> Cow<'_, str> {
    let trimmed = word.trim();
    if case_sensitive {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(trimmed.to_lowercase())
    }
}
