// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for the Lau Trie crate.
//!
//! Component tests live next to their component; this module holds the
//! cross-cutting tests for configuration and errors plus shared fixtures.

pub mod config_tests;

pub use test_utils::{init_test_tracing, TestFixture};
