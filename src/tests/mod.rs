//! Test modules for Lanai.
//!
//! This module contains crate-level testing infrastructure:
//! - Configuration loading and validation tests
//! - Error conversion tests
//! - Trie tests that cross module boundaries (config to trie, `?` propagation)
//! - Shared fixtures and proptest strategies
//!
//! Tests for a single component live next to it.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{byte_key_strategy, word_strategy, TestFixture};
