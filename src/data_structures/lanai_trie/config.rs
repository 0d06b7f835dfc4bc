// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lanai Trie.

/// Default initial capacity of the traversal stacks used by search and removal.
pub const DEFAULT_STACK_CAPACITY: usize = 32;

/// Configuration for the Lanai Trie.
///
/// The defaults impose no limits, so `LanaiTrie::new()` and
/// `LanaiTrie::with_config(LanaiTrieConfig::default())` behave identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanaiTrieConfig {
    /// Longest key `add` accepts, in bytes. `None` means unlimited.
    max_key_len: Option<usize>,

    /// Initial capacity of the explicit traversal stacks.
    /// Stacks still grow past this for deeper paths.
    stack_capacity: usize,
}

impl LanaiTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_key_len: None (unlimited)
    /// - stack_capacity: 32
    pub fn new() -> Self {
        Self {
            max_key_len: None,
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }

    /// Limit the length of keys accepted by `add`.
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        if max_key_len == 0 {
            panic!("Maximum key length must be greater than 0");
        }
        self.max_key_len = Some(max_key_len);
        self
    }

    /// Set the initial capacity of traversal stacks.
    pub fn with_stack_capacity(mut self, stack_capacity: usize) -> Self {
        if stack_capacity == 0 {
            panic!("Stack capacity must be greater than 0");
        }
        self.stack_capacity = stack_capacity;
        self
    }

    /// Get the maximum key length, if any
    pub fn max_key_len(&self) -> Option<usize> {
        self.max_key_len
    }

    /// Get the initial traversal stack capacity
    pub fn stack_capacity(&self) -> usize {
        self.stack_capacity
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
