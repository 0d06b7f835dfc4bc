// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai Trie.
//!
//! Every error is local to the failed call: the trie is left exactly as it
//! was before the call and stays usable.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// An empty key was passed to `add`.
    #[error("key empty")]
    EmptyKey,

    /// `add` was called with a key that is already stored.
    #[error("key already in trie: '{0}'")]
    DuplicateKey(String),

    /// The key does not resolve to a stored entry.
    #[error("key not in trie: '{0}'")]
    KeyNotFound(String),

    /// The key is longer than the configured maximum.
    #[error("key '{key}' exceeds maximum key length of {max_len}")]
    KeyTooLong {
        /// The rejected key.
        key: String,
        /// The configured maximum length in bytes.
        max_len: usize,
    },
}

impl LanaiTrieError {
    pub(crate) fn duplicate(key: &[u8]) -> Self {
        Self::DuplicateKey(String::from_utf8_lossy(key).into_owned())
    }

    pub(crate) fn not_found(key: &[u8]) -> Self {
        Self::KeyNotFound(String::from_utf8_lossy(key).into_owned())
    }

    pub(crate) fn too_long(key: &[u8], max_len: usize) -> Self {
        Self::KeyTooLong {
            key: String::from_utf8_lossy(key).into_owned(),
            max_len,
        }
    }
}

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = std::result::Result<T, LanaiTrieError>;
