//! Data structures for Lanai.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - No recursion proportional to key length or tree depth
//! - Errors are returned to the caller, never logged by the container

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult};
