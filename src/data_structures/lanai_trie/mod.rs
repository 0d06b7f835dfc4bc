// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! An in-memory associative container keyed by byte sequences and organised
//! as a compacting prefix tree. Every node keeps its children in a small
//! vector of labelled edges and no operation recurses: lookups walk the key
//! in a loop, prefix enumeration and removal run on explicit stacks.
//!
//! The tree never retains dead nodes. After any operation returns, every
//! node other than the root either terminates a stored key or has at least
//! one child.
//!
//! # Example
//!
//! ```
//! use lanai::data_structures::lanai_trie::{LanaiTrie, LanaiTrieError};
//!
//! let mut trie = LanaiTrie::new();
//! trie.add("sand", 1).unwrap();
//! trie.add("sandpaper", 2).unwrap();
//! trie.add("sanity", 3).unwrap();
//!
//! assert_eq!(trie.get("sand"), Some(&1));
//! assert_eq!(trie.search("sand").len(), 2);
//! assert_eq!(trie.search("").len(), 3);
//!
//! assert!(matches!(trie.add("sand", 9), Err(LanaiTrieError::DuplicateKey(_))));
//!
//! trie.remove("sand").unwrap();
//! assert_eq!(trie.get("sand"), None);
//! assert_eq!(trie.get("sandpaper"), Some(&2));
//! ```
//!
//! # Concurrency
//!
//! The trie has no internal synchronisation. Mutation requires `&mut self`,
//! so sharing it across threads needs an external lock.

mod config;
mod error;
mod iter;
mod node;

#[cfg(test)]
mod tests;

use std::fmt;

use tracing::trace;

pub use self::config::{LanaiTrieConfig, DEFAULT_STACK_CAPACITY};
pub use error::{LanaiTrieError, LanaiTrieResult};
pub use iter::{Entries, Values};
use node::{release, TrieNode};

/// Snapshot of one node on the path recorded by `take`.
///
/// Compaction only ever detaches a single edge, so the facts captured on the
/// way down stay accurate while the stack is unwound.
#[derive(Debug, Clone, Copy)]
struct PathFrame {
    /// Index of the edge followed out of this node (unused for the target)
    index: usize,
    /// Number of children the node had before removal
    fanout: usize,
    /// Whether the node terminates a key once the removal has happened
    terminal: bool,
}

/// Lanai Trie is a prefix tree mapping byte-sequence keys to values of `V`.
///
/// Key features:
/// * Point insertion with duplicate detection, lookup, update and removal
/// * Prefix enumeration of stored values, lazily or collected
/// * Automatic compaction: removal prunes every node left without purpose
/// * Iterative traversal with stack usage independent of key length
pub struct LanaiTrie<V> {
    /// The root node; never terminal and never pruned
    root: TrieNode<V>,

    /// Number of stored keys
    len: usize,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl<V> LanaiTrie<V> {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            config,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// Missing nodes along the key's path are created. An existing entry is
    /// never overwritten; use [`update`](Self::update) for that.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the key was stored.
    /// * `Err(LanaiTrieError::EmptyKey)` - If the key is empty.
    /// * `Err(LanaiTrieError::DuplicateKey)` - If the key is already stored. The
    ///   existing value is kept.
    /// * `Err(LanaiTrieError::KeyTooLong)` - If the key exceeds the configured maximum.
    pub fn add<K>(&mut self, key: K, value: V) -> LanaiTrieResult<()>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(LanaiTrieError::EmptyKey);
        }
        if let Some(max_len) = self.config.max_key_len() {
            if key.len() > max_len {
                return Err(LanaiTrieError::too_long(key, max_len));
            }
        }

        let mut node = &mut self.root;
        let mut created = 0usize;
        for &unit in key {
            let index = match node.child_index(unit) {
                Some(index) => index,
                None => {
                    created += 1;
                    node.push_child(unit)
                }
            };
            node = &mut node.children[index].node;
        }

        // A duplicate means the whole path already existed, so nothing was created.
        if node.is_terminal() {
            return Err(LanaiTrieError::duplicate(key));
        }
        node.value = Some(value);
        self.len += 1;

        trace!(key_len = key.len(), created, "added key");
        Ok(())
    }

    /// Retrieves the value stored under `key`.
    ///
    /// Returns `None` for the empty key, for keys whose path does not exist,
    /// and for keys whose path exists only as a branching point.
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return None;
        }
        self.locate(key)?.value.as_ref()
    }

    /// Retrieves a mutable reference to the value stored under `key`.
    pub fn get_mut<K>(&mut self, key: K) -> Option<&mut V>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return None;
        }
        self.locate_mut(key)?.value.as_mut()
    }

    /// Checks if a key is stored in the trie.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        self.get(key).is_some()
    }

    /// Collects every value whose key starts with `prefix`.
    ///
    /// The empty prefix selects every stored value. The order of the result
    /// is unspecified and changes as keys are added and removed.
    pub fn search<P>(&self, prefix: P) -> Vec<&V>
    where
        P: AsRef<[u8]>,
    {
        self.values_with_prefix(prefix).collect()
    }

    /// Returns a lazy iterator over every value whose key starts with `prefix`.
    pub fn values_with_prefix<P>(&self, prefix: P) -> Values<'_, V>
    where
        P: AsRef<[u8]>,
    {
        Values::new(self.locate(prefix.as_ref()), self.config.stack_capacity())
    }

    /// Returns a lazy iterator over every `(key, value)` pair whose key
    /// starts with `prefix`.
    pub fn entries_with_prefix<P>(&self, prefix: P) -> Entries<'_, V>
    where
        P: AsRef<[u8]>,
    {
        let prefix = prefix.as_ref();
        Entries::new(self.locate(prefix), prefix, self.config.stack_capacity())
    }

    /// Returns an iterator over all `(key, value)` pairs, in unspecified order.
    pub fn iter(&self) -> Entries<'_, V> {
        self.entries_with_prefix(b"")
    }

    /// Replaces the value stored under an existing key.
    ///
    /// The shape of the tree is not touched.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the value was replaced.
    /// * `Err(LanaiTrieError::KeyNotFound)` - If the key is not stored.
    pub fn update<K>(&mut self, key: K, value: V) -> LanaiTrieResult<()>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        match self.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(LanaiTrieError::not_found(key)),
        }
    }

    /// Removes a key from the trie, compacting the path behind it.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the key was removed.
    /// * `Err(LanaiTrieError::KeyNotFound)` - If the key is not stored. The
    ///   trie is unchanged.
    pub fn remove<K>(&mut self, key: K) -> LanaiTrieResult<()>
    where
        K: AsRef<[u8]>,
    {
        self.take(key).map(drop)
    }

    /// Removes a key from the trie and returns the value it held.
    ///
    /// Works exactly like [`remove`](Self::remove). Every node that ends up
    /// non-terminal and childless is detached from its parent, so the tree
    /// holds no dead nodes afterwards.
    pub fn take<K>(&mut self, key: K) -> LanaiTrieResult<V>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(LanaiTrieError::not_found(key));
        }

        // Record the path, root first and the target node as the last frame.
        let mut path: Vec<PathFrame> =
            Vec::with_capacity(self.config.stack_capacity().max(key.len() + 1));
        let mut node = &self.root;
        for &unit in key {
            let index = match node.child_index(unit) {
                Some(index) => index,
                None => return Err(LanaiTrieError::not_found(key)),
            };
            path.push(PathFrame {
                index,
                fanout: node.children.len(),
                terminal: node.is_terminal(),
            });
            node = &node.children[index].node;
        }
        if !node.is_terminal() {
            return Err(LanaiTrieError::not_found(key));
        }
        path.push(PathFrame {
            index: 0,
            fanout: node.children.len(),
            terminal: false,
        });

        // Unwind from the target towards the root. Frame 0 is the root and
        // is never pruned; the first surviving node ends the dead chain.
        let mut tip = path.len() - 1;
        let mut pruned_below = false;
        while tip > 0 {
            let frame = path[tip];
            let remaining = frame.fanout - usize::from(pruned_below);
            if frame.terminal || remaining > 0 {
                break;
            }
            pruned_below = true;
            tip -= 1;
        }

        let mut survivor = &mut self.root;
        for frame in &path[..tip] {
            survivor = &mut survivor.children[frame.index].node;
        }

        let value = {
            let mut target = &mut *survivor;
            for frame in &path[tip..path.len() - 1] {
                target = &mut target.children[frame.index].node;
            }
            target.value.take()
        }
        .ok_or_else(|| LanaiTrieError::not_found(key))?;

        // Detaching the head of the dead chain leaves the same shape and
        // sibling order as pruning it one node at a time.
        let pruned = if pruned_below {
            release(survivor.swap_remove_child(path[tip].index))
        } else {
            0
        };
        self.len -= 1;

        trace!(key_len = key.len(), pruned, "removed key");
        Ok(value)
    }

    /// Returns the number of keys stored in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie stores no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every entry from the trie.
    pub fn clear(&mut self) {
        let released = release(std::mem::take(&mut self.root));
        self.len = 0;
        trace!(released, "cleared trie");
    }

    /// Returns the number of nodes in the trie, including the root.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        let mut pending: Vec<&TrieNode<V>> = Vec::with_capacity(self.config.stack_capacity());
        pending.push(&self.root);
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter().map(|edge| &edge.node));
        }
        count
    }

    fn locate(&self, key: &[u8]) -> Option<&TrieNode<V>> {
        let mut node = &self.root;
        for &unit in key {
            node = node.child(unit)?;
        }
        Some(node)
    }

    fn locate_mut(&mut self, key: &[u8]) -> Option<&mut TrieNode<V>> {
        let mut node = &mut self.root;
        for &unit in key {
            node = node.child_mut(unit)?;
        }
        Some(node)
    }
}

impl<V> Default for LanaiTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for LanaiTrie<V> {
    fn drop(&mut self) {
        release(std::mem::take(&mut self.root));
    }
}

impl<V: fmt::Debug> fmt::Debug for LanaiTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(key, value)| (String::from_utf8_lossy(&key).into_owned(), value)),
            )
            .finish()
    }
}

impl<'a, V> IntoIterator for &'a LanaiTrie<V> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = Entries<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Adds every pair with [`LanaiTrie::add`]. Pairs that `add` rejects (empty,
/// duplicate or over-long keys) are skipped, so the first value for a key wins.
impl<K: AsRef<[u8]>, V> Extend<(K, V)> for LanaiTrie<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.add(key, value);
        }
    }
}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for LanaiTrie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
