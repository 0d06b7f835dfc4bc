// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the Lanai Trie.


use super::node::TrieNode;
use super::LanaiTrie;

/// Asserts that no node other than the root is non-terminal and childless.
pub(super) fn assert_compact<V>(trie: &LanaiTrie<V>) {
    let mut pending: Vec<(&TrieNode<V>, bool)> = vec![(&trie.root, true)];
    while let Some((node, is_root)) = pending.pop() {
        assert!(!node.is_terminal() || !is_root, "root must never be terminal");
        assert!(is_root || !node.is_dead(), "dead node left in trie");

        let mut labels: Vec<u8> = node.children.iter().map(|edge| edge.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), node.children.len(), "duplicate edge label");

        pending.extend(node.children.iter().map(|edge| (&edge.node, false)));
    }
}

/// Number of nodes a trie built from scratch out of `keys` would hold.
pub(super) fn fresh_node_count<'a, I>(keys: I) -> usize
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut trie = LanaiTrie::new();
    for key in keys {
        let _ = trie.add(key, ());
    }
    trie.node_count()
}
