// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Each node owns its outgoing edges directly. Edges live in a small vector
//! that is scanned linearly; for realistic alphabets the branching factor is
//! low enough that a scan over contiguous memory beats hashing.

/// A labelled link from a parent node to the child it owns.
#[derive(Debug)]
pub(crate) struct Edge<V> {
    /// The key unit consumed when following this edge
    pub label: u8,

    /// The child node, owned by value
    pub node: TrieNode<V>,
}

/// A node in the Lanai Trie.
#[derive(Debug)]
pub(crate) struct TrieNode<V> {
    /// Outgoing edges. Order carries no meaning and changes on removal.
    pub children: Vec<Edge<V>>,

    /// Payload, present exactly when this node terminates a stored key
    pub value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new non-terminal node with no children.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            value: None,
        }
    }

    /// Whether this node marks the end of a stored key.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// A non-terminal node without children serves no key and must not persist.
    #[cfg(test)]
    pub fn is_dead(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Returns the index of the edge labelled `label`, if any.
    #[inline]
    pub fn child_index(&self, label: u8) -> Option<usize> {
        self.children.iter().position(|edge| edge.label == label)
    }

    /// Returns the child reached through `label`, if any.
    #[inline]
    pub fn child(&self, label: u8) -> Option<&TrieNode<V>> {
        self.child_index(label).map(|i| &self.children[i].node)
    }

    /// Returns the child reached through `label` mutably, if any.
    #[inline]
    pub fn child_mut(&mut self, label: u8) -> Option<&mut TrieNode<V>> {
        match self.child_index(label) {
            Some(i) => Some(&mut self.children[i].node),
            None => None,
        }
    }

    /// Appends a fresh child under `label` and returns its index.
    ///
    /// The caller must have checked that no edge with this label exists.
    pub fn push_child(&mut self, label: u8) -> usize {
        debug_assert!(self.child_index(label).is_none());
        self.children.push(Edge {
            label,
            node: TrieNode::new(),
        });
        self.children.len() - 1
    }

    /// Detaches the edge at `index` by swapping it with the last edge.
    pub fn swap_remove_child(&mut self, index: usize) -> TrieNode<V> {
        let edge = self.children.swap_remove(index);
        if self.children.is_empty() {
            self.children = Vec::new();
        }
        edge.node
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases a subtree without recursing once per level.
///
/// Dropping a `TrieNode` normally drops its children first, which nests one
/// call frame per level. Moving the children onto a work list before each
/// node is dropped keeps the teardown flat regardless of depth.
pub(crate) fn release<V>(node: TrieNode<V>) -> usize {
    let mut pending = vec![node];
    let mut released = 0;
    while let Some(mut node) = pending.pop() {
        pending.extend(node.children.drain(..).map(|edge| edge.node));
        released += 1;
    }
    released
}
