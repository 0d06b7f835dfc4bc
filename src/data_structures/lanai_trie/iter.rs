// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Depth-first iteration over a subtree using an explicit frame stack.
//!
//! Each frame holds a node and a cursor into its children. Advancing a frame
//! either descends into the next child or, once the children are exhausted,
//! emits the node (if terminal) and pops it. Stack depth is bounded by the
//! longest path below the starting node and each node is visited once.
//! Nodes are emitted in post-order; callers must not rely on the order.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// One level of the traversal.
struct Frame<'a, V> {
    /// Index of the next child to descend into
    next_child: usize,
    node: &'a TrieNode<V>,
}

/// The shared traversal engine behind [`Values`] and [`Entries`].
struct Walk<'a, V> {
    stack: Vec<Frame<'a, V>>,

    /// Key of the current position, only maintained when `track_keys` is set.
    key: Vec<u8>,
    track_keys: bool,

    /// The last emitted node had a label on `key` that still has to come off.
    pop_label: bool,
}

impl<'a, V> Walk<'a, V> {
    fn new(start: Option<&'a TrieNode<V>>, prefix: Option<&[u8]>, capacity: usize) -> Self {
        let mut stack = Vec::with_capacity(capacity);
        if let Some(node) = start {
            stack.push(Frame {
                next_child: 0,
                node,
            });
        }

        let mut key = Vec::new();
        if let Some(prefix) = prefix {
            key.reserve(prefix.len() + capacity);
            key.extend_from_slice(prefix);
        }

        Self {
            stack,
            key,
            track_keys: prefix.is_some(),
            pop_label: false,
        }
    }

    /// Advances to the next terminal node and returns its value.
    ///
    /// When keys are tracked, `self.key` spells that node's key until the
    /// next call.
    fn advance(&mut self) -> Option<&'a V> {
        if self.pop_label {
            self.key.pop();
            self.pop_label = false;
        }

        while let Some(top) = self.stack.last_mut() {
            let node = top.node;
            if let Some(edge) = node.children.get(top.next_child) {
                top.next_child += 1;
                if self.track_keys {
                    self.key.push(edge.label);
                }
                self.stack.push(Frame {
                    next_child: 0,
                    node: &edge.node,
                });
                continue;
            }

            self.stack.pop();
            // Every frame above the starting node was entered through a label.
            let labelled = self.track_keys && !self.stack.is_empty();
            if let Some(value) = node.value.as_ref() {
                self.pop_label = labelled;
                return Some(value);
            }
            if labelled {
                self.key.pop();
            }
        }

        None
    }
}

/// Iterator over the values stored under a prefix.
///
/// Created by [`LanaiTrie::values_with_prefix`](super::LanaiTrie::values_with_prefix).
pub struct Values<'a, V> {
    walk: Walk<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(start: Option<&'a TrieNode<V>>, capacity: usize) -> Self {
        Self {
            walk: Walk::new(start, None, capacity),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.advance()
    }
}

impl<V> FusedIterator for Values<'_, V> {}

/// Iterator over the `(key, value)` pairs stored under a prefix.
///
/// Keys are rebuilt from the prefix plus the edge labels on the frame stack,
/// so each yielded key is a fresh allocation.
pub struct Entries<'a, V> {
    walk: Walk<'a, V>,
}

impl<'a, V> Entries<'a, V> {
    pub(crate) fn new(start: Option<&'a TrieNode<V>>, prefix: &[u8], capacity: usize) -> Self {
        Self {
            walk: Walk::new(start, Some(prefix), capacity),
        }
    }
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.walk.advance()?;
        Some((self.walk.key.clone(), value))
    }
}

impl<V> FusedIterator for Entries<'_, V> {}
