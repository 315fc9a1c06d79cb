//! Character trie with Aho-Corasick failure links
//!
//! Nodes are stored in a flat arena and addressed by index. The root is
//! always index 0. Parent-to-child edges and failure links are both plain
//! indices into the arena, so the trie owns every node exactly once and the
//! failure graph carries no ownership.
//!
//! # Design
//!
//! - `children` maps a single `char` to a child node
//! - `terminal` holds the length of the pattern inserted at exactly this node
//! - `pattern_ends` is rebuilt on every compile: the node's own length first,
//!   then every length inherited from its failure node that is not already
//!   present. A failure node is always shallower, so the list is strictly
//!   decreasing and hits at one position come out longest first.

use crate::queue::FifoQueue;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Index of a node in the trie arena
pub(crate) type NodeId = usize;

/// The root node index
pub(crate) const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: FxHashMap<char, NodeId>,
    failure: Option<NodeId>,
    terminal: Option<usize>,
    pattern_ends: Vec<usize>,
}

impl Node {
    fn new() -> Self {
        Self::default()
    }
}

/// Trie plus failure links
#[derive(Debug, Clone)]
pub(crate) struct Trie {
    nodes: Vec<Node>,
    pattern_count: usize,
    max_pattern_len: usize,
}

impl Trie {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new()], // Root
            pattern_count: 0,
            max_pattern_len: 0,
        }
    }

    /// Insert a pattern, creating nodes for any new prefixes.
    ///
    /// Returns `true` if the pattern was not already present. Callers are
    /// responsible for rejecting the empty pattern.
    pub(crate) fn insert(&mut self, pattern: &str) -> bool {
        let mut current = ROOT;
        let mut len = 0usize;

        for ch in pattern.chars() {
            len += 1;
            current = match self.nodes[current].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let new_id = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[current].children.insert(ch, new_id);
                    new_id
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.terminal.is_some() {
            tracing::trace!(pattern, "duplicate pattern ignored");
            return false;
        }

        // pattern_ends is stale until the next compile()
        node.terminal = Some(len);
        self.pattern_count += 1;
        self.max_pattern_len = self.max_pattern_len.max(len);
        tracing::trace!(pattern, len, "pattern inserted");
        true
    }

    /// Compute failure links and merge pattern lengths breadth-first.
    ///
    /// Fully recomputes from the current trie shape, so it may be called
    /// again after further insertions.
    pub(crate) fn compile(&mut self) {
        let start = Instant::now();

        for node in &mut self.nodes {
            node.failure = None;
            node.pattern_ends.clear();
            node.pattern_ends.extend(node.terminal);
        }

        let mut queue = FifoQueue::new();

        // Depth-1 nodes fail to root
        let root_children: Vec<NodeId> = self.nodes[ROOT].children.values().copied().collect();
        for child in root_children {
            self.nodes[child].failure = Some(ROOT);
            queue.push(child);
        }

        while let Some(parent) = queue.pop() {
            // The failure walk below only visits shallower nodes, never
            // `parent`, so its child map can be moved out for the loop.
            let children = std::mem::take(&mut self.nodes[parent].children);

            for (&ch, &child) in &children {
                queue.push(child);

                // Walk the parent's failure chain for a node with an edge on `ch`
                let mut fail = self.nodes[parent].failure;
                let target = loop {
                    match fail {
                        Some(candidate) => {
                            if let Some(&next) = self.nodes[candidate].children.get(&ch) {
                                break next;
                            }
                            fail = self.nodes[candidate].failure;
                        }
                        None => break ROOT,
                    }
                };

                self.nodes[child].failure = Some(target);
                self.merge_pattern_ends(child, target);
            }

            self.nodes[parent].children = children;
        }

        tracing::debug!(
            patterns = self.pattern_count,
            states = self.nodes.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "failure links compiled"
        );
    }

    // Append the failure node's lengths that `node` does not already report.
    // The failure node is shallower, so its list is already final.
    fn merge_pattern_ends(&mut self, node: NodeId, failure: NodeId) {
        // Ids follow insertion order, not depth, so either may be larger
        let (inherited, ends) = if failure < node {
            let (head, tail) = self.nodes.split_at_mut(node);
            (&head[failure].pattern_ends, &mut tail[0].pattern_ends)
        } else {
            let (head, tail) = self.nodes.split_at_mut(failure);
            (&tail[0].pattern_ends, &mut head[node].pattern_ends)
        };
        for &len in inherited {
            if !ends.contains(&len) {
                ends.push(len);
            }
        }
    }

    /// Follow one input character from `current`.
    ///
    /// Falls back along failure links until an edge on `ch` exists, and lands
    /// on the root when none does.
    #[inline]
    pub(crate) fn next_state(&self, mut current: NodeId, ch: char) -> NodeId {
        loop {
            let node = &self.nodes[current];
            if let Some(&next) = node.children.get(&ch) {
                return next;
            }
            match node.failure {
                Some(fail) if current != ROOT => current = fail,
                _ => return ROOT,
            }
        }
    }

    /// Lengths of every pattern ending at this node, longest first
    #[inline]
    pub(crate) fn pattern_ends(&self, node: NodeId) -> &[usize] {
        &self.nodes[node].pattern_ends
    }

    #[cfg(test)]
    fn failure(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].failure
    }

    /// Number of nodes, root included
    pub(crate) fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct patterns inserted
    pub(crate) fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Length in characters of the longest pattern
    pub(crate) fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }

    #[cfg(test)]
    fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(ROOT, |node, ch| self.nodes[node].children.get(&ch).copied())
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
