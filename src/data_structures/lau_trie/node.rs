// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the Lau Trie.
//!
//! Nodes live in a single arena owned by the trie. Ownership flows strictly from
//! the arena to its nodes; the `parent` link of a node is only an index used for
//! navigation and never keeps anything alive.

use fnv::FnvBuildHasher;
use indexmap::IndexMap;

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, allocated when the arena is created.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Children of a node, keyed by the transition character.
///
/// Iteration follows insertion order, which decides which words survive when
/// suggestions are truncated.
pub type Children = IndexMap<char, NodeId, FnvBuildHasher>;

/// A node in the Lau Trie.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Character leading to this node from its parent (unused for the root)
    pub character: char,

    /// Whether an inserted word ends exactly here
    pub is_terminal: bool,

    /// Map of characters to child nodes
    pub children: Children,

    /// Parent of this node, `None` only for the root
    pub parent: Option<NodeId>,
}

impl TrieNode {
    /// Creates the root node.
    pub fn root() -> Self {
        Self {
            character: '\0',
            is_terminal: false,
            children: Children::default(),
            parent: None,
        }
    }

    /// Creates a non-terminal child of `parent` reached through `character`.
    pub fn child(parent: NodeId, character: char) -> Self {
        Self {
            character,
            is_terminal: false,
            children: Children::default(),
            parent: Some(parent),
        }
    }
}

/// Arena holding every node of a trie, root at [`NodeId::ROOT`].
#[derive(Debug, Clone)]
pub struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    /// Creates an arena containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
        }
    }

    /// Returns the node behind `id`.
    ///
    /// Ids are only ever handed out by this arena and nodes are never freed, so
    /// every id is valid for the arena's lifetime.
    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Mutable access to the node behind `id`.
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.0]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the child of `parent` for `character`, creating it when missing.
    ///
    /// The boolean is `true` when a new node was allocated.
    pub fn child_or_insert(&mut self, parent: NodeId, character: char) -> (NodeId, bool) {
        if let Some(&existing) = self.nodes[parent.0].children.get(&character) {
            return (existing, false);
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::child(parent, character));
        self.nodes[parent.0].children.insert(character, id);
        (id, true)
    }

    /// Follows a single transition without creating anything.
    pub fn child(&self, parent: NodeId, character: char) -> Option<NodeId> {
        self.nodes[parent.0].children.get(&character).copied()
    }

    /// Reconstructs the word spelled by the path from the root to `id`.
    ///
    /// The root's own character is not part of any word.
    pub fn word(&self, id: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            chars.push(self.nodes[current.0].character);
            current = parent;
        }
        chars.iter().rev().collect()
    }

    /// Iterates every terminal node in the subtree rooted at `id`.
    ///
    /// Results are in depth-first pre-order: `id` itself first if terminal, then
    /// each child subtree in children insertion order. `ignore_char` skips one
    /// immediate child of `id` and has no effect deeper down. The walk is lazy,
    /// so taking the first few results visits only as much of the subtree as
    /// needed to find them.
    pub fn terminal_nodes(&self, id: NodeId, ignore_char: Option<char>) -> TerminalNodes<'_> {
        let start = &self.nodes[id.0];

        // Children are pushed in reverse so they pop in insertion order.
        let stack = start
            .children
            .iter()
            .rev()
            .filter(|(c, _)| Some(**c) != ignore_char)
            .map(|(_, child)| *child)
            .collect();

        TerminalNodes {
            arena: self,
            pending_start: start.is_terminal.then_some(id),
            stack,
        }
    }
}

/// Lazy pre-order walk over the terminal nodes of a subtree.
///
/// Created by [`NodeArena::terminal_nodes`].
#[derive(Debug)]
pub struct TerminalNodes<'a> {
    arena: &'a NodeArena,
    pending_start: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl TerminalNodes<'_> {
    /// Nodes discovered but not yet visited.
    pub fn pending(&self) -> usize {
        self.stack.len() + usize::from(self.pending_start.is_some())
    }
}

impl Iterator for TerminalNodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if let Some(start) = self.pending_start.take() {
            return Some(start);
        }

        while let Some(current) = self.stack.pop() {
            let node = self.arena.get(current);
            self.stack.extend(node.children.values().rev().copied());
            if node.is_terminal {
                return Some(current);
            }
        }

        None
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
