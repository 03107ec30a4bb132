//! Node type for the prefix trie.
//!
//! A `TrieNode` owns its children outright: every node has exactly one
//! parent, so the whole tree is dropped together with its root.

use crate::children::ChildMap;

/// A single node of the trie.
///
/// The path of characters from the root to a node spells a prefix of at
/// least one stored word. `end_of_word` marks nodes whose path is itself a
/// stored word.
///
/// `Debug` shows only the node's own flag and edge characters; cloning and
/// comparing whole trees is done by [`Trie`](crate::Trie) without recursion.
#[derive(Debug, Default)]
pub struct TrieNode<C> {
    /// Edges to the child nodes, keyed by character
    pub(crate) children: C,

    /// Whether the path to this node was inserted as a complete word
    pub(crate) end_of_word: bool,
}

impl<C: ChildMap> TrieNode<C> {
    /// Creates an unmarked node without children.
    pub fn new() -> Self {
        TrieNode {
            children: C::default(),
            end_of_word: false,
        }
    }

    /// Returns whether the path to this node is a stored word.
    pub fn is_end_of_word(&self) -> bool {
        self.end_of_word
    }

    /// Returns the node's children.
    pub fn children(&self) -> &C {
        &self.children
    }

    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&Self> {
        self.children.get(c)
    }

    /// Follows `path` one character at a time from this node.
    ///
    /// Returns `None` as soon as a character has no matching child.
    pub fn descend(&self, path: &str) -> Option<&Self> {
        path.chars().try_fold(self, |node, c| node.children.get(c))
    }
}
