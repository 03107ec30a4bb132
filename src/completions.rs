//! Lazy enumeration of the stored words below a prefix.
//!
//! This module provides the `Completions` iterator, which walks a subtree
//! depth-first with an explicit stack. Recursion is avoided so that very long
//! keys cannot exhaust the call stack.

use std::fmt;
use std::iter::FusedIterator;

use crate::children::ChildMap;
use crate::node::TrieNode;

/// An iterator over every stored word that starts with a given prefix.
///
/// Words are produced in pre-order: a node's own word comes before the words
/// of its children, and children are visited in their child map's order
/// (first-insertion order or alphabetical, depending on the layout).
///
/// # Examples
///
/// ```
/// use prefix_trie::AlphabetTrie;
///
/// let mut trie = AlphabetTrie::new();
/// trie.try_insert("help").unwrap();
/// trie.try_insert("hello").unwrap();
/// trie.try_insert("world").unwrap();
///
/// let words: Vec<String> = trie.completions("hel").collect();
/// assert_eq!(words, vec!["hello", "help"]);
/// ```
pub struct Completions<'a, C: ChildMap> {
    /// Nodes still to visit, each with the byte length of its parent's word
    stack: Vec<Frame<'a, C>>,

    /// The word spelled by the path to the node being visited
    word: String,
}

struct Frame<'a, C> {
    node: &'a TrieNode<C>,
    edge: Option<char>,
    depth: usize,
}

impl<'a, C: ChildMap> Completions<'a, C> {
    /// Starts a traversal at `start`, the node reached by following `prefix`.
    ///
    /// `None` produces an empty iterator, used when the prefix is not in the trie.
    pub(crate) fn new(start: Option<&'a TrieNode<C>>, prefix: &str) -> Self {
        let stack = start
            .map(|node| Frame {
                node,
                edge: None,
                depth: prefix.len(),
            })
            .into_iter()
            .collect();

        Completions {
            stack,
            word: prefix.to_string(),
        }
    }
}

impl<'a, C: ChildMap> Iterator for Completions<'a, C> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            // Unwind the word to this frame's parent, then append its edge
            self.word.truncate(frame.depth);
            if let Some(c) = frame.edge {
                self.word.push(c);
            }

            // Reverse so the first child is popped first
            let depth = self.word.len();
            self.stack
                .extend(frame.node.children.iter().rev().map(|(c, node)| Frame {
                    node,
                    edge: Some(c),
                    depth,
                }));

            if frame.node.end_of_word {
                return Some(self.word.clone());
            }
        }

        None
    }
}

impl<'a, C: ChildMap> FusedIterator for Completions<'a, C> {}

impl<'a, C: ChildMap> fmt::Debug for Completions<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completions")
            .field("word", &self.word)
            .field("pending", &self.stack.len())
            .finish()
    }
}
