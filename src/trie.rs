//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! inserting words and querying them by prefix.

use std::convert::Infallible;
use std::fmt;

use tracing::{debug, trace};

use crate::children::{ChildMap, InsertionOrder, LowercaseAlphabet};
use crate::completions::Completions;
use crate::node::TrieNode;

/// A prefix tree of words, one character per edge.
///
/// The child layout `C` decides which characters can be stored and in which
/// order completions come back; see [`InsertionOrder`] and
/// [`LowercaseAlphabet`].
pub struct Trie<C: ChildMap = InsertionOrder> {
    /// The root node of the trie, never marked as a word
    root: TrieNode<C>,

    /// The number of distinct words stored in the trie
    size: usize,

    /// The number of nodes, root included
    nodes: usize,
}

/// A trie accepting any `char`, returning completions in insertion order.
pub type InsertionOrderTrie = Trie<InsertionOrder>;

/// A trie restricted to `a..=z`, returning completions alphabetically.
pub type AlphabetTrie = Trie<LowercaseAlphabet>;

impl<C: ChildMap> Trie<C> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let trie: Trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            size: 0,
            nodes: 1,
        }
    }

    /// Returns the number of words stored in the trie.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes in the trie, the root included.
    ///
    /// Words sharing a prefix share the nodes for that prefix, so this grows
    /// with the number of distinct paths rather than the total key length.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie: Trie = Trie::new();
    /// trie.insert("tea");
    /// trie.insert("ten");
    /// // root, t, e, a, n
    /// assert_eq!(trie.node_count(), 5);
    /// ```
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode<C> {
        &self.root
    }

    /// Inserts `key`, returning `true` if it was not already stored.
    ///
    /// Missing nodes along the path are created and the last one is marked as
    /// a word. Every character is checked against the child layout before
    /// anything is created, so a rejected key leaves the trie untouched.
    ///
    /// The empty key is never stored: the root stays unmarked and
    /// `Ok(false)` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::{AlphabetTrie, Error};
    ///
    /// let mut trie = AlphabetTrie::new();
    /// assert_eq!(trie.try_insert("cat"), Ok(true));
    /// assert_eq!(trie.try_insert("cat"), Ok(false));
    /// assert_eq!(trie.try_insert("Cat"), Err(Error::OutOfAlphabet('C')));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn try_insert(&mut self, key: &str) -> Result<bool, C::Error> {
        if key.is_empty() {
            return Ok(false);
        }

        if let Err(e) = key.chars().try_for_each(C::accepts) {
            debug!(key, error = %e, "rejected key");
            return Err(e);
        }

        let mut current = &mut self.root;
        for c in key.chars() {
            let (child, created) = current.children.get_or_create(c)?;
            if created {
                self.nodes += 1;
                trace!(edge = %c, "created node");
            }
            current = child;
        }

        let added = !current.end_of_word;
        current.end_of_word = true;
        if added {
            self.size += 1;
        }

        Ok(added)
    }

    /// Checks whether `key` is present.
    ///
    /// With `full_word == false` this asks whether any stored word starts with
    /// `key`. With `full_word == true` it asks whether `key` itself was
    /// inserted. The empty key is always a prefix and never a word.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie: Trie = Trie::new();
    /// trie.insert("cat");
    ///
    /// assert!(trie.search("ca", false));
    /// assert!(!trie.search("ca", true));
    /// assert!(trie.search("cat", true));
    /// assert!(!trie.search("dog", false));
    /// ```
    pub fn search(&self, key: &str, full_word: bool) -> bool {
        match self.root.descend(key) {
            Some(node) if full_word => node.end_of_word,
            Some(_) => true,
            None => false,
        }
    }

    /// Returns `true` if `key` was inserted as a word.
    pub fn contains(&self, key: &str) -> bool {
        self.search(key, true)
    }

    /// Returns `true` if some stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.search(prefix, false)
    }

    /// Returns an iterator over the stored words that start with `prefix`.
    ///
    /// `prefix` itself is included when it is a stored word. If no stored
    /// word starts with `prefix` the iterator is empty.
    pub fn completions<'a>(&'a self, prefix: &str) -> Completions<'a, C> {
        Completions::new(self.root.descend(prefix), prefix)
    }

    /// Collects every stored word that starts with `prefix`.
    ///
    /// The order is the traversal order of [`completions`](Self::completions):
    /// insertion order for [`InsertionOrderTrie`], alphabetical for
    /// [`AlphabetTrie`]. Sort the result if a fixed order is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie: Trie = Trie::new();
    /// for word in ["latish is some", "laa", "lapavan", "latishpavan"] {
    ///     trie.insert(word);
    /// }
    ///
    /// assert_eq!(trie.get_all_matches("latish "), vec!["latish is some"]);
    /// assert!(trie.get_all_matches("xyz").is_empty());
    /// ```
    pub fn get_all_matches(&self, prefix: &str) -> Vec<String> {
        self.completions(prefix).collect()
    }

    /// Returns an iterator over all stored words.
    pub fn iter(&self) -> Completions<'_, C> {
        self.completions("")
    }
}

impl<C: ChildMap<Error = Infallible>> Trie<C> {
    /// Inserts `key` into a trie whose layout accepts every character.
    ///
    /// Inserting a word twice has no further effect.
    pub fn insert(&mut self, key: &str) {
        match self.try_insert(key) {
            Ok(_) => {}
            Err(never) => match never {},
        }
    }
}

// Dismantle the tree level by level; the derived drop would recurse once per
// character of the longest key.
impl<C: ChildMap> Drop for Trie<C> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.root.children.drain_into(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.children.drain_into(&mut pending);
        }
    }
}

impl<C: ChildMap> Default for Trie<C> {
    fn default() -> Self {
        Self::new()
    }
}

// Copies bottom-up: a node is attached to its copied parent once all of its
// own children have been copied.
impl<C: ChildMap> Clone for Trie<C> {
    fn clone(&self) -> Self {
        let mut root = TrieNode::new();
        let mut pending = vec![(None, self.root.children.iter(), TrieNode::<C>::new())];

        while let Some((_, children, _)) = pending.last_mut() {
            if let Some((c, child)) = children.next() {
                let mut copy = TrieNode::new();
                copy.end_of_word = child.end_of_word;
                pending.push((Some(c), child.children.iter(), copy));
                continue;
            }

            if let Some((edge, _, done)) = pending.pop() {
                match (edge, pending.last_mut()) {
                    (Some(c), Some((_, _, parent))) => parent.children.adopt(c, done),
                    _ => root = done,
                }
            }
        }

        Trie {
            root,
            size: self.size,
            nodes: self.nodes,
        }
    }
}

impl<C: ChildMap> fmt::Debug for Trie<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Structural: an insertion-ordered trie also compares child order.
impl<C: ChildMap> PartialEq for Trie<C> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size || self.nodes != other.nodes {
            return false;
        }

        let mut pending = vec![(&self.root, &other.root)];
        while let Some((a, b)) = pending.pop() {
            if a.end_of_word != b.end_of_word || a.children.len() != b.children.len() {
                return false;
            }
            for ((ca, na), (cb, nb)) in a.children.iter().zip(b.children.iter()) {
                if ca != cb {
                    return false;
                }
                pending.push((na, nb));
            }
        }
        true
    }
}

impl<C: ChildMap> Eq for Trie<C> {}

impl<'a, C: ChildMap> IntoIterator for &'a Trie<C> {
    type Item = String;
    type IntoIter = Completions<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>, C: ChildMap<Error = Infallible>> Extend<S> for Trie<C> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key.as_ref());
        }
    }
}

impl<S: AsRef<str>, C: ChildMap<Error = Infallible>> FromIterator<S> for Trie<C> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
