//! # Prefix Trie
//!
//! A character trie (prefix tree) with prefix search and completion
//! enumeration.
//!
//! Every edge of the tree carries one `char` and every node records whether
//! the path leading to it was inserted as a complete word. Words sharing a
//! prefix share the nodes for that prefix.
//!
//! ## Features
//!
//! - **Insert**: add words one at a time, or collect them from an iterator
//! - **Search**: ask whether a string is a stored word or merely a prefix of one
//! - **Completions**: enumerate every stored word beginning with a prefix
//! - **Two layouts**: [`InsertionOrder`] children accept any character and
//!   are visited in insertion order; [`LowercaseAlphabet`] children sit in 26
//!   fixed slots and are visited alphabetically
//!
//! ## Example
//!
//! ```rust
//! use prefix_trie::Trie;
//!
//! let mut trie: Trie = Trie::new();
//! trie.insert("latish");
//! trie.insert("laa");
//! trie.insert("lapavan");
//! trie.insert("latishpavan");
//!
//! assert!(trie.search("lat", false));
//! assert!(!trie.search("lat", true));
//!
//! let mut matches = trie.get_all_matches("la");
//! matches.sort();
//! assert_eq!(matches, vec!["laa", "lapavan", "latish", "latishpavan"]);
//! ```

pub mod children;
mod completions;
pub mod node;
#[cfg(feature = "serde")]
mod serialize;
mod trie;

// Re-export public types
pub use crate::children::{ChildMap, InsertionOrder, LowercaseAlphabet};
pub use crate::completions::Completions;
pub use crate::node::TrieNode;
pub use crate::trie::{AlphabetTrie, InsertionOrderTrie, Trie};

use thiserror::Error;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A character with no slot in a [`LowercaseAlphabet`] node
    #[error("character {0:?} is outside the a-z alphabet")]
    OutOfAlphabet(char),
}
