//! Child maps: how a node stores the edges to its children.
//!
//! The trie algorithms only talk to a node's children through [`ChildMap`],
//! so the same insert/search/traversal code runs over both layouts provided
//! here.
use std::convert::Infallible;
use std::fmt;
use std::iter::FilterMap;
use std::slice;

use crate::node::TrieNode;
use crate::Error;

/// A mapping from a single `char` to an exclusively owned child node.
pub trait ChildMap: Default + Sized {
    /// Error returned when a character cannot be stored in this layout.
    type Error: std::error::Error;

    /// Iterator over present children, in visiting order.
    type Iter<'a>: DoubleEndedIterator<Item = (char, &'a TrieNode<Self>)>
    where
        Self: 'a;

    /// Returns the child stored under `c`, if any.
    fn get(&self, c: char) -> Option<&TrieNode<Self>>;

    /// Returns the child stored under `c`, creating an unmarked one first if
    /// it is missing. The flag is `true` when the child was created.
    fn get_or_create(&mut self, c: char) -> Result<(&mut TrieNode<Self>, bool), Self::Error>;

    /// Returns the child stored under `c`, creating an unmarked one first if
    /// it is missing.
    fn get_or_insert(&mut self, c: char) -> Result<&mut TrieNode<Self>, Self::Error> {
        self.get_or_create(c).map(|(node, _)| node)
    }

    /// Stores `node` under `c`, replacing any existing child.
    ///
    /// `c` must be a character this layout yields from [`iter`](Self::iter).
    fn adopt(&mut self, c: char, node: TrieNode<Self>);

    /// Checks that `c` could be stored without creating anything.
    fn accepts(c: char) -> Result<(), Self::Error>;

    /// Returns the present children in visiting order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Moves every child out into `out`, leaving this map empty.
    fn drain_into(&mut self, out: &mut Vec<TrieNode<Self>>);

    /// Number of present children.
    fn len(&self) -> usize;

    /// Returns whether no child is present.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Children created lazily and visited in the order they were first added.
///
/// Accepts any `char`. Lookup is a linear scan, which stays cheap for the
/// small fan-out of natural-language tries.
#[derive(Default)]
pub struct InsertionOrder {
    entries: Vec<(char, TrieNode<InsertionOrder>)>,
}

impl fmt::Debug for InsertionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.entries.iter().map(|(c, _)| c))
            .finish()
    }
}

type EntryFn = for<'a> fn(&'a (char, TrieNode<InsertionOrder>)) -> (char, &'a TrieNode<InsertionOrder>);

fn entry_pair(entry: &(char, TrieNode<InsertionOrder>)) -> (char, &TrieNode<InsertionOrder>) {
    (entry.0, &entry.1)
}

impl ChildMap for InsertionOrder {
    type Error = Infallible;
    type Iter<'a> = std::iter::Map<slice::Iter<'a, (char, TrieNode<InsertionOrder>)>, EntryFn>;

    fn get(&self, c: char) -> Option<&TrieNode<Self>> {
        self.entries
            .iter()
            .find(|(key, _)| *key == c)
            .map(|(_, node)| node)
    }

    fn get_or_create(&mut self, c: char) -> Result<(&mut TrieNode<Self>, bool), Self::Error> {
        let (idx, created) = match self.entries.iter().position(|(key, _)| *key == c) {
            Some(idx) => (idx, false),
            None => {
                self.entries.push((c, TrieNode::new()));
                (self.entries.len() - 1, true)
            }
        };
        Ok((&mut self.entries[idx].1, created))
    }

    fn adopt(&mut self, c: char, node: TrieNode<Self>) {
        match self.entries.iter_mut().find(|(key, _)| *key == c) {
            Some(entry) => entry.1 = node,
            None => self.entries.push((c, node)),
        }
    }

    fn accepts(_c: char) -> Result<(), Self::Error> {
        Ok(())
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.entries.iter().map(entry_pair as EntryFn)
    }

    fn drain_into(&mut self, out: &mut Vec<TrieNode<Self>>) {
        out.extend(self.entries.drain(..).map(|(_, node)| node));
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Number of slots in a [`LowercaseAlphabet`] node.
pub const ALPHABET_LEN: usize = 26;

/// Children held in 26 pre-allocated slots, one per letter `a..=z`.
///
/// Every slot exists from the moment the node is created, but holds `None`
/// until a word passes through it. Children are visited alphabetically and
/// empty slots are skipped. Characters outside `a..=z` can be searched for
/// (they are never found) but cannot be inserted.
pub struct LowercaseAlphabet {
    slots: [Option<Box<TrieNode<LowercaseAlphabet>>>; ALPHABET_LEN],
}

impl Default for LowercaseAlphabet {
    fn default() -> Self {
        LowercaseAlphabet {
            slots: Default::default(),
        }
    }
}

impl fmt::Debug for LowercaseAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|(c, _)| c)).finish()
    }
}

fn slot_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

type SlotFn = for<'a> fn(
    (usize, &'a Option<Box<TrieNode<LowercaseAlphabet>>>),
) -> Option<(char, &'a TrieNode<LowercaseAlphabet>)>;

fn present_slot(
    (idx, slot): (usize, &Option<Box<TrieNode<LowercaseAlphabet>>>),
) -> Option<(char, &TrieNode<LowercaseAlphabet>)> {
    slot.as_deref().map(|node| ((b'a' + idx as u8) as char, node))
}

impl ChildMap for LowercaseAlphabet {
    type Error = Error;
    type Iter<'a> = FilterMap<
        std::iter::Enumerate<slice::Iter<'a, Option<Box<TrieNode<LowercaseAlphabet>>>>>,
        SlotFn,
    >;

    fn get(&self, c: char) -> Option<&TrieNode<Self>> {
        slot_index(c).and_then(|idx| self.slots[idx].as_deref())
    }

    fn get_or_create(&mut self, c: char) -> Result<(&mut TrieNode<Self>, bool), Self::Error> {
        let idx = slot_index(c).ok_or(Error::OutOfAlphabet(c))?;
        let slot = &mut self.slots[idx];
        let created = slot.is_none();
        let node = slot.get_or_insert_with(|| Box::new(TrieNode::new()));
        Ok((&mut **node, created))
    }

    fn adopt(&mut self, c: char, node: TrieNode<Self>) {
        if let Some(idx) = slot_index(c) {
            self.slots[idx] = Some(Box::new(node));
        }
    }

    fn accepts(c: char) -> Result<(), Self::Error> {
        slot_index(c).map(|_| ()).ok_or(Error::OutOfAlphabet(c))
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.slots.iter().enumerate().filter_map(present_slot as SlotFn)
    }

    fn drain_into(&mut self, out: &mut Vec<TrieNode<Self>>) {
        out.extend(self.slots.iter_mut().filter_map(Option::take).map(|node| *node));
    }

    fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
