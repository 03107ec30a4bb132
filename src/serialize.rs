//! Serde support, enabled with the `serde` feature.
//!
//! A trie serializes as the sequence of its stored words in completion
//! order, and deserializes by inserting each word in turn. Rebuilding an
//! insertion-ordered trie from its own output reproduces its child order.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::children::ChildMap;
use crate::trie::Trie;

impl<C: ChildMap> Serialize for Trie<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for word in self.iter() {
            seq.serialize_element(&word)?;
        }
        seq.end()
    }
}

struct TrieVisitor<C>(PhantomData<C>);

impl<'de, C: ChildMap> Visitor<'de> for TrieVisitor<C> {
    type Value = Trie<C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of words")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut trie = Trie::new();
        while let Some(word) = seq.next_element::<String>()? {
            trie.try_insert(&word).map_err(de::Error::custom)?;
        }
        Ok(trie)
    }
}

impl<'de, C: ChildMap> Deserialize<'de> for Trie<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TrieVisitor(PhantomData))
    }
}
