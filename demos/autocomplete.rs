//! Completes a handful of phrases by prefix.
//!
//! Set `TRIE_TRACE=1` to print the node-creation events emitted while the
//! tries are built.
use prefix_trie::{AlphabetTrie, Trie};
use tracing::info;

fn main() {
    if std::env::var_os("TRIE_TRACE").is_some() {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .init();
    }

    let mut trie: Trie = Trie::new();
    trie.insert("latish is some");
    trie.insert("laa");
    trie.insert("lapavan");
    trie.insert("latishpavan");

    info!(words = trie.len(), nodes = trie.node_count(), "built trie");
    println!("{:?}", trie.get_all_matches("latish "));
    println!("{:?}", trie.get_all_matches("la"));

    // The alphabet layout only takes a..=z, so the phrase with spaces is refused
    let mut letters = AlphabetTrie::new();
    for word in ["latish is some", "laa", "lapavan", "latishpavan"] {
        if let Err(e) = letters.try_insert(word) {
            println!("skipped {:?}: {}", word, e);
        }
    }
    println!("{:?}", letters.get_all_matches("la"));
}
