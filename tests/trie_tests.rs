use prefix_trie::{AlphabetTrie, ChildMap, Error, InsertionOrderTrie, Trie};
use std::collections::BTreeSet;

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

#[test]
fn test_matches_with_embedded_space() {
    let mut trie: Trie = Trie::new();
    trie.insert("latish is some");
    trie.insert("laa");
    trie.insert("lapavan");
    trie.insert("latishpavan");

    assert_eq!(trie.get_all_matches("latish "), vec!["latish is some"]);
}

#[test]
fn test_matches_for_shared_prefix() {
    let trie: Trie = ["latish", "laa", "lapavan", "latishpavan"].iter().collect();

    let matches: BTreeSet<String> = trie.get_all_matches("la").into_iter().collect();
    let expected: BTreeSet<String> = ["laa", "lapavan", "latish", "latishpavan"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(matches, expected);
}

#[test]
fn test_fresh_trie_searches() {
    let trie: Trie = Trie::new();
    assert!(!trie.search("anything", true));
    assert!(trie.search("", false));

    let fixed = AlphabetTrie::new();
    assert!(!fixed.search("anything", true));
    assert!(fixed.search("", false));
}

#[test]
fn test_prefix_versus_full_word() {
    let mut trie: Trie = Trie::new();
    trie.insert("cat");

    assert!(!trie.search("ca", true));
    assert!(trie.search("ca", false));
    assert!(trie.search("cat", true));
}

#[test]
fn test_empty_prefix_enumerates_everything_once() {
    let words = ["to", "tea", "ted", "ten", "i", "in", "inn", "to"];
    let trie: Trie = words.iter().collect();

    let all = sorted(trie.get_all_matches(""));
    assert_eq!(all, vec!["i", "in", "inn", "tea", "ted", "ten", "to"]);
    assert_eq!(trie.len(), 7);
}

#[test]
fn test_missing_prefix_has_no_partial_results() {
    let trie: Trie = ["latish", "laa"].iter().collect();
    assert!(trie.get_all_matches("latz").is_empty());
    assert!(trie.get_all_matches("latishpavan").is_empty());
}

#[test]
fn test_sparse_alphabet_slots_yield_no_spurious_matches() {
    let mut trie = AlphabetTrie::new();
    trie.try_insert("m").unwrap();
    trie.try_insert("mz").unwrap();
    trie.try_insert("ma").unwrap();

    // 23 of the 26 slots under "m" stay empty
    assert_eq!(trie.root().child('m').unwrap().children().len(), 2);
    assert_eq!(trie.get_all_matches("m"), vec!["m", "ma", "mz"]);
    assert!(trie.get_all_matches("mb").is_empty());
    assert!(!trie.search("mb", false));
}

#[test]
fn test_alphabet_trie_matches_are_sorted() {
    let mut trie = AlphabetTrie::new();
    for word in ["latishpavan", "lapavan", "latish", "laa"] {
        trie.try_insert(word).unwrap();
    }

    assert_eq!(
        trie.get_all_matches("la"),
        vec!["laa", "lapavan", "latish", "latishpavan"]
    );
}

#[test]
fn test_alphabet_trie_rejects_space() {
    let mut trie = AlphabetTrie::new();
    assert_eq!(
        trie.try_insert("latish is some"),
        Err(Error::OutOfAlphabet(' '))
    );
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
}

#[test]
fn test_unicode_keys() {
    let trie: InsertionOrderTrie = ["héllo", "hé", "naïve"].iter().collect();

    assert!(trie.contains("hé"));
    assert!(trie.starts_with("na"));
    assert_eq!(trie.get_all_matches("hé"), vec!["hé", "héllo"]);
}

#[test]
fn test_long_key_does_not_overflow() {
    let long: String = std::iter::repeat('a').take(100_000).collect();
    let mut trie: Trie = Trie::new();
    trie.insert(&long);
    trie.insert(&long[..10]);

    assert!(trie.contains(&long));
    assert_eq!(trie.node_count(), 100_001);
    let matches = trie.get_all_matches("aaaaa");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].len(), 10);
    assert_eq!(matches[1], long);
}

fn deep_trie() -> Trie {
    let long: String = std::iter::repeat('a').take(100_000).collect();
    let mut trie: Trie = Trie::new();
    trie.insert(&long);
    trie
}

#[test]
fn test_long_key_clone_does_not_overflow() {
    let trie = deep_trie();
    let copy = trie.clone();

    assert_eq!(copy.node_count(), 100_001);
    assert_eq!(copy.len(), 1);
    assert!(copy.starts_with("aaaa"));
    assert_eq!(copy.get_all_matches("a")[0].len(), 100_000);
}

#[test]
fn test_long_key_equality_does_not_overflow() {
    assert!(deep_trie() == deep_trie());

    let mut other = deep_trie();
    other.insert("aaa");
    assert!(deep_trie() != other);
}

#[test]
fn test_long_alphabet_key_clone_and_equality() {
    let long: String = std::iter::repeat('q').take(100_000).collect();
    let mut trie = AlphabetTrie::new();
    trie.try_insert(&long).unwrap();

    let copy = trie.clone();
    assert!(copy == trie);
    assert!(copy.contains(&long));
}

#[test]
fn test_tracing_subscriber_sees_rejections() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut trie = AlphabetTrie::new();
    assert!(trie.try_insert("Nope").is_err());
    assert!(trie.try_insert("yes").is_ok());
}
