//! Property-based tests using proptest.
//!
//! The matcher and the completion trie are checked against simple,
//! obviously-correct oracles (a brute-force scan and a filtered word list),
//! and the trie is also cross-checked against the `trie-rs` crate.

use std::collections::BTreeMap;

use lector::{find_all, rank, AlphaTokenizer, Autocomplete, Tokenizer, Vocabulary};
use proptest::prelude::*;
use proptest::sample::Index;
use trie_rs::{Trie, TrieBuilder};

// ============================================================================
// ORACLES
// ============================================================================

/// Every offset `i` where `text[i..i + |pattern|] == pattern`.
fn oracle_find_all(pattern: &[char], text: &[char]) -> Vec<usize> {
    if pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

/// Words having `prefix` as a leading substring, in lexicographic order.
fn oracle_complete(words: &[String], prefix: &str) -> Vec<String> {
    let mut out: Vec<String> = words
        .iter()
        .filter(|w| w.starts_with(prefix))
        .cloned()
        .collect();
    out.sort();
    out
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Distinct lower-case words over a small alphabet, so prefixes are shared.
fn word_set_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-d]{1,6}", 0..40).prop_map(|s| s.into_iter().collect())
}

/// The same word set in sorted and in shuffled insertion order.
fn two_orders_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    word_set_strategy().prop_flat_map(|w| (Just(w.clone()), Just(w).prop_shuffle()))
}

/// Words mapped to how often they occur.
fn counts_strategy() -> impl Strategy<Value = BTreeMap<String, usize>> {
    prop::collection::btree_map("[a-e]{1,4}", 1usize..6, 1..20)
}

// ============================================================================
// MATCHER
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the matcher reports exactly the brute-force offsets.
    #[test]
    fn prop_matches_brute_force(text in "[ab]{0,40}", pattern in "[ab]{0,6}") {
        let (t, p) = (chars(&text), chars(&pattern));
        prop_assert_eq!(find_all(&p, &t), oracle_find_all(&p, &t));
    }

    /// Property: any substring of the text, of any length from 0 to |text|,
    /// is found at its own offset and everywhere else it occurs.
    #[test]
    fn prop_substrings_found(text in "[abc]{0,40}", a in any::<Index>(), b in any::<Index>()) {
        let t = chars(&text);
        let start = a.index(t.len() + 1);
        let len = b.index(t.len() - start + 1);
        let p = &t[start..start + len];

        let found = find_all(p, &t);
        prop_assert!(found.contains(&start));
        prop_assert_eq!(found, oracle_find_all(p, &t));
    }

    /// Property: offsets are strictly ascending.
    #[test]
    fn prop_offsets_ascending(text in "[ab ]{0,60}", pattern in "[ab]{1,3}") {
        let found = find_all(&chars(&pattern), &chars(&text));
        prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
    }
}

// ============================================================================
// AUTOCOMPLETE
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the empty prefix enumerates exactly the word set.
    #[test]
    fn prop_empty_prefix_is_word_set(words in word_set_strategy()) {
        let ac = Autocomplete::build(&words);
        prop_assert_eq!(ac.query("", None), oracle_complete(&words, ""));
        prop_assert_eq!(ac.len(), words.len());
    }

    /// Property: a prefix returns exactly the words starting with it.
    #[test]
    fn prop_prefix_filter(words in word_set_strategy(), prefix in "[a-e]{0,3}") {
        let ac = Autocomplete::build(&words);
        prop_assert_eq!(ac.query(&prefix, None), oracle_complete(&words, &prefix));
    }

    /// Property: a limit returns the first `limit` words of the full result.
    #[test]
    fn prop_limit_is_prefix_of_full(words in word_set_strategy(), prefix in "[a-d]{0,2}", limit in 0usize..10) {
        let ac = Autocomplete::build(&words);
        let full = ac.query(&prefix, None);
        let limited = ac.query(&prefix, Some(limit));
        prop_assert_eq!(limited.len(), limit.min(full.len()));
        prop_assert_eq!(&limited[..], &full[..limited.len()]);
    }

    /// Property: insertion order changes neither shape nor enumeration order.
    #[test]
    fn prop_insertion_order_independent((sorted, shuffled) in two_orders_strategy(), prefix in "[a-d]{0,2}") {
        let a = Autocomplete::build(&sorted);
        let b = Autocomplete::build(&shuffled);
        prop_assert_eq!(a.node_count(), b.node_count());
        prop_assert_eq!(a.query(&prefix, None), b.query(&prefix, None));
    }

    /// Property: completions agree with trie-rs predictive search.
    #[test]
    fn prop_agrees_with_trie_rs(words in word_set_strategy(), prefix in "[a-d]{1,3}") {
        prop_assume!(!words.is_empty());

        let mut b = TrieBuilder::new();
        for w in &words {
            b.push(w);
        }
        let other: Trie<u8> = b.build();
        let mut expected: Vec<String> = other.predictive_search(&prefix).collect();
        expected.sort();

        let ac = Autocomplete::build(&words);
        prop_assert_eq!(ac.query(&prefix, None), expected);
    }
}

// ============================================================================
// RANKER AND TOKENIZER
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: ranked output is a permutation sorted by descending
    /// frequency, then ascending word.
    #[test]
    fn prop_rank_order(counts in counts_strategy()) {
        let vocab = Vocabulary::from_tokens(
            counts.iter().flat_map(|(w, &n)| std::iter::repeat_n(w.clone(), n)),
        );
        let ranked = rank(counts.keys().rev().cloned(), &vocab);

        prop_assert_eq!(ranked.len(), counts.len());
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.frequency > b.frequency || (a.frequency == b.frequency && a.word < b.word),
                "{:?} ranked before {:?}", a, b
            );
        }
        for r in &ranked {
            prop_assert_eq!(Some(&r.frequency), counts.get(&r.word));
        }
    }

    /// Property: words are non-empty lower-case ASCII letters and the
    /// frequencies add up to the number of tokens.
    #[test]
    fn prop_vocabulary_invariants(text in "\\PC{0,80}") {
        let tokens = AlphaTokenizer.tokenize(&text);
        prop_assert!(tokens.iter().all(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase())));

        let vocab = Vocabulary::from_text(&AlphaTokenizer, &text);
        let sum: usize = vocab.words().filter_map(|w| vocab.frequency(w)).sum();
        prop_assert_eq!(sum, vocab.total_tokens());
        prop_assert_eq!(sum, tokens.len());
        prop_assert!(tokens.iter().all(|w| vocab.contains(w)));
    }
}
