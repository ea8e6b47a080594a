use std::cmp::Ordering;

use serde::Serialize;

use crate::tokenizer::Vocabulary;

/// A word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked {
    pub word: String,
    pub frequency: usize,
}

impl Ranked {
    /// Pair a word with its count in `vocab`.
    ///
    /// # Panics
    ///
    /// If `word` is not in `vocab`. Words come from a trie built from the
    /// same vocabulary, so a missing word is a bug in the caller.
    pub fn lookup(word: String, vocab: &Vocabulary) -> Self {
        let frequency = vocab
            .frequency(&word)
            .unwrap_or_else(|| panic!("word '{}' is not in the vocabulary", word));
        Self { word, frequency }
    }
}

/// Order by descending frequency, then ascending word.
fn compare(a: &Ranked, b: &Ranked) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| a.word.cmp(&b.word))
}

/// Rank words by how often they occur in the vocabulary.
///
/// # Panics
///
/// Every word must be present in `vocab`, see [`Ranked::lookup`].
pub fn rank<I>(words: I, vocab: &Vocabulary) -> Vec<Ranked>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<Ranked> = words
        .into_iter()
        .map(|word| Ranked::lookup(word, vocab))
        .collect();

    out.sort_by(compare);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(counts: &[(&str, usize)]) -> Vocabulary {
        Vocabulary::from_tokens(
            counts
                .iter()
                .flat_map(|(w, n)| std::iter::repeat_n(w.to_string(), *n)),
        )
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn rank_words(words: Vec<String>, v: &Vocabulary) -> Vec<String> {
        rank(words, v).into_iter().map(|r| r.word).collect()
    }

    #[test]
    fn test_frequency_then_lexicographic() {
        let v = vocab(&[("cat", 3), ("car", 3), ("can", 5)]);
        let out = rank_words(owned(&["can", "car", "cat"]), &v);
        assert_eq!(out, vec!["can", "car", "cat"]);

        let out = rank_words(owned(&["cat", "car", "can"]), &v);
        assert_eq!(out, vec!["can", "car", "cat"]);
    }

    #[test]
    fn test_descending_frequency() {
        let v = vocab(&[("a", 1), ("b", 2), ("c", 3)]);
        let out = rank(owned(&["a", "b", "c"]), &v);
        let freqs: Vec<usize> = out.iter().map(|r| r.frequency).collect();
        assert_eq!(freqs, vec![3, 2, 1]);
        assert_eq!(out[0].word, "c");
    }

    #[test]
    fn test_ties_broken_alphabetically() {
        let v = vocab(&[("delta", 1), ("alpha", 1), ("charlie", 1), ("bravo", 1)]);
        let out = rank_words(owned(&["delta", "charlie", "bravo", "alpha"]), &v);
        assert_eq!(out, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_empty() {
        let v = vocab(&[("a", 1)]);
        assert!(rank(Vec::new(), &v).is_empty());
    }

    #[test]
    #[should_panic(expected = "not in the vocabulary")]
    fn test_unknown_word_panics() {
        let v = vocab(&[("a", 1)]);
        rank(owned(&["b"]), &v);
    }

    #[test]
    fn test_lookup() {
        let v = vocab(&[("a", 2)]);
        let r = Ranked::lookup("a".to_string(), &v);
        assert_eq!(r.word, "a");
        assert_eq!(r.frequency, 2);
    }

    #[test]
    #[should_panic(expected = "not in the vocabulary")]
    fn test_lookup_unknown_word_panics() {
        Ranked::lookup("b".to_string(), &vocab(&[("a", 1)]));
    }
}
