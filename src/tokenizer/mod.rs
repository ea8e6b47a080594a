use std::collections::BTreeMap;

/// Tokenizer trait for turning raw text into normalized words.
pub trait Tokenizer: Send + Sync {
    /// Split text into words, in the order they occur.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits text into maximal runs of ASCII letters, lower-cased.
///
/// Any other character (digit, punctuation, whitespace, non-ASCII) ends the
/// current run, so "Don't stop2go" yields `["don", "t", "stop", "go"]`.
pub struct AlphaTokenizer;

impl Tokenizer for AlphaTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_ascii_alphabetic())
            .filter(|run| !run.is_empty())
            .map(|run| run.to_ascii_lowercase())
            .collect()
    }
}

/// The distinct words of a text together with how often each occurs.
///
/// The word set is the key set of the frequency table, so the two can never
/// disagree. Keys are kept ordered so that iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    freqs: BTreeMap<String, usize>,
    tokens: usize,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize text and count every word.
    pub fn from_text(tokenizer: &dyn Tokenizer, text: &str) -> Self {
        Self::from_tokens(tokenizer.tokenize(text))
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut v = Self::new();
        for t in tokens {
            v.add(t);
        }
        v
    }

    fn add(&mut self, word: String) {
        *self.freqs.entry(word).or_insert(0) += 1;
        self.tokens += 1;
    }

    /// Distinct words in ascending order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.freqs.keys().map(String::as_str)
    }

    /// Occurrence count of a word, `None` if it never occurred.
    pub fn frequency(&self, word: &str) -> Option<usize> {
        self.freqs.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.freqs.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Total number of tokens counted, i.e. the sum of all frequencies.
    pub fn total_tokens(&self) -> usize {
        self.tokens
    }
}
