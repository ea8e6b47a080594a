use std::path::{Path, PathBuf};

use crate::{
    autocomplete::Autocomplete,
    corpus::Corpus,
    error::{Error, Result},
    ranker::{self, Ranked},
    tokenizer::{AlphaTokenizer, Vocabulary},
};

/// Everything derived from one loaded text: the corpus, its vocabulary and
/// (once built) the completion index.
///
/// Loading a new text means building a new `Session`; the old one, including
/// its whole trie, is released when dropped.
pub struct Session {
    source: Option<PathBuf>,
    corpus: Corpus,
    vocab: Vocabulary,
    index: Option<Autocomplete>,
}

impl Session {
    /// Build a session from in-memory text. The index is not built yet.
    pub fn from_text(text: &str) -> Self {
        Self {
            source: None,
            corpus: Corpus::new(text),
            vocab: Vocabulary::from_text(&AlphaTokenizer, text),
            index: None,
        }
    }

    /// Read a text file. Any failure to read it (missing, a directory, no
    /// permission) is `NotFound`. Invalid UTF-8 sequences are replaced with
    /// U+FFFD. An empty file is not an error and gives an empty corpus and
    /// vocabulary.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| Error::NotFound {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut s = Self::from_text(&String::from_utf8_lossy(&bytes));
        s.source = Some(path.to_path_buf());
        Ok(s)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Exact, case-sensitive search.
    pub fn search(&self, pattern: &str) -> Vec<usize> {
        self.corpus.find(pattern, false)
    }

    pub fn search_with(&self, pattern: &str, ignore_case: bool) -> Vec<usize> {
        self.corpus.find(pattern, ignore_case)
    }

    pub fn snippet(&self, offset: usize, width: usize) -> Result<String> {
        self.corpus.snippet(offset, width)
    }

    /// (Re)build the completion index from the vocabulary, replacing any
    /// previous one.
    pub fn build_index(&mut self) -> &Autocomplete {
        self.index.insert(Autocomplete::build(self.vocab.words()))
    }

    pub fn index(&self) -> Result<&Autocomplete> {
        self.index.as_ref().ok_or(Error::NotBuilt)
    }

    /// Words starting with `prefix` in trie order, stopping at `limit`.
    pub fn complete(&self, prefix: &str, limit: Option<usize>) -> Result<Vec<String>> {
        Ok(self.index()?.query(prefix, limit))
    }

    /// All words starting with `prefix`, ranked by frequency, then cut to
    /// `limit`.
    pub fn suggest(&self, prefix: &str, limit: Option<usize>) -> Result<Vec<Ranked>> {
        let words = self.index()?.predictive_search(prefix);
        let mut out = ranker::rank(words, &self.vocab);
        if let Some(n) = limit {
            out.truncate(n);
        }
        Ok(out)
    }

    /// The `n` most frequent words of the text.
    pub fn top_words(&self, n: usize) -> Vec<Ranked> {
        let mut out = ranker::rank(self.vocab.words().map(str::to_string), &self.vocab);
        out.truncate(n);
        out
    }
}
