use crate::error::{Error, Result};
use crate::matcher::find_all;

/// The full text loaded for searching.
///
/// Positions are character offsets. An ASCII case-folded copy is kept next
/// to the original so case-insensitive searches report the same offsets.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    chars: Vec<char>,
    folded: Vec<char>,
}

impl Corpus {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let folded = chars.iter().map(char::to_ascii_lowercase).collect();
        Self { chars, folded }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Offsets of every occurrence of `pattern`.
    pub fn find(&self, pattern: &str, ignore_case: bool) -> Vec<usize> {
        if ignore_case {
            let p: Vec<char> = pattern.chars().map(|c| c.to_ascii_lowercase()).collect();
            find_all(&p, &self.folded)
        } else {
            let p: Vec<char> = pattern.chars().collect();
            find_all(&p, &self.chars)
        }
    }

    /// Up to `width` characters starting at `offset`, clamped to the end of
    /// the text. An offset equal to the length gives an empty snippet.
    pub fn snippet(&self, offset: usize, width: usize) -> Result<String> {
        if offset > self.chars.len() {
            return Err(Error::OutOfRange {
                offset,
                len: self.chars.len(),
            });
        }

        let end = offset.saturating_add(width).min(self.chars.len());
        Ok(self.chars[offset..end].iter().collect())
    }
}
