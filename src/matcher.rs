//! Linear-time exact pattern matching (Knuth-Morris-Pratt).
//!
//! The pattern is preprocessed into a failure function once; each scan of a
//! text is then a single left-to-right pass that never moves backwards in the
//! text. Matching runs in O(|text| + |pattern|) time and O(|pattern|) extra
//! space regardless of alphabet size.
//!
//! Every occurrence is reported, including overlapping ones. An empty pattern
//! matches (with zero length) at every position `0..=text.len()`.
//!
//! ```
//! use lector::matcher::find_all;
//!
//! let text: Vec<char> = "abracadabra".chars().collect();
//! let pattern: Vec<char> = "abra".chars().collect();
//! assert_eq!(find_all(&pattern, &text), vec![0, 7]);
//! ```

/// Build the failure function of a pattern.
///
/// `f[i]` is the length of the longest proper prefix of `pattern[..=i]` that
/// is also a suffix of it.
pub fn failure_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut f = vec![0; pattern.len()];
    let mut j = 0;

    for i in 1..pattern.len() {
        while j > 0 && pattern[i] != pattern[j] {
            j = f[j - 1];
        }
        if pattern[i] == pattern[j] {
            j += 1;
        }
        f[i] = j;
    }
    f
}

/// Find the start offsets of every occurrence of `pattern` in `text`, in
/// ascending order.
pub fn find_all<T: PartialEq>(pattern: &[T], text: &[T]) -> Vec<usize> {
    Matcher::new(pattern).find_iter(text).collect()
}

/// A pattern compiled for repeated searches.
pub struct Matcher<'p, T> {
    pattern: &'p [T],
    failure: Vec<usize>,
}

impl<'p, T: PartialEq> Matcher<'p, T> {
    pub fn new(pattern: &'p [T]) -> Self {
        Self {
            pattern,
            failure: failure_function(pattern),
        }
    }

    /// Lazily iterate over match offsets in `text`.
    pub fn find_iter<'a>(&'a self, text: &'a [T]) -> Matches<'a, T> {
        Matches {
            matcher: self,
            text,
            i: 0,
            j: 0,
        }
    }
}

/// Iterator over match offsets, produced by [`Matcher::find_iter`].
pub struct Matches<'a, T> {
    matcher: &'a Matcher<'a, T>,
    text: &'a [T],
    // Text position.
    i: usize,
    // Number of pattern elements currently matched.
    j: usize,
}

impl<'a, T: PartialEq> Iterator for Matches<'a, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let pattern = self.matcher.pattern;
        let failure = &self.matcher.failure;
        let m = pattern.len();
        let n = self.text.len();

        if m == 0 {
            if self.i > n {
                return None;
            }
            self.i += 1;
            return Some(self.i - 1);
        }

        while self.i < n {
            if self.text[self.i] == pattern[self.j] {
                self.i += 1;
                self.j += 1;
                if self.j == m {
                    self.j = failure[m - 1];
                    return Some(self.i - m);
                }
            } else if self.j > 0 {
                self.j = failure[self.j - 1];
            } else {
                self.i += 1;
            }
        }
        None
    }
}
