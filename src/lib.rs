//! Exact pattern search and word completion over a plain text.
//!
//! A loaded text becomes a [`Session`]: the text itself (searched with a
//! linear-time matcher), the vocabulary of lower-cased alphabetic words with
//! their occurrence counts, and a prefix tree over that vocabulary whose
//! completions can be ranked by frequency.
//!
//! ```
//! use lector::Session;
//!
//! let mut s = Session::from_text("The cat sat. The cat ran. A car!");
//! assert_eq!(s.search("cat"), vec![4, 17]);
//!
//! s.build_index();
//! let words: Vec<String> = s.suggest("ca", None).unwrap().into_iter().map(|r| r.word).collect();
//! assert_eq!(words, vec!["cat", "car"]);
//! ```

pub mod autocomplete;
pub mod config;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod ranker;
pub mod session;
pub mod tokenizer;

pub use autocomplete::{Autocomplete, Completions};
pub use config::{Config, ConfigError};
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use matcher::{failure_function, find_all, Matcher};
pub use ranker::{rank, Ranked};
pub use session::Session;
pub use tokenizer::{AlphaTokenizer, Tokenizer, Vocabulary};
