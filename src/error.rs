use std::path::PathBuf;

/// Failures reported by the text index.
///
/// "Nothing matched" is never an error: searches and completions return
/// empty sequences for that.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{}' could not be read: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Empty(String),
    #[error("offset {offset} is out of range (corpus length {len})")]
    OutOfRange { offset: usize, len: usize },
    #[error("index has not been built")]
    NotBuilt,
    /// Host input and output, never the source text.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
