//! Error types for copyspan.

use std::io;

use thiserror::Error;

/// Errors returned by index construction, queries and the text helpers.
#[derive(Error, Debug)]
pub enum LcsError {
    /// The k-gram size must be at least one word.
    #[error("invalid k-gram size {k}: k must be positive")]
    InvalidK { k: usize },

    /// A from-start query was rooted outside the query sequence.
    #[error("start index {start} out of range for query of {len} words")]
    StartOutOfRange { start: usize, len: usize },

    /// The corpus has more distinct words than a `WordId` can address.
    #[error("vocabulary of {size} distinct words does not fit in a word id")]
    VocabularyOverflow { size: usize },

    /// A Markov start k-gram has the wrong number of words.
    #[error("start k-gram has {actual} words, expected {expected}")]
    StartKgramLength { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LcsError>;
