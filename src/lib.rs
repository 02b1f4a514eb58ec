//! Word-level longest-common-substring search against a reference corpus.
//!
//! A [`HashedLcs`] indexes every word k-gram of a corpus once. Queries then
//! ask how long a verbatim copy of the corpus starts at a given query word,
//! what the longest copied run is overall, or how the whole query splits into
//! copied runs and novel words.
//!
//! ```
//! use copyspan::{HashedLcs, LcsFinder};
//!
//! let corpus: Vec<&str> = "the cat sat on the mat".split_whitespace().collect();
//! let query: Vec<&str> = "the cat ran".split_whitespace().collect();
//!
//! let finder = HashedLcs::new(&corpus).unwrap();
//! assert_eq!(finder.lcs_length(&query), 2);
//!
//! let runs = finder.greedy_segment(&query);
//! assert_eq!(copyspan::render::to_plain(&query, &runs), "[the cat] ran");
//! ```

pub mod core;
pub mod corpus;
pub mod error;
pub mod fixture;
pub mod hashed;
pub mod index;
pub mod instrumentation;
pub mod markov;
pub mod render;
pub mod scan;
pub mod text;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use crate::core::{LcsConfig, LcsFinder, MatchRun, WordId};
pub use crate::corpus::Corpus;
pub use crate::error::{LcsError, Result};
pub use crate::hashed::HashedLcs;
pub use crate::index::CorpusIndex;
pub use crate::markov::FreqTable;
pub use crate::scan::ScanLcs;
