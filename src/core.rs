use std::ops::Range;

use crate::corpus::Corpus;
use crate::error::{LcsError, Result};

/// Interned identifier of a corpus word.
///
/// Ids are dense and assigned in first-seen order. `WordId::UNKNOWN` marks
/// query words that never occur in the corpus and therefore never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub(crate) u32);

impl WordId {
    pub const UNKNOWN: WordId = WordId(u32::MAX);

    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

/// One run of a greedy segmentation: `len` query words starting at `start`.
///
/// `copied` is true when the run was found verbatim in the corpus. An
/// uncopied run always covers exactly one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRun {
    pub start: usize,
    pub len: usize,
    pub copied: bool,
}

impl MatchRun {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Configuration shared by the `LcsFinder` implementations.
#[derive(Debug, Clone)]
pub struct LcsConfig {
    /// Number of words per indexed k-gram. Matches shorter than `k` are
    /// answered by the short-gram fallback.
    pub k: usize,
    /// When false the final k-gram window of the corpus (and the short grams
    /// rooted after the last indexed start) are left out of the index.
    pub index_final_window: bool,
}

impl Default for LcsConfig {
    fn default() -> Self {
        LcsConfig {
            k: 3,
            index_final_window: true,
        }
    }
}

impl LcsConfig {
    pub fn with_k(k: usize) -> Self {
        LcsConfig {
            k,
            ..LcsConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(LcsError::InvalidK { k: self.k });
        }
        Ok(())
    }
}

/// Trait describing a word-level longest-common-substring search against a
/// fixed corpus.
pub trait LcsFinder {
    /// The interned corpus this finder searches.
    fn corpus(&self) -> &Corpus;

    /// Length of the longest corpus substring equal to a prefix of
    /// `query[start..]`. `start` must not exceed `query.len()`.
    fn match_len_at(&self, query: &[WordId], start: usize) -> usize;

    /// Length in words of the longest run starting at `query[start]` that also
    /// appears verbatim in the corpus.
    fn length_of_lcs_from_start<S: AsRef<str>>(&self, query: &[S], start: usize) -> Result<usize>
    where
        Self: Sized,
    {
        if start >= query.len() {
            return Err(LcsError::StartOutOfRange {
                start,
                len: query.len(),
            });
        }
        // Matching only looks forward, so the suffix is all we need to encode.
        let encoded = self.corpus().encode(&query[start..]);
        Ok(self.match_len_at(&encoded, 0))
    }

    /// Longest common substring length (in words) between `query` and the corpus.
    fn lcs_length<S: AsRef<str>>(&self, query: &[S]) -> usize
    where
        Self: Sized,
    {
        let encoded = self.corpus().encode(query);
        (0..encoded.len())
            .map(|i| self.match_len_at(&encoded, i))
            .max()
            .unwrap_or(0)
    }

    /// Greedy leftmost-longest decomposition of `query` into runs that tile it
    /// exactly.
    fn greedy_segment<S: AsRef<str>>(&self, query: &[S]) -> Vec<MatchRun>
    where
        Self: Sized,
    {
        let encoded = self.corpus().encode(query);
        self.segment_encoded(&encoded)
    }

    /// `greedy_segment` over an already encoded query.
    fn segment_encoded(&self, query: &[WordId]) -> Vec<MatchRun> {
        let mut runs = Vec::new();
        let mut cursor = 0usize;
        while cursor < query.len() {
            let matched = self.match_len_at(query, cursor);
            // A floor of one word keeps the cursor moving past novel words.
            let len = matched.max(1);
            runs.push(MatchRun {
                start: cursor,
                len,
                copied: matched > 0,
            });
            cursor += len;
        }
        runs
    }

    /// Convenience returning the query words covered by each greedy run.
    fn greedy_segment_words<'q, S: AsRef<str>>(&self, query: &'q [S]) -> Vec<&'q [S]>
    where
        Self: Sized,
    {
        self.greedy_segment(query)
            .into_iter()
            .map(|run| &query[run.range()])
            .collect()
    }
}
