// HashedLcs: explanatory notes
//
// The corpus is indexed once into a table from every word k-gram to the list
// of positions where it starts (see `CorpusIndex`). To measure the longest
// match rooted at a query position we:
//
// 1. Look up the k-gram starting at that position. Every hit is a candidate
//    corpus position already known to match `k` words.
//
// 2. Extend each candidate word by word until the corpus or the query runs
//    out, or the words differ, and keep the longest extension. Only the
//    length is reported, so which of several equally long candidates wins
//    does not matter.
//
// 3. If the k-gram is not indexed (including query tails shorter than `k`),
//    the match is shorter than `k`. Probe the short-gram set with prefixes of
//    decreasing length and report the first one that occurs.
//
// Notes and limitations:
// - Cost per lookup is the bucket size times the average extension. A corpus
//   that repeats the same phrase many times produces large buckets and a
//   lookup can approach O(corpus length). This is accepted; there is no
//   candidate cap because a cap would give up exactness.
// - Short prefixes are capped at the remaining query length so the reported
//   length never runs past the end of the query.
use std::time::Instant;

use log::trace;

use crate::core::{LcsConfig, LcsFinder, WordId};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::CorpusIndex;

/// Longest-common-substring finder backed by a k-gram index of the corpus.
#[derive(Debug, Clone)]
pub struct HashedLcs {
    corpus: Corpus,
    index: CorpusIndex,
    pub config: LcsConfig,
}

impl HashedLcs {
    /// Build with the default configuration (trigrams).
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<HashedLcs> {
        HashedLcs::with_config(&LcsConfig::default(), words)
    }

    /// Build using an explicit configuration. The configuration is validated
    /// before the corpus is interned or indexed.
    pub fn with_config<S: AsRef<str>>(config: &LcsConfig, words: &[S]) -> Result<HashedLcs> {
        config.validate()?;
        let corpus = Corpus::new(words)?;
        let index = CorpusIndex::build(corpus.ids(), config)?;
        Ok(HashedLcs {
            corpus,
            index,
            config: config.clone(),
        })
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    // Extend a candidate known to match `initial` words at (ref_start, cursor).
    fn extend_candidate(
        corpus: &[WordId],
        query: &[WordId],
        ref_start: usize,
        cursor: usize,
        initial: usize,
    ) -> usize {
        let mut match_len = initial;
        let ext_t0 = Instant::now();

        while ref_start + match_len < corpus.len()
            && cursor + match_len < query.len()
            && corpus[ref_start + match_len] == query[cursor + match_len]
        {
            match_len += 1;
        }

        crate::instrumentation::add_words((match_len - initial) as u64);
        crate::instrumentation::add_extension_ns(ext_t0.elapsed().as_nanos() as u64);
        match_len
    }

    // Fallback when the k-gram at `cursor` is absent: longest prefix shorter
    // than k that occurs in the corpus, or 0.
    fn short_match_len(&self, query: &[WordId], cursor: usize) -> usize {
        let remaining = query.len().saturating_sub(cursor);
        let longest_probe = self.index.k().saturating_sub(1).min(remaining);
        for len in (1..=longest_probe).rev() {
            crate::instrumentation::add_fallback_probe(1);
            if self.index.contains_short(&query[cursor..cursor + len]) {
                trace!("fallback: {}-word prefix at {} occurs in corpus", len, cursor);
                return len;
            }
        }
        0
    }
}

impl LcsFinder for HashedLcs {
    fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    fn match_len_at(&self, query: &[WordId], start: usize) -> usize {
        let k = self.index.k();
        crate::instrumentation::add_lookup(1);

        if start + k <= query.len() {
            if let Some(cands) = self.index.positions(&query[start..start + k]) {
                crate::instrumentation::add_bucket_hit(cands.len());
                let corpus = self.corpus.ids();
                let mut longest = 0usize;
                for &ref_start in cands {
                    crate::instrumentation::add_candidates(1);
                    let match_len = Self::extend_candidate(corpus, query, ref_start, start, k);
                    longest = longest.max(match_len);
                    if start + longest == query.len() {
                        break;
                    }
                }
                return longest;
            }
        }

        self.short_match_len(query, start)
    }
}
