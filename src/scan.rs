use crate::core::{LcsConfig, LcsFinder, WordId};
use crate::corpus::Corpus;
use crate::error::Result;

/// Implementation that scans every corpus position for each query position.
///
/// O(corpus × match length) per lookup with no index. Useful for small
/// corpora and as the reference the hashed finder is checked against.
#[derive(Debug, Clone)]
pub struct ScanLcs {
    corpus: Corpus,
    pub config: LcsConfig,
}

impl ScanLcs {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<ScanLcs> {
        ScanLcs::with_config(&LcsConfig::default(), words)
    }

    /// Build using an explicit configuration. `k` is validated for parity
    /// with `HashedLcs` but plays no part in matching.
    pub fn with_config<S: AsRef<str>>(config: &LcsConfig, words: &[S]) -> Result<ScanLcs> {
        config.validate()?;
        Ok(ScanLcs {
            corpus: Corpus::new(words)?,
            config: config.clone(),
        })
    }
}

impl LcsFinder for ScanLcs {
    fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    fn match_len_at(&self, query: &[WordId], start: usize) -> usize {
        let corpus = self.corpus.ids();
        let remaining = query.len().saturating_sub(start);
        let mut longest = 0usize;

        for ref_start in 0..corpus.len() {
            // Extend the match as far as possible
            let mut match_len = 0;
            while ref_start + match_len < corpus.len()
                && match_len < remaining
                && corpus[ref_start + match_len] == query[start + match_len]
            {
                match_len += 1;
            }
            crate::instrumentation::add_words(match_len as u64);

            if match_len > longest {
                longest = match_len;
                if longest == remaining {
                    break;
                }
            }
        }

        longest
    }
}
