// CorpusIndex: k-gram position table plus short-gram membership set.
//
// Keys are the interned word ids themselves (a `SmallVec` of `WordId`s),
// hashed structurally, so lookups borrow a slice of the encoded query and
// never build joined strings. Positions for a key are pushed while scanning
// the corpus left to right and are therefore ascending.
//
// The short-gram set holds every contiguous run of 1..k-1 words. It only
// answers "does this run occur anywhere", which is all the fallback needs
// when the k-gram rooted at a query position is absent from the table.
//
// With `index_final_window` disabled the scan stops one window early
// (starts 0..len-k, exclusive), matching the classic formulation of this
// heuristic. Matches that touch the last corpus words are then reported
// shorter than they are.
use std::time::Instant;

use ahash::AHashMap as HashMap;
use ahash::AHashSet as HashSet;
use log::{debug, warn};
use smallvec::SmallVec;

use crate::core::{LcsConfig, WordId};
use crate::error::Result;

pub(crate) type Gram = SmallVec<[WordId; 4]>;
type Bucket = SmallVec<[usize; 4]>;

/// Immutable k-gram index over an encoded corpus.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    k: usize,
    kgram_positions: HashMap<Gram, Bucket>,
    short_gram_set: HashSet<Gram>,
}

impl CorpusIndex {
    /// Build the index. Fails before doing any work when `config.k` is zero.
    pub fn build(ids: &[WordId], config: &LcsConfig) -> Result<CorpusIndex> {
        config.validate()?;
        let k = config.k;
        let n = ids.len();
        let t0 = Instant::now();

        let kgram_starts = if config.index_final_window {
            (n + 1).saturating_sub(k)
        } else {
            n.saturating_sub(k)
        };
        if kgram_starts == 0 {
            warn!("corpus of {} words is too short to index any {}-gram", n, k);
        }

        let mut kgram_positions: HashMap<Gram, Bucket> =
            HashMap::with_capacity((kgram_starts / 2).max(16));
        for start in 0..kgram_starts {
            kgram_positions
                .entry(Gram::from_slice(&ids[start..start + k]))
                .or_default()
                .push(start);
        }
        crate::instrumentation::add_kgrams(kgram_starts as u64);

        // Short grams are rooted at every word when the final window is
        // indexed, and only at indexed k-gram starts otherwise.
        let short_roots = if config.index_final_window { n } else { kgram_starts };
        let mut short_gram_set: HashSet<Gram> = HashSet::with_capacity(short_roots.max(16));
        for start in 0..short_roots {
            for len in 1..k {
                if start + len > n {
                    break;
                }
                let gram = &ids[start..start + len];
                if !short_gram_set.contains(gram) {
                    short_gram_set.insert(Gram::from_slice(gram));
                }
            }
        }
        crate::instrumentation::add_short_grams(short_gram_set.len() as u64);

        let dur = t0.elapsed().as_nanos() as u64;
        crate::instrumentation::add_index_build_ns(dur);
        debug!(
            "indexed {} words with k={}: {} distinct k-grams, {} short grams in {}ns",
            n,
            k,
            kgram_positions.len(),
            short_gram_set.len(),
            dur
        );

        Ok(CorpusIndex {
            k,
            kgram_positions,
            short_gram_set,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Ascending corpus positions of `kgram`, if it was indexed.
    pub fn positions(&self, kgram: &[WordId]) -> Option<&[usize]> {
        self.kgram_positions.get(kgram).map(|b| b.as_slice())
    }

    /// Whether a run of fewer than `k` words occurs in the corpus.
    pub fn contains_short(&self, gram: &[WordId]) -> bool {
        self.short_gram_set.contains(gram)
    }

    /// Number of distinct indexed k-grams.
    pub fn kgram_count(&self) -> usize {
        self.kgram_positions.len()
    }

    pub fn short_gram_count(&self) -> usize {
        self.short_gram_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kgram_positions.is_empty() && self.short_gram_set.is_empty()
    }
}
