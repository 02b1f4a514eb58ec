//! Word-level Markov text generator.
//!
//! Counts, for every k-gram in a word sequence, how often each word follows
//! it, then samples new text one word at a time in proportion to those
//! counts. The generated text is what the LCS finders are usually pointed
//! at: a high-order model copies long runs of its source verbatim.

use ahash::AHashMap as HashMap;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use crate::core::WordId;
use crate::corpus::Corpus;
use crate::error::{LcsError, Result};
use crate::index::Gram;

type Followers = SmallVec<[(WordId, u32); 4]>;

/// Frequency table mapping each k-gram to the words observed after it.
#[derive(Debug, Clone)]
pub struct FreqTable {
    k: usize,
    corpus: Corpus,
    table: HashMap<Gram, Followers>,
    // k-grams in first-seen order, so seeded sampling is reproducible
    starts: Vec<Gram>,
}

impl FreqTable {
    pub fn new<S: AsRef<str>>(k: usize, words: &[S]) -> Result<FreqTable> {
        if k == 0 {
            return Err(LcsError::InvalidK { k });
        }
        let corpus = Corpus::new(words)?;
        let ids = corpus.ids();
        let mut table: HashMap<Gram, Followers> = HashMap::new();
        let mut starts = Vec::new();

        for i in 0..ids.len().saturating_sub(k) {
            let kgram = &ids[i..i + k];
            let next = ids[i + k];
            if !table.contains_key(kgram) {
                starts.push(Gram::from_slice(kgram));
            }
            let followers = table.entry(Gram::from_slice(kgram)).or_default();
            match followers.iter_mut().find(|(w, _)| *w == next) {
                Some((_, count)) => *count += 1,
                None => followers.push((next, 1)),
            }
        }

        Ok(FreqTable {
            k,
            corpus,
            table,
            starts,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of distinct k-grams that have at least one follower.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// How often `next` was seen after `kgram`.
    pub fn count<S: AsRef<str>>(&self, kgram: &[S], next: &str) -> u32 {
        let Some(next) = self.corpus.id_of(next) else {
            return 0;
        };
        let kgram = self.corpus.encode(kgram);
        self.table
            .get(kgram.as_slice())
            .and_then(|f| f.iter().find(|(w, _)| *w == next))
            .map_or(0, |(_, c)| *c)
    }

    fn predict_next_id<R: Rng + ?Sized>(&self, kgram: &[WordId], rng: &mut R) -> Option<WordId> {
        let followers = self.table.get(kgram)?;
        let dist = WeightedIndex::new(followers.iter().map(|(_, c)| *c)).ok()?;
        Some(followers[dist.sample(rng)].0)
    }

    /// Sample the word following `kgram`, weighted by observed frequency.
    /// `None` when the k-gram never occurs with a follower.
    pub fn predict_next<S: AsRef<str>, R: Rng + ?Sized>(&self, kgram: &[S], rng: &mut R) -> Option<&str> {
        let kgram = self.corpus.encode(kgram);
        let next = self.predict_next_id(&kgram, rng)?;
        self.corpus.word(next)
    }

    /// Generate up to `gen_length` words beginning with `start`. Generation
    /// stops early when the current k-gram has no recorded follower.
    pub fn predict_paragraph<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        start: &[S],
        gen_length: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        if start.len() != self.k {
            return Err(LcsError::StartKgramLength {
                expected: self.k,
                actual: start.len(),
            });
        }

        let mut paragraph: Vec<String> = start.iter().map(|w| w.as_ref().to_string()).collect();
        let mut current: Gram = Gram::from_vec(self.corpus.encode(start));

        for _ in 0..gen_length.saturating_sub(self.k) {
            let Some(next) = self.predict_next_id(&current, rng) else {
                break;
            };
            let Some(word) = self.corpus.word(next) else {
                break;
            };
            paragraph.push(word.to_string());
            current.remove(0);
            current.push(next);
        }

        Ok(paragraph)
    }

    /// A uniformly chosen k-gram that has at least one follower.
    pub fn random_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<String>> {
        let gram = self.starts.choose(rng)?;
        gram.iter()
            .map(|&id| self.corpus.word(id).map(str::to_string))
            .collect()
    }
}
