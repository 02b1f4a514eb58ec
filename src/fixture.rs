//! Seeded synthetic corpora and queries for tests, benches and the dev binaries.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` words drawn uniformly from a vocabulary of `vocab_size` words
/// (`w0`, `w1`, ...). Small vocabularies give many short coincidental matches.
pub fn random_words(seed: u64, len: usize, vocab_size: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let vocab_size = vocab_size.max(1);
    (0..len)
        .map(|_| format!("w{}", rng.gen_range(0..vocab_size)))
        .collect()
}

/// `phrase` repeated `reps` times: the worst case for k-gram bucket sizes.
pub fn repetitive_corpus(phrase: &[&str], reps: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(phrase.len() * reps);
    for _ in 0..reps {
        out.extend(phrase.iter().map(|w| w.to_string()));
    }
    out
}

/// A query of `pieces` parts, each either a verbatim snippet of `corpus`
/// (up to `max_copy` words) or a novel word that never occurs in it.
pub fn copied_query(seed: u64, corpus: &[String], pieces: usize, max_copy: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut query = Vec::new();
    for piece in 0..pieces {
        if corpus.is_empty() || rng.gen_bool(0.3) {
            query.push(format!("novel{piece}"));
            continue;
        }
        let len = rng.gen_range(1..=max_copy.max(1)).min(corpus.len());
        let start = rng.gen_range(0..=corpus.len() - len);
        query.extend_from_slice(&corpus[start..start + len]);
    }
    query
}
