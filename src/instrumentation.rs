// Lightweight instrumentation for counting hotspots in development.
// Thread-local cells keep the hot path free of locking; reset and snapshot
// helpers let the dev binaries collect simple breakdowns.
use std::cell::Cell;

thread_local! {
    static KGRAMS_INDEXED: Cell<u64> = const { Cell::new(0) };
    static SHORT_GRAMS_INDEXED: Cell<u64> = const { Cell::new(0) };
    static INDEX_BUILD_NS: Cell<u64> = const { Cell::new(0) };
    static LOOKUP_COUNT: Cell<u64> = const { Cell::new(0) };
    static FALLBACK_PROBES: Cell<u64> = const { Cell::new(0) };
    static CANDIDATES_EXAMINED: Cell<u64> = const { Cell::new(0) };
    static WORDS_COMPARED: Cell<u64> = const { Cell::new(0) };
    static EXTENSION_NS: Cell<u64> = const { Cell::new(0) };
    // bucket-size stats for k-gram hits
    static SUM_CANDIDATES: Cell<u64> = const { Cell::new(0) };
    static NUM_BUCKET_HITS: Cell<u64> = const { Cell::new(0) };
    static MAX_CANDIDATES: Cell<u64> = const { Cell::new(0) };
}

/// Snapshot of the main counters, see [`counters_snapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub kgrams_indexed: u64,
    pub short_grams_indexed: u64,
    pub index_build_ns: u64,
    pub lookups: u64,
    pub fallback_probes: u64,
    pub candidates_examined: u64,
    pub words_compared: u64,
    pub extension_ns: u64,
}

pub fn reset_counters() {
    KGRAMS_INDEXED.with(|c| c.set(0));
    SHORT_GRAMS_INDEXED.with(|c| c.set(0));
    INDEX_BUILD_NS.with(|c| c.set(0));
    LOOKUP_COUNT.with(|c| c.set(0));
    FALLBACK_PROBES.with(|c| c.set(0));
    CANDIDATES_EXAMINED.with(|c| c.set(0));
    WORDS_COMPARED.with(|c| c.set(0));
    EXTENSION_NS.with(|c| c.set(0));
    SUM_CANDIDATES.with(|c| c.set(0));
    NUM_BUCKET_HITS.with(|c| c.set(0));
    MAX_CANDIDATES.with(|c| c.set(0));
}

pub fn counters_snapshot() -> Counters {
    Counters {
        kgrams_indexed: KGRAMS_INDEXED.with(|c| c.get()),
        short_grams_indexed: SHORT_GRAMS_INDEXED.with(|c| c.get()),
        index_build_ns: INDEX_BUILD_NS.with(|c| c.get()),
        lookups: LOOKUP_COUNT.with(|c| c.get()),
        fallback_probes: FALLBACK_PROBES.with(|c| c.get()),
        candidates_examined: CANDIDATES_EXAMINED.with(|c| c.get()),
        words_compared: WORDS_COMPARED.with(|c| c.get()),
        extension_ns: EXTENSION_NS.with(|c| c.get()),
    }
}

/// Record the size of a k-gram bucket that a lookup hit.
pub fn add_bucket_hit(n_candidates: usize) {
    let n64 = n_candidates as u64;
    SUM_CANDIDATES.with(|c| c.set(c.get().wrapping_add(n64)));
    NUM_BUCKET_HITS.with(|c| c.set(c.get().wrapping_add(1)));
    MAX_CANDIDATES.with(|c| c.set(std::cmp::max(c.get(), n64)));
}

/// (bucket hits, total candidates across hits, largest bucket seen)
pub fn lookup_stats_snapshot() -> (u64, u64, u64) {
    let num = NUM_BUCKET_HITS.with(|c| c.get());
    let sum = SUM_CANDIDATES.with(|c| c.get());
    let max = MAX_CANDIDATES.with(|c| c.get());
    (num, sum, max)
}

pub fn add_kgrams(n: u64) {
    KGRAMS_INDEXED.with(|c| c.set(c.get().wrapping_add(n)));
}
pub fn add_short_grams(n: u64) {
    SHORT_GRAMS_INDEXED.with(|c| c.set(c.get().wrapping_add(n)));
}
pub fn add_index_build_ns(n: u64) {
    INDEX_BUILD_NS.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_lookup(n: u64) {
    LOOKUP_COUNT.with(|c| c.set(c.get().wrapping_add(n)));
}
pub fn add_fallback_probe(n: u64) {
    FALLBACK_PROBES.with(|c| c.set(c.get().wrapping_add(n)));
}
pub fn add_candidates(n: u64) {
    CANDIDATES_EXAMINED.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_words(n: u64) {
    WORDS_COMPARED.with(|c| c.set(c.get().wrapping_add(n)));
}
pub fn add_extension_ns(n: u64) {
    EXTENSION_NS.with(|c| c.set(c.get().wrapping_add(n)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_every_counter() {
        add_kgrams(3);
        add_lookup(2);
        add_bucket_hit(7);
        reset_counters();
        assert_eq!(counters_snapshot(), Counters::default());
        assert_eq!(lookup_stats_snapshot(), (0, 0, 0));
    }

    #[test]
    fn bucket_hits_track_sum_and_max() {
        reset_counters();
        add_bucket_hit(2);
        add_bucket_hit(5);
        assert_eq!(lookup_stats_snapshot(), (2, 7, 5));
    }
}
