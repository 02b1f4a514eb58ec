use std::time::{Duration, Instant};

use copyspan::fixture::{copied_query, random_words, repetitive_corpus};
use copyspan::{HashedLcs, LcsConfig, LcsError, LcsFinder, MatchRun, ScanLcs};

fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

fn spans(runs: &[MatchRun]) -> Vec<(usize, usize)> {
    runs.iter().map(|r| (r.start, r.len)).collect()
}

fn assert_tiles(runs: &[MatchRun], len: usize) {
    let mut cursor = 0usize;
    for run in runs {
        assert_eq!(run.start, cursor, "runs must be contiguous: {:?}", runs);
        assert!(run.len >= 1, "empty run in {:?}", runs);
        if !run.copied {
            assert_eq!(run.len, 1, "novel runs cover one word: {:?}", runs);
        }
        cursor += run.len;
    }
    assert_eq!(cursor, len, "runs must cover the query exactly");
}

// Generic helpers: accept any concrete implementation of LcsFinder.
fn run_abcd_scenario<F: LcsFinder>(finder: F) {
    let query = words("a b c x");
    assert_eq!(finder.length_of_lcs_from_start(&query, 0).unwrap(), 3);
    assert_eq!(finder.length_of_lcs_from_start(&query, 3).unwrap(), 0);
    assert_eq!(finder.lcs_length(&query), 3);
}

#[test]
fn abcd_scenario() {
    let corpus = words("a b c d a b e");
    run_abcd_scenario(HashedLcs::new(&corpus).unwrap());
    run_abcd_scenario(ScanLcs::new(&corpus).unwrap());
}

fn run_cat_scenario<F: LcsFinder>(finder: F) {
    let query = words("the cat ran");
    assert_eq!(finder.lcs_length(&query), 2);
    let runs = finder.greedy_segment(&query);
    assert_eq!(spans(&runs), vec![(0, 2), (2, 1)]);
    assert!(runs[0].copied);
    assert!(!runs[1].copied);
    assert_eq!(
        finder.greedy_segment_words(&query),
        vec![&["the", "cat"][..], &["ran"][..]]
    );
}

#[test]
fn cat_scenario() {
    let corpus = words("the cat sat on the mat");
    let config = LcsConfig::with_k(2);
    run_cat_scenario(HashedLcs::with_config(&config, &corpus).unwrap());
    run_cat_scenario(ScanLcs::with_config(&config, &corpus).unwrap());
}

fn run_empty_query<F: LcsFinder>(finder: F) {
    let query: Vec<&str> = Vec::new();
    assert!(finder.greedy_segment(&query).is_empty());
    assert_eq!(finder.lcs_length(&query), 0);
    assert!(matches!(
        finder.length_of_lcs_from_start(&query, 0),
        Err(LcsError::StartOutOfRange { start: 0, len: 0 })
    ));
}

#[test]
fn empty_query_has_nothing_to_do() {
    let corpus = words("a b c d");
    run_empty_query(HashedLcs::new(&corpus).unwrap());
    run_empty_query(ScanLcs::new(&corpus).unwrap());
}

fn run_empty_corpus<F: LcsFinder>(finder: F) {
    let query = words("a b c");
    for start in 0..query.len() {
        assert_eq!(finder.length_of_lcs_from_start(&query, start).unwrap(), 0);
    }
    let runs = finder.greedy_segment(&query);
    assert_eq!(spans(&runs), vec![(0, 1), (1, 1), (2, 1)]);
    assert!(runs.iter().all(|r| !r.copied));
}

#[test]
fn empty_corpus_matches_nothing() {
    let corpus: Vec<&str> = Vec::new();
    run_empty_corpus(HashedLcs::new(&corpus).unwrap());
    run_empty_corpus(ScanLcs::new(&corpus).unwrap());
}

fn run_sentence_example<F: LcsFinder>(finder: F) {
    let query = words("heck this is a sentence that is sgetti");
    assert_eq!(finder.lcs_length(&query), 5);
    let runs = finder.greedy_segment(&query);
    assert_eq!(spans(&runs), vec![(0, 1), (1, 5), (6, 1), (7, 1)]);
    assert_eq!(
        copyspan::render::to_plain(&query, &runs),
        "heck [this is a sentence that] [is] sgetti"
    );
}

#[test]
fn sentence_example() {
    let corpus = words("wow this is a sentence that I wrote like wow this is a real thing");
    run_sentence_example(HashedLcs::new(&corpus).unwrap());
    run_sentence_example(ScanLcs::new(&corpus).unwrap());
}

#[test]
fn hashed_agrees_with_scan_on_random_inputs() {
    for seed in 0..20u64 {
        let vocab = 3 + (seed as usize % 10);
        let corpus = random_words(seed, 300, vocab);
        let query = copied_query(seed + 1000, &corpus, 15, 10);
        let scan = ScanLcs::new(&corpus).unwrap();
        for k in 1..=5 {
            let hashed = HashedLcs::with_config(&LcsConfig::with_k(k), &corpus).unwrap();
            for start in 0..query.len() {
                assert_eq!(
                    hashed.length_of_lcs_from_start(&query, start).unwrap(),
                    scan.length_of_lcs_from_start(&query, start).unwrap(),
                    "seed={} k={} start={}",
                    seed,
                    k,
                    start
                );
            }
            assert_eq!(hashed.lcs_length(&query), scan.lcs_length(&query));
            assert_eq!(hashed.greedy_segment(&query), scan.greedy_segment(&query));
        }
    }
}

#[test]
fn corpus_substrings_are_found_in_full() {
    let corpus = random_words(77, 500, 50);
    let finder = HashedLcs::new(&corpus).unwrap();
    for (start, len) in [(0usize, 3usize), (10, 7), (100, 20), (480, 20), (497, 3)] {
        let mut query: Vec<String> = vec!["prefix".to_string()];
        query.extend_from_slice(&corpus[start..start + len]);
        assert!(finder.length_of_lcs_from_start(&query, 1).unwrap() >= len);
    }
}

#[test]
fn lengths_never_run_past_the_query() {
    let corpus = repetitive_corpus(&["a", "b"], 50);
    let finder = HashedLcs::new(&corpus).unwrap();
    let query = words("b a b a b");
    for start in 0..query.len() {
        assert_eq!(
            finder.length_of_lcs_from_start(&query, start).unwrap(),
            query.len() - start
        );
    }
}

#[test]
fn segmentation_tiles_every_query() {
    for seed in 0..10u64 {
        let corpus = random_words(seed, 1_000, 30);
        let finder = HashedLcs::new(&corpus).unwrap();
        let query = copied_query(seed, &corpus, 40, 15);
        assert_tiles(&finder.greedy_segment(&query), query.len());
    }
}

#[test]
fn results_do_not_depend_on_k() {
    let corpus = random_words(5, 2_000, 40);
    let query = copied_query(6, &corpus, 30, 12);
    let reference = HashedLcs::with_config(&LcsConfig::with_k(1), &corpus).unwrap();
    let expected: Vec<usize> = (0..query.len())
        .map(|s| reference.length_of_lcs_from_start(&query, s).unwrap())
        .collect();
    for k in 2..=6 {
        let finder = HashedLcs::with_config(&LcsConfig::with_k(k), &corpus).unwrap();
        let got: Vec<usize> = (0..query.len())
            .map(|s| finder.length_of_lcs_from_start(&query, s).unwrap())
            .collect();
        assert_eq!(got, expected, "k={}", k);
    }
}

#[test]
fn smaller_k_hits_the_table_at_least_as_often() {
    let corpus = random_words(8, 400, 20);
    let mut previous = usize::MAX;
    for k in 1..=6 {
        let finder = HashedLcs::with_config(&LcsConfig::with_k(k), &corpus).unwrap();
        copyspan::instrumentation::reset_counters();
        let query = copied_query(9, &corpus, 20, 10);
        finder.lcs_length(&query);
        let (hits, _, _) = copyspan::instrumentation::lookup_stats_snapshot();
        assert!(hits as usize <= previous, "k={} hits={} previous={}", k, hits, previous);
        previous = hits as usize;
    }
}

#[test]
fn final_window_can_be_left_out() {
    let corpus = words("a b c d a b e");
    let legacy = LcsConfig {
        k: 3,
        index_final_window: false,
    };
    let finder = HashedLcs::with_config(&legacy, &corpus).unwrap();
    // "a b e" and "e" sit in the unindexed tail
    let query = words("a b e");
    assert_eq!(finder.length_of_lcs_from_start(&query, 0).unwrap(), 2);
    assert_eq!(finder.length_of_lcs_from_start(&query, 2).unwrap(), 0);
    assert_eq!(HashedLcs::new(&corpus).unwrap().lcs_length(&query), 3);
}

#[test]
fn invalid_k_is_rejected() {
    let corpus = words("a b c");
    assert!(matches!(
        HashedLcs::with_config(&LcsConfig::with_k(0), &corpus),
        Err(LcsError::InvalidK { k: 0 })
    ));
    assert!(matches!(
        ScanLcs::with_config(&LcsConfig::with_k(0), &corpus),
        Err(LcsError::InvalidK { k: 0 })
    ));
}

#[test]
fn finder_is_shared_across_threads() {
    let corpus = random_words(21, 5_000, 100);
    let finder = HashedLcs::new(&corpus).unwrap();
    let queries: Vec<Vec<String>> = (0..4).map(|s| copied_query(s, &corpus, 30, 12)).collect();
    let expected: Vec<usize> = queries.iter().map(|q| finder.lcs_length(q)).collect();

    let got: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = queries
            .iter()
            .map(|q| {
                let finder = &finder;
                scope.spawn(move || finder.lcs_length(q))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(got, expected);
}

#[test]
fn repetitive_corpus_stays_bounded() {
    // Every k-gram of the corpus lands in one of two huge buckets.
    let corpus = repetitive_corpus(&["la", "di", "da"], 10_000);
    let finder = HashedLcs::new(&corpus).unwrap();
    let query: Vec<String> = repetitive_corpus(&["la", "di", "da"], 50);

    let t0 = Instant::now();
    let runs = finder.greedy_segment(&query);
    assert_eq!(spans(&runs), vec![(0, query.len())]);

    let mut probe = query[..30].to_vec();
    probe.push("tra".to_string());
    assert_eq!(finder.lcs_length(&probe), 30);
    assert!(
        t0.elapsed() < Duration::from_secs(30),
        "repetitive corpus took {:?}",
        t0.elapsed()
    );
}
