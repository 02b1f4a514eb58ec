use copyspan::fixture::{copied_query, random_words};
use copyspan::{HashedLcs, LcsConfig, LcsFinder};
use std::time::Instant;

fn run_case(k: usize, corpus: &[String], query: &[String]) -> anyhow::Result<()> {
    copyspan::instrumentation::reset_counters();

    let t0 = Instant::now();
    let finder = HashedLcs::with_config(&LcsConfig::with_k(k), corpus)?;
    let build = t0.elapsed();
    let t1 = Instant::now();
    let runs = finder.greedy_segment(query);
    let segment = t1.elapsed();

    let c = copyspan::instrumentation::counters_snapshot();
    let (num, sum, max) = copyspan::instrumentation::lookup_stats_snapshot();
    println!(
        "K={} build_time={:?} segment_time={:?} runs={} kgrams={} short_grams={} lookups={} fallback_probes={} candidates={} words={} mean_bucket={} max_bucket={}",
        k, build, segment, runs.len(), finder.index().kgram_count(), finder.index().short_gram_count(),
        c.lookups, c.fallback_probes, c.candidates_examined, c.words_compared,
        if num > 0 { sum / num } else { 0 }, max
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let corpus = random_words(42, 100_000, 500);
    let query = copied_query(7, &corpus, 2_000, 12);
    for k in [1usize, 2, 3, 4, 6, 8] {
        run_case(k, &corpus, &query)?;
    }
    Ok(())
}
