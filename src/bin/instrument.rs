use std::time::Instant;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use copyspan::fixture::random_words;
use copyspan::{FreqTable, HashedLcs, LcsFinder, ScanLcs};

fn print_counters(name: &str, build: std::time::Duration, query: std::time::Duration, lcs: usize) {
    let c = copyspan::instrumentation::counters_snapshot();
    let (hits, sum, max) = copyspan::instrumentation::lookup_stats_snapshot();
    println!(
        "{}: build_time={:?} query_time={:?} lcs={} kgrams={} short_grams={} index_ns={} lookups={} fallback_probes={} candidates={} words={} ext_ns={} bucket_hits={} mean_bucket={} max_bucket={}",
        name, build, query, lcs, c.kgrams_indexed, c.short_grams_indexed, c.index_build_ns, c.lookups,
        c.fallback_probes, c.candidates_examined, c.words_compared, c.extension_ns, hits,
        if hits > 0 { sum / hits } else { 0 }, max
    );
}

fn run_case<F: LcsFinder>(
    name: &str,
    build: impl FnOnce() -> copyspan::Result<F>,
    query: &[String],
) -> anyhow::Result<()> {
    copyspan::instrumentation::reset_counters();
    let t0 = Instant::now();
    let finder = build()?;
    let dur_build = t0.elapsed();
    let t1 = Instant::now();
    let lcs = finder.lcs_length(query);
    let runs = finder.greedy_segment(query);
    let dur_query = t1.elapsed();
    print_counters(name, dur_build, dur_query, lcs);
    println!("{}: {} runs over {} words", name, runs.len(), query.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let corpus = random_words(42, 20_000, 2_000);
    let table = FreqTable::new(3, &corpus)?;
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let start = table
        .random_start(&mut rng)
        .ok_or_else(|| anyhow::anyhow!("corpus too short for a 3-gram model"))?;
    let query = table.predict_paragraph(&start, 300, &mut rng)?;

    run_case("HashedLcs", || HashedLcs::new(&corpus), &query)?;
    run_case("ScanLcs", || ScanLcs::new(&corpus), &query)?;
    Ok(())
}
