use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use copyspan::text::{split_words, word_sequence_from_file};
use copyspan::{FreqTable, HashedLcs, LcsConfig, LcsFinder};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Colored `<font>` markdown, one color per run
    Markdown,
    /// Copied runs in square brackets
    Plain,
}

/// Highlight which parts of a text are verbatim copies of a corpus.
#[derive(Debug, Parser)]
#[command(name = "highlight", version)]
struct Args {
    /// Reference corpus (plain text or a Project Gutenberg book)
    #[arg(long)]
    corpus: PathBuf,

    /// Text to segment; omit to generate one from the corpus with a Markov model
    #[arg(long, conflicts_with = "generate")]
    query: Option<PathBuf>,

    /// Number of words to generate when no query file is given
    #[arg(long)]
    generate: Option<usize>,

    /// Order of the Markov model used with --generate
    #[arg(long, default_value_t = 3)]
    order: usize,

    /// Seed for --generate
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// k-gram size of the corpus index
    #[arg(short, long, default_value_t = 3)]
    k: usize,

    #[arg(long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let corpus = word_sequence_from_file(&args.corpus)
        .with_context(|| format!("reading corpus {}", args.corpus.display()))?;
    info!("corpus: {} words", corpus.len());

    let query = match (&args.query, args.generate) {
        (Some(path), _) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading query {}", path.display()))?;
            split_words(&raw)
        }
        (None, Some(len)) => {
            let table = FreqTable::new(args.order, &corpus)?;
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            let Some(start) = table.random_start(&mut rng) else {
                bail!("corpus is too short for an order-{} model", args.order);
            };
            table.predict_paragraph(&start, len, &mut rng)?
        }
        (None, None) => bail!("either --query or --generate is required"),
    };

    let finder = HashedLcs::with_config(&LcsConfig::with_k(args.k), &corpus)?;
    let runs = finder.greedy_segment(&query);
    let copied = runs.iter().filter(|r| r.copied).map(|r| r.len).sum::<usize>();

    let rendered = match args.format {
        Format::Markdown => copyspan::render::to_markdown(&query, &runs),
        Format::Plain => copyspan::render::to_plain(&query, &runs),
    };
    println!("{}", rendered);
    println!();
    println!(
        "longest copied run: {} words; {} runs; {}/{} words copied",
        finder.lcs_length(&query),
        runs.len(),
        copied,
        query.len()
    );
    Ok(())
}
