//! Rendering a greedy segmentation back into text.

use crate::core::MatchRun;

/// Palette cycled through by [`to_markdown`], one color per run.
pub const MARKDOWN_COLORS: [&str; 7] = [
    "#009292", "#FF6DB6", "#490092", "#006DDB", "#B66DFF", "#920000", "#DB6D00",
];

fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for (i, w) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(w.as_ref());
    }
    out
}

/// Render each run with `replacer(run_index, run, run_words)` and join the
/// pieces with single spaces.
pub fn render_with<S, F>(query: &[S], runs: &[MatchRun], mut replacer: F) -> String
where
    S: AsRef<str>,
    F: FnMut(usize, &MatchRun, &[S]) -> String,
{
    let pieces: Vec<String> = runs
        .iter()
        .enumerate()
        .map(|(i, run)| replacer(i, run, &query[run.range()]))
        .collect();
    join_words(&pieces)
}

/// Copied runs in square brackets, novel words left bare.
pub fn to_plain<S: AsRef<str>>(query: &[S], runs: &[MatchRun]) -> String {
    render_with(query, runs, |_, run, words| {
        if run.copied {
            format!("[{}]", join_words(words))
        } else {
            join_words(words)
        }
    })
}

/// Markdown with every run wrapped in a `<font color=..>` tag, cycling
/// through [`MARKDOWN_COLORS`].
pub fn to_markdown<S: AsRef<str>>(query: &[S], runs: &[MatchRun]) -> String {
    let mut out = String::new();
    for (i, run) in runs.iter().enumerate() {
        let color = MARKDOWN_COLORS[i % MARKDOWN_COLORS.len()];
        out.push_str(&format!(
            "<font color={}>{}</font> ",
            color,
            join_words(&query[run.range()])
        ));
    }
    out
}
