//! Turning raw text into word sequences.
//!
//! Words are whitespace-delimited and keep their punctuation ("word." stays
//! "word."). Line breaks and spacing are discarded.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;

pub const GUTENBERG_START_MARKER: &str = "*** START OF";
pub const GUTENBERG_END_MARKER: &str = "*** END OF";

pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Keep only the body of a Project Gutenberg text: everything after the start
/// marker and before the end marker. Text missing either marker is returned
/// whole.
pub fn strip_gutenberg_boilerplate(text: &str) -> &str {
    match (text.find(GUTENBERG_START_MARKER), text.find(GUTENBERG_END_MARKER)) {
        (Some(start), Some(end)) if start + GUTENBERG_START_MARKER.len() <= end => {
            &text[start + GUTENBERG_START_MARKER.len()..end]
        }
        (Some(_), Some(_)) => "",
        _ => text,
    }
}

/// Read a UTF-8 text file, strip Gutenberg boilerplate and split it into words.
pub fn word_sequence_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let words = split_words(strip_gutenberg_boilerplate(&raw));
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
