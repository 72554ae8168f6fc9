//! Watch-link extraction and deduplication.
//!
//! The input is an arbitrary text blob; anything that looks like a YouTube
//! watch URL is collected in order of appearance, then deduplicated before
//! any download happens.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Matches a YouTube URL: the literal prefix followed by one or more
/// characters other than `"`, `\` and whitespace. Whitespace terminates a
/// match so that links separated by spaces or newlines stay distinct.
fn watch_link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"https://www\.youtube\.com/[^"\\\s]+"#).expect("watch link pattern is valid")
    })
}

/// Extract all YouTube watch links from a text blob, in order of appearance.
///
/// Matches never span whitespace, so a link broken across lines is truncated
/// at the break rather than swallowing the following text. The result may
/// contain duplicates; pass it through [`deduplicate`] before downloading.
pub fn extract_watch_links(text: &str) -> Vec<String> {
    watch_link_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Remove duplicate links, preserving the first occurrence of each.
pub fn deduplicate(links: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
