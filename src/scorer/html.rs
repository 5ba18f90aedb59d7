//! Minimal HTML handling for article bodies: tag stripping and heading counts.
//! No parsing beyond what the scorer needs.

use std::sync::LazyLock;

use regex::Regex;

/// Opening `<h1`..`<h3` tag followed by whitespace or `>`.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([123])[\s>]").expect("valid heading pattern"));

/// Any tag span with at least one character between the brackets.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

/// Opening-tag counts for the three heading levels the scorer inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

/// Counts `<h1`, `<h2`, `<h3` opening tags. The tag name is matched
/// case-insensitively and must be followed by whitespace or `>`, so
/// attributes and line breaks inside the tag are fine and `<h10>` or
/// closing tags are not counted.
pub fn count_headings(html: &str) -> HeadingCounts {
    let mut counts = HeadingCounts::default();
    for caps in HEADING_RE.captures_iter(html) {
        match &caps[1] {
            "1" => counts.h1 += 1,
            "2" => counts.h2 += 1,
            _ => counts.h3 += 1,
        }
    }
    counts
}

/// Converts an HTML fragment to plain text: every `<...>` span with at least
/// one character inside becomes a space, whitespace runs collapse to one
/// space, and the result is trimmed. Comments are tag spans too.
pub fn strip_html(html: &str) -> String {
    TAG_RE
        .replace_all(html, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
