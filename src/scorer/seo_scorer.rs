use tracing::debug;

use crate::config::{density_bands, length_bands, meta_bands};
use crate::scorer::html::{count_headings, strip_html};
use crate::types::{overall_score, SeoScoreResult};

/// Scores an article against a target keyword.
///
/// `content` is the plain text, `html_content` the same article with its
/// heading tags intact (used only for structure). Deterministic, never fails:
/// empty content scores as zero words.
pub fn score_content(
    content: &str,
    html_content: &str,
    keyword: &str,
    meta_description: Option<&str>,
) -> SeoScoreResult {
    let mut suggestions = Vec::new();
    let word_count = count_words(content);

    let density = keyword_density(content, keyword, word_count);
    let keyword_density_score = score_keyword_density(density, &mut suggestions);
    let readability_score = score_readability(content, word_count, &mut suggestions);
    let heading_structure_score = score_headings(html_content, &mut suggestions);
    let meta_description_score = score_meta_description(meta_description, keyword, &mut suggestions);
    let content_length_score = score_content_length(word_count, &mut suggestions);

    let overall = overall_score(
        keyword_density_score,
        readability_score,
        heading_structure_score,
        meta_description_score,
        content_length_score,
    );

    debug!(
        keyword,
        word_count,
        density,
        overall,
        suggestions = suggestions.len(),
        "Scored article"
    );

    SeoScoreResult {
        keyword_density: (density * 100.0).round() / 100.0,
        keyword_density_score,
        readability_score,
        heading_structure_score,
        meta_description_score,
        content_length_score,
        overall_score: overall,
        suggestions,
    }
}

/// Scores an HTML article, deriving its plain text with [`strip_html`].
pub fn score_html(html_content: &str, keyword: &str, meta_description: Option<&str>) -> SeoScoreResult {
    let plain = strip_html(html_content);
    score_content(&plain, html_content, keyword, meta_description)
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-overlapping, case-insensitive, literal occurrences. An empty keyword
/// never matches.
fn count_occurrences(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(&keyword.to_lowercase()).count()
}

/// Case-insensitive containment. Every text contains the empty keyword.
fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

fn keyword_density(content: &str, keyword: &str, word_count: usize) -> f64 {
    count_occurrences(content, keyword) as f64 / word_count.max(1) as f64 * 100.0
}

fn within(value: f64, (lo, hi): (f64, f64)) -> bool {
    value >= lo && value <= hi
}

fn within_len(value: usize, (lo, hi): (usize, usize)) -> bool {
    value >= lo && value <= hi
}

fn score_keyword_density(density: f64, suggestions: &mut Vec<String>) -> u8 {
    if within(density, density_bands::IDEAL) {
        100
    } else if within(density, density_bands::GOOD) {
        75
    } else if within(density, density_bands::FAIR) {
        50
    } else {
        let direction = if density < density_bands::FAIR.0 { "Increase" } else { "Reduce" };
        // Round half up before formatting; `{:.1}` alone rounds ties to even.
        let shown = (density * 10.0).round() / 10.0;
        suggestions.push(format!(
            "{direction} keyword density from {shown:.1}% to 1.0-1.5%"
        ));
        25
    }
}

fn score_readability(content: &str, word_count: usize, suggestions: &mut Vec<String>) -> u8 {
    // Whitespace-only fragments between terminators still count as sentences.
    let sentences = content
        .split(['.', '!', '?'])
        .filter(|s| !s.is_empty())
        .count();
    let avg_words = word_count as f64 / sentences.max(1) as f64;

    let score = if avg_words <= 15.0 {
        100
    } else if avg_words <= 20.0 {
        85
    } else if avg_words <= 25.0 {
        70
    } else if avg_words <= 30.0 {
        55
    } else {
        40
    };

    if score < 70 {
        suggestions.push("Use shorter sentences to improve readability".to_string());
    }
    score
}

fn score_headings(html_content: &str, suggestions: &mut Vec<String>) -> u8 {
    let headings = count_headings(html_content);
    let mut score = 0;

    if headings.h1 == 1 {
        score += 30;
    } else {
        suggestions.push("Article should have exactly one H1 tag".to_string());
    }

    if headings.h2 >= 5 {
        score += 50;
    } else if headings.h2 >= 3 {
        score += 35;
    } else {
        suggestions.push("Add more H2 subheadings (recommended: 5+)".to_string());
    }

    score += if headings.h3 >= 2 { 20 } else { 10 };
    score
}

fn score_meta_description(
    meta_description: Option<&str>,
    keyword: &str,
    suggestions: &mut Vec<String>,
) -> u8 {
    let Some(meta) = meta_description.filter(|m| !m.is_empty()) else {
        suggestions.push("Add a meta description".to_string());
        return 0;
    };

    let len = meta.chars().count();
    let mut score = if within_len(len, meta_bands::IDEAL) {
        100
    } else if within_len(len, meta_bands::ACCEPTABLE) {
        70
    } else {
        suggestions.push("Meta description should be 120-160 characters".to_string());
        40
    };

    // Lowest band is 40, so the penalty can't underflow.
    if !contains_keyword(meta, keyword) {
        score -= meta_bands::MISSING_KEYWORD_PENALTY;
        suggestions.push("Include the primary keyword in the meta description".to_string());
    }
    score
}

fn score_content_length(word_count: usize, suggestions: &mut Vec<String>) -> u8 {
    if within_len(word_count, length_bands::IDEAL) {
        100
    } else if within_len(word_count, length_bands::ACCEPTABLE) {
        70
    } else {
        suggestions.push(format!(
            "Content is {word_count} words. Target: 1200-1800 words"
        ));
        40
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `total` words where `hits` of them are `keyword`, split into sentences
    /// of `per_sentence` words.
    fn article(keyword: &str, hits: usize, total: usize, per_sentence: usize) -> String {
        let mut words: Vec<&str> = Vec::with_capacity(total);
        let stride = total / hits.max(1);
        for i in 0..total {
            if hits > 0 && i % stride == 0 && words.iter().filter(|w| **w == keyword).count() < hits {
                words.push(keyword);
            } else {
                words.push("word");
            }
        }
        words
            .chunks(per_sentence)
            .map(|c| c.join(" "))
            .collect::<Vec<_>>()
            .join(". ")
            + "."
    }

    fn html(h1: usize, h2: usize, h3: usize) -> String {
        let mut s = String::new();
        for _ in 0..h1 {
            s.push_str("<h1>Title</h1>\n");
        }
        for _ in 0..h2 {
            s.push_str("<h2>Section</h2>\n<p>text</p>\n");
        }
        for _ in 0..h3 {
            s.push_str("<h3>Sub</h3>\n");
        }
        s
    }

    fn meta_with(keyword: &str, len: usize) -> String {
        let mut m = keyword.to_string();
        while m.len() < len {
            m.push('x');
        }
        m
    }

    #[test]
    fn empty_content_scores_low_density() {
        let r = score_content("", "", "rust", None);
        assert_eq!(r.keyword_density, 0.0);
        assert_eq!(r.keyword_density_score, 25);
        assert!(r.suggestions[0].starts_with("Increase keyword density from 0.0%"));
        assert_eq!(r.readability_score, 100);
        assert_eq!(r.content_length_score, 40);
        assert!(r.suggestions.iter().any(|s| s == "Content is 0 words. Target: 1200-1800 words"));
    }

    #[test]
    fn keyword_with_metacharacters_matches_literally() {
        let text = article("C++", 3, 300, 10);
        let r = score_content(&text, "", "C++", None);
        assert_eq!(r.keyword_density, 1.0);
        assert_eq!(r.keyword_density_score, 100);
        assert!(!r.suggestions.iter().any(|s| s.contains("keyword density")));
    }

    #[test]
    fn dot_in_keyword_is_not_a_wildcard() {
        // "a.b" must not match "axb".
        let r = score_content("axb axb axb a.b", "", "a.b", None);
        assert_eq!(r.keyword_density, 25.0);
        let r = score_content("axb axb axb", "", "a.b", None);
        assert_eq!(r.keyword_density, 0.0);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let r = score_content("Rust rust RUST word", "", "rUsT", None);
        assert_eq!(r.keyword_density, 75.0);
    }

    #[test]
    fn empty_keyword_has_no_occurrences_but_no_meta_penalty() {
        let r = score_content("some words here", "", "", Some(&"x".repeat(140)));
        assert_eq!(r.keyword_density, 0.0);
        assert_eq!(r.meta_description_score, 100);
        assert!(!r.suggestions.iter().any(|s| s.contains("meta description")));
    }

    #[test]
    fn density_hint_rounds_ties_up() {
        // 1 in 400 words = 0.25%
        let text = article("seo", 1, 400, 10);
        let r = score_content(&text, "", "seo", None);
        assert_eq!(r.keyword_density_score, 25);
        assert_eq!(r.suggestions[0], "Increase keyword density from 0.3% to 1.0-1.5%");
    }

    #[test]
    fn density_bands() {
        // 200 words throughout.
        let cases = [(2, 100), (3, 100), (4, 75), (1, 50), (5, 50), (6, 25), (0, 25)];
        for (hits, expected) in cases {
            let text = article("seo", hits, 200, 10);
            let r = score_content(&text, "", "seo", None);
            assert_eq!(r.keyword_density_score, expected, "hits={hits}");
        }
    }

    #[test]
    fn high_density_suggests_reduction() {
        let text = article("seo", 10, 200, 10);
        let r = score_content(&text, "", "seo", None);
        assert_eq!(r.keyword_density_score, 25);
        assert_eq!(r.suggestions[0], "Reduce keyword density from 5.0% to 1.0-1.5%");
    }

    #[test]
    fn density_is_reported_to_two_decimals() {
        // 1 in 300 words = 0.333..%
        let text = article("seo", 1, 300, 10);
        let r = score_content(&text, "", "seo", None);
        assert_eq!(r.keyword_density, 0.33);
    }

    #[test]
    fn readability_bands() {
        let cases = [(15, 100), (20, 85), (25, 70), (30, 55), (31, 40)];
        for (per_sentence, expected) in cases {
            let text = article("seo", 0, per_sentence * 10, per_sentence);
            let r = score_content(&text, "", "seo", None);
            assert_eq!(r.readability_score, expected, "per_sentence={per_sentence}");
            let hint = r.suggestions.iter().any(|s| s.contains("shorter sentences"));
            assert_eq!(hint, expected < 70);
        }
    }

    #[test]
    fn perfect_heading_structure() {
        let r = score_content("", &html(1, 6, 3), "seo", None);
        assert_eq!(r.heading_structure_score, 100);
        assert!(!r.suggestions.iter().any(|s| s.contains("H1") || s.contains("H2")));
    }

    #[test]
    fn weak_heading_structure() {
        let r = score_content("", &html(0, 2, 0), "seo", None);
        assert_eq!(r.heading_structure_score, 10);
        assert!(r.suggestions.iter().any(|s| s == "Article should have exactly one H1 tag"));
        assert!(r.suggestions.iter().any(|s| s == "Add more H2 subheadings (recommended: 5+)"));
    }

    #[test]
    fn heading_middle_band_and_duplicate_h1() {
        let r = score_content("", &html(2, 3, 1), "seo", None);
        assert_eq!(r.heading_structure_score, 45);
        assert!(r.suggestions.iter().any(|s| s.contains("exactly one H1")));
        assert!(!r.suggestions.iter().any(|s| s.contains("H2")));
    }

    #[test]
    fn headings_across_lines_with_attributes() {
        let markup = "<h1\n class=\"hero\">T</h1><H2 id=a>1</H2><h2\tid=b>2</h2><h2>3</h2>\
                      <h2>4</h2><h2 data-x='y'>5</h2><h3 class=\"s\">a</h3><h3>b</h3>";
        let r = score_content("", markup, "seo", None);
        assert_eq!(r.heading_structure_score, 100);
    }

    #[test]
    fn missing_meta_description() {
        let r = score_content("", "", "seo", None);
        assert_eq!(r.meta_description_score, 0);
        assert!(r.suggestions.iter().any(|s| s == "Add a meta description"));

        let r = score_content("", "", "seo", Some(""));
        assert_eq!(r.meta_description_score, 0);
    }

    #[test]
    fn meta_description_length_boundaries() {
        let cases = [
            (79, 40),
            (80, 70),
            (119, 70),
            (120, 100),
            (160, 100),
            (161, 70),
            (200, 70),
            (201, 40),
        ];
        for (len, expected) in cases {
            let meta = meta_with("seo", len);
            let r = score_content("", "", "seo", Some(&meta));
            assert_eq!(r.meta_description_score, expected, "len={len}");
        }
    }

    #[test]
    fn meta_length_counts_characters_not_bytes() {
        let meta = format!("seo {}", "é".repeat(136));
        assert_eq!(meta.chars().count(), 140);
        let r = score_content("", "", "seo", Some(&meta));
        assert_eq!(r.meta_description_score, 100);
    }

    #[test]
    fn meta_without_keyword_is_penalised() {
        let r = score_content("", "", "seo", Some(&"x".repeat(140)));
        assert_eq!(r.meta_description_score, 80);
        assert!(r
            .suggestions
            .iter()
            .any(|s| s == "Include the primary keyword in the meta description"));

        let r = score_content("", "", "seo", Some("short"));
        assert_eq!(r.meta_description_score, 20);
    }

    #[test]
    fn content_length_bands() {
        let cases = [(799, 40), (800, 70), (1199, 70), (1200, 100), (1800, 100), (2500, 70), (2501, 40)];
        for (words, expected) in cases {
            let text = "word ".repeat(words);
            let r = score_content(&text, "", "seo", None);
            assert_eq!(r.content_length_score, expected, "words={words}");
        }
    }

    #[test]
    fn suggestions_follow_check_order() {
        let text = "word ".repeat(100);
        let r = score_content(&text, "", "seo", Some("short"));
        let order: Vec<&str> = r.suggestions.iter().map(String::as_str).collect();
        assert_eq!(
            order,
            vec![
                "Increase keyword density from 0.0% to 1.0-1.5%",
                "Use shorter sentences to improve readability",
                "Article should have exactly one H1 tag",
                "Add more H2 subheadings (recommended: 5+)",
                "Meta description should be 120-160 characters",
                "Include the primary keyword in the meta description",
                "Content is 100 words. Target: 1200-1800 words",
            ]
        );
    }

    #[test]
    fn well_formed_article_scores_high() {
        let body = article("rust", 18, 1500, 12);
        let markup = format!("{}<p>{body}</p>", html(1, 6, 3));
        let meta = meta_with("Learn rust ", 140);
        let r = score_content(&body, &markup, "rust", Some(&meta));
        assert_eq!(r.keyword_density_score, 100);
        assert_eq!(r.readability_score, 100);
        assert_eq!(r.heading_structure_score, 100);
        assert_eq!(r.meta_description_score, 100);
        assert_eq!(r.content_length_score, 100);
        assert_eq!(r.overall_score, 100);
        assert!(r.suggestions.is_empty());
    }

    #[test]
    fn overall_is_recomputed_from_sub_scores() {
        let r = score_content("", "", "seo", None);
        assert_eq!(
            r.overall_score,
            overall_score(
                r.keyword_density_score,
                r.readability_score,
                r.heading_structure_score,
                r.meta_description_score,
                r.content_length_score,
            )
        );
        // 25*0.25 + 100*0.2 + 10*0.25 + 0 + 40*0.15 = 34.75
        assert_eq!(r.overall_score, 35);
    }

    #[test]
    fn score_html_derives_plain_text() {
        let markup = "<h1>Rust</h1><p>Rust is fast.</p><!-- [CTA_SECTION] -->";
        let r = score_html(markup, "rust", None);
        assert_eq!(r.heading_structure_score, 40);
        // "Rust Rust is fast." -> 2 of 4 words
        assert_eq!(r.keyword_density, 50.0);
    }
}
