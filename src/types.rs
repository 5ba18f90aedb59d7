use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::seo_weights;

// ---------------------------------------------------------------------------
// SEO score
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoScoreResult {
    /// Keyword occurrences per 100 words, rounded to 2 decimals.
    pub keyword_density: f64,
    pub keyword_density_score: u8,
    pub readability_score: u8,
    pub heading_structure_score: u8,
    pub meta_description_score: u8,
    pub content_length_score: u8,
    pub overall_score: u8,
    /// Improvement hints, in check order.
    pub suggestions: Vec<String>,
}

/// Weighted blend of the five sub-scores, rounded to the nearest integer.
pub fn overall_score(
    keyword_density: u8,
    readability: u8,
    heading_structure: u8,
    meta_description: u8,
    content_length: u8,
) -> u8 {
    let blended = f64::from(keyword_density) * seo_weights::KEYWORD_DENSITY
        + f64::from(readability) * seo_weights::READABILITY
        + f64::from(heading_structure) * seo_weights::HEADING_STRUCTURE
        + f64::from(meta_description) * seo_weights::META_DESCRIPTION
        + f64::from(content_length) * seo_weights::CONTENT_LENGTH;
    blended.round().clamp(0.0, 100.0) as u8
}

// ---------------------------------------------------------------------------
// Trend topics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendCategory {
    Technology,
    Business,
    Finance,
    Health,
    Lifestyle,
    Marketing,
    Automotive,
    Education,
    Entertainment,
    Food,
}

impl TrendCategory {
    pub const ALL: [TrendCategory; 10] = [
        TrendCategory::Technology,
        TrendCategory::Business,
        TrendCategory::Finance,
        TrendCategory::Health,
        TrendCategory::Lifestyle,
        TrendCategory::Marketing,
        TrendCategory::Automotive,
        TrendCategory::Education,
        TrendCategory::Entertainment,
        TrendCategory::Food,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendCategory::Technology => "Technology",
            TrendCategory::Business => "Business",
            TrendCategory::Finance => "Finance",
            TrendCategory::Health => "Health",
            TrendCategory::Lifestyle => "Lifestyle",
            TrendCategory::Marketing => "Marketing",
            TrendCategory::Automotive => "Automotive",
            TrendCategory::Education => "Education",
            TrendCategory::Entertainment => "Entertainment",
            TrendCategory::Food => "Food",
        }
    }
}

impl std::fmt::Display for TrendCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrendCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        TrendCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown trend category: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendTopic {
    pub title: String,
    pub keyword: String,
    pub search_volume: u32,
    pub competition_score: u8,
    pub monetization_score: u8,
    /// Derived from the three metrics above; see `TrendTopic::rescore`.
    pub trend_score: u8,
    pub category: TrendCategory,
}

// ---------------------------------------------------------------------------
// Rate limiting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitDecision {
    pub ok: bool,
    pub remaining: u32,
}

impl RateLimitDecision {
    pub fn allowed(remaining: u32) -> Self {
        Self { ok: true, remaining }
    }

    pub fn denied() -> Self {
        Self { ok: false, remaining: 0 }
    }
}

/// Builds the `action:identity` key callers gate on, e.g. `trends:user-42`.
pub fn rate_limit_key(action: &str, identity: &str) -> String {
    format!("{action}:{identity}")
}
