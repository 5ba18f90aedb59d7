//! Content-quality scoring, trend ranking and per-key rate limiting for an
//! article automation pipeline.
//!
//! - [`score_content`] grades an article against a target keyword.
//! - [`rank_trend_topics`] perturbs and ranks a topic pool.
//! - [`RateLimiter`] bounds calls per key within a fixed window.

pub mod api;
pub mod config;
pub mod error;
pub mod scorer;
pub mod state;
pub mod trends;
pub mod types;

pub use config::{Config, RateLimitConfig};
pub use error::{AppError, Result};
pub use scorer::{score_content, score_html, strip_html};
pub use state::{RateLimitSweeper, RateLimiter};
pub use trends::{default_pool, rank_trend_topics, RngVariance, VarianceSource, ZeroVariance};
pub use types::{
    overall_score, rate_limit_key, RateLimitDecision, SeoScoreResult, TrendCategory, TrendTopic,
};
