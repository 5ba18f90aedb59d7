//! Wire types for the line-delimited JSON `serve` mode: one request object
//! per input line, one response object per output line.

use serde::{Deserialize, Serialize};

use crate::types::{SeoScoreResult, TrendTopic};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    Score(ScoreRequest),
    Trends(TrendsRequest),
}

impl Request {
    pub fn op(&self) -> &'static str {
        match self {
            Request::Score(_) => "score",
            Request::Trends(_) => "trends",
        }
    }

    /// Caller identity the rate limiter gates on.
    pub fn key(&self) -> &str {
        match self {
            Request::Score(r) => &r.key,
            Request::Trends(r) => &r.key,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub key: String,
    pub html: String,
    pub keyword: String,
    /// Pre-stripped plain text. Derived from `html` when absent.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendsRequest {
    pub key: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Score(SeoScoreResult),
    Trends(Vec<TrendTopic>),
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Payload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok(remaining: u32, result: Payload) -> Self {
        Self {
            status: 200,
            remaining: Some(remaining),
            result: Some(result),
            error: None,
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            remaining: None,
            result: None,
            error: Some(message.into()),
        }
    }

    pub fn too_many_requests() -> Self {
        Self {
            remaining: Some(0),
            ..Self::error(429, "Too many requests")
        }
    }
}
