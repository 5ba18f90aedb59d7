use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::api::requests::{Payload, Request, Response, ScoreRequest, TrendsRequest};
use crate::config::DEFAULT_TOP_N;
use crate::error::{AppError, Result};
use crate::scorer::{score_content, strip_html};
use crate::state::RateLimiter;
use crate::trends::{rank_trend_topics, VarianceSource};
use crate::types::{rate_limit_key, TrendTopic};

/// Routes decoded requests to the scorer or the ranker, gating every call on
/// the shared rate limiter under `"{op}:{key}"`.
pub struct Dispatcher<V> {
    limiter: Arc<RateLimiter>,
    pool: Vec<TrendTopic>,
    variance: V,
}

impl<V: VarianceSource> Dispatcher<V> {
    pub fn new(limiter: Arc<RateLimiter>, pool: Vec<TrendTopic>, variance: V) -> Self {
        Self { limiter, pool, variance }
    }

    /// Decodes and handles one input line. Never fails: decode errors become
    /// a 400 response.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match decode(line) {
            Ok(req) => self.handle(req),
            Err(e) => {
                warn!("Rejected request line: {e}");
                Response::error(e.status(), e.to_string())
            }
        }
    }

    pub fn handle(&mut self, req: Request) -> Response {
        let decision = self.limiter.check(&rate_limit_key(req.op(), req.key()));
        if !decision.ok {
            return Response::too_many_requests();
        }

        let payload = match req {
            Request::Score(r) => Payload::Score(score(&r)),
            Request::Trends(r) => Payload::Trends(self.trends(&r)),
        };
        Response::ok(decision.remaining, payload)
    }

    fn trends(&mut self, r: &TrendsRequest) -> Vec<TrendTopic> {
        let top = r.top.unwrap_or(DEFAULT_TOP_N);
        rank_trend_topics(&self.pool, r.category.as_deref(), top, &mut self.variance)
    }

    /// Reads requests line by line until EOF, writing one response per
    /// non-blank line.
    pub async fn serve<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut handled = 0u64;

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line);
            debug!(status = response.status, "Handled request");

            let mut out = serde_json::to_vec(&response)?;
            out.push(b'\n');
            writer.write_all(&out).await?;
            writer.flush().await?;
            handled += 1;
        }

        info!(handled, "Input closed");
        Ok(())
    }
}

fn decode(line: &str) -> Result<Request> {
    let req: Request = serde_json::from_str(line)?;
    if req.key().trim().is_empty() {
        return Err(AppError::Request("key must not be empty".to_string()));
    }
    Ok(req)
}

fn score(r: &ScoreRequest) -> crate::types::SeoScoreResult {
    let plain = match &r.content {
        Some(content) => content.clone(),
        None => strip_html(&r.html),
    };
    score_content(&plain, &r.html, &r.keyword, r.meta_description.as_deref())
}
