use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::state::rate_limiter::RateLimiter;

/// Background task that evicts expired rate-limit windows so the table only
/// holds keys seen within the last window.
pub struct RateLimitSweeper {
    limiter: Arc<RateLimiter>,
    every: Duration,
}

impl RateLimitSweeper {
    pub fn new(limiter: Arc<RateLimiter>, every: Duration) -> Self {
        Self { limiter, every }
    }

    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.every);
        interval.tick().await; // consume immediate first tick

        info!(every_ms = self.every.as_millis() as u64, "Rate limit sweeper started");
        loop {
            interval.tick().await;
            let removed = self.limiter.sweep_expired();
            if removed > 0 {
                debug!(removed, remaining = self.limiter.len(), "Swept expired rate limit entries");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateLimitConfig;

    #[tokio::test]
    async fn sweeper_evicts_expired_entries() {
        let limiter = RateLimiter::new(RateLimitConfig::new(5, 20).unwrap());
        limiter.check("a");
        limiter.check("b");
        assert_eq!(limiter.len(), 2);

        let handle = limiter.spawn_sweeper();
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(limiter.is_empty());

        handle.abort();
    }

    #[tokio::test]
    async fn sweeper_keeps_live_entries() {
        let limiter = RateLimiter::new(RateLimitConfig::new(5, 60_000).unwrap());
        limiter.check("a");

        let sweeper = RateLimitSweeper::new(Arc::clone(&limiter), Duration::from_millis(10));
        let handle = tokio::spawn(async move { sweeper.run().await });
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(limiter.len(), 1);

        handle.abort();
    }
}
