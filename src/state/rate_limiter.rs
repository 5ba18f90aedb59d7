use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::config::RateLimitConfig;
use crate::state::sweeper::RateLimitSweeper;
use crate::types::RateLimitDecision;

// ---------------------------------------------------------------------------
// RateLimitEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    pub count: u32,
    pub window_reset_at: Instant,
}

impl RateLimitEntry {
    fn fresh(now: Instant, window: Duration) -> Self {
        Self { count: 1, window_reset_at: now + window }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now > self.window_reset_at
    }
}

// ---------------------------------------------------------------------------
// RateLimiter
// ---------------------------------------------------------------------------

/// Fixed-window request counter per opaque key.
///
/// Each check runs under the shard lock of its key, so concurrent callers on
/// one key can never push its count past `max_requests`. Keys never affect
/// each other.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    /// key → current window
    entries: DashMap<String, RateLimitEntry>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Arc<Self> {
        Arc::new(Self::with_config(config))
    }

    pub fn with_config(config: RateLimitConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    pub fn check(&self, key: &str) -> RateLimitDecision {
        self.check_at(key, Instant::now())
    }

    /// Same as [`check`](Self::check) against an explicit clock reading.
    pub fn check_at(&self, key: &str, now: Instant) -> RateLimitDecision {
        let max = self.config.max_requests();
        let window = self.config.window();

        match self.entries.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(RateLimitEntry::fresh(now, window));
                RateLimitDecision::allowed(max - 1)
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                if entry.is_expired(now) {
                    *entry = RateLimitEntry::fresh(now, window);
                    return RateLimitDecision::allowed(max - 1);
                }
                if entry.count >= max {
                    warn!(key, max, "Rate limit exceeded");
                    return RateLimitDecision::denied();
                }
                entry.count += 1;
                RateLimitDecision::allowed(max - entry.count)
            }
        }
    }

    /// Drops every entry whose window has elapsed. Returns how many went.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    pub fn sweep_expired_at(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired(now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    pub fn entry(&self, key: &str) -> Option<RateLimitEntry> {
        self.entries.get(key).map(|e| *e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Starts the background sweeper, evicting expired entries once per
    /// window. Requires a running tokio runtime.
    pub fn spawn_sweeper(self: &Arc<Self>) -> JoinHandle<()> {
        let sweeper = RateLimitSweeper::new(Arc::clone(self), self.config.window());
        tokio::spawn(async move { sweeper.run().await })
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::with_config(RateLimitConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
