use std::time::Duration;

use crate::error::{AppError, Result};

/// Default request budget per key per window (RATE_LIMIT_MAX).
pub const DEFAULT_RATE_LIMIT_MAX: u32 = 100;

/// Default fixed-window length in milliseconds (RATE_LIMIT_WINDOW_MS).
pub const DEFAULT_RATE_LIMIT_WINDOW_MS: u64 = 60_000;

/// Number of ranked topics returned when the caller does not ask for a size.
pub const DEFAULT_TOP_N: usize = 5;

/// Weights applied to the five sub-scores, in check order:
/// keyword density, readability, headings, meta description, length.
pub mod seo_weights {
    pub const KEYWORD_DENSITY: f64 = 0.25;
    pub const READABILITY: f64 = 0.20;
    pub const HEADING_STRUCTURE: f64 = 0.25;
    pub const META_DESCRIPTION: f64 = 0.15;
    pub const CONTENT_LENGTH: f64 = 0.15;
}

/// Keyword density bands, in percent. Each band is inclusive on both ends.
pub mod density_bands {
    pub const IDEAL: (f64, f64) = (1.0, 1.5);
    pub const GOOD: (f64, f64) = (0.7, 2.0);
    pub const FAIR: (f64, f64) = (0.5, 2.5);
}

/// Meta description length bands, in characters.
pub mod meta_bands {
    pub const IDEAL: (usize, usize) = (120, 160);
    pub const ACCEPTABLE: (usize, usize) = (80, 200);
    pub const MISSING_KEYWORD_PENALTY: u8 = 20;
}

/// Article length bands, in words.
pub mod length_bands {
    pub const IDEAL: (usize, usize) = (1200, 1800);
    pub const ACCEPTABLE: (usize, usize) = (800, 2500);
}

/// Trend score blend and perturbation ranges.
pub mod trend_weights {
    /// Search volume at which the volume factor saturates.
    pub const VOLUME_CEILING: f64 = 150_000.0;
    pub const VOLUME: f64 = 0.35;
    pub const COMPETITION_INVERSE: f64 = 0.25;
    pub const MONETIZATION: f64 = 0.40;

    pub const VOLUME_RANGE: f64 = 20_000.0;
    pub const COMPETITION_RANGE: f64 = 10.0;
    pub const MONETIZATION_RANGE: f64 = 8.0;
}

/// Fixed-window limiter settings. Only built through `new` or `Default`, so
/// both fields are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    max_requests: u32,
    window_ms: u64,
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_ms: u64) -> Result<Self> {
        if max_requests == 0 {
            return Err(AppError::Config("max_requests must be greater than 0".to_string()));
        }
        if window_ms == 0 {
            return Err(AppError::Config("window_ms must be greater than 0".to_string()));
        }
        Ok(Self { max_requests, window_ms })
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX,
            window_ms: DEFAULT_RATE_LIMIT_WINDOW_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// RATE_LIMIT_MAX / RATE_LIMIT_WINDOW_MS
    pub rate_limit: RateLimitConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source. Absent or non-numeric limiter
    /// values fall back to their defaults; zero or negative ones are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_requests =
            positive_or_default(&lookup, "RATE_LIMIT_MAX", u64::from(DEFAULT_RATE_LIMIT_MAX))?;
        let max_requests = u32::try_from(max_requests)
            .map_err(|_| AppError::Config("RATE_LIMIT_MAX is out of range".to_string()))?;
        let window_ms =
            positive_or_default(&lookup, "RATE_LIMIT_WINDOW_MS", DEFAULT_RATE_LIMIT_WINDOW_MS)?;

        Ok(Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            rate_limit: RateLimitConfig::new(max_requests, window_ms)?,
        })
    }
}

fn positive_or_default<F>(lookup: &F, name: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<i64>() {
        Ok(v) if v > 0 => Ok(v as u64),
        Ok(_) => Err(AppError::Config(format!("{name} must be a positive integer"))),
        Err(_) => Ok(default),
    }
}
