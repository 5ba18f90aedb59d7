pub mod rate_limiter;
pub mod sweeper;

pub use rate_limiter::{RateLimitEntry, RateLimiter};
pub use sweeper::RateLimitSweeper;
