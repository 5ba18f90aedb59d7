pub mod pool;
pub mod ranker;
pub mod variance;

pub use pool::default_pool;
pub use ranker::{perturb, rank_trend_topics, trend_score};
pub use variance::{RngVariance, VarianceSource, ZeroVariance};
