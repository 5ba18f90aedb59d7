use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)` used to perturb trend metrics.
pub trait VarianceSource {
    fn sample(&mut self) -> f64;

    /// `max(0, round(base + (u - 0.5) * range))` for one fresh sample `u`,
    /// i.e. a shift centred on zero spanning `range`.
    fn perturb(&mut self, base: f64, range: f64) -> f64 {
        (base + (self.sample() - 0.5) * range).round().max(0.0)
    }
}

/// Adapts any `rand` generator.
#[derive(Debug)]
pub struct RngVariance<R> {
    rng: R,
}

impl<R: Rng> RngVariance<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngVariance<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngVariance<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> VarianceSource for RngVariance<R> {
    fn sample(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Always samples the midpoint, so metrics pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroVariance;

impl VarianceSource for ZeroVariance {
    fn sample(&mut self) -> f64 {
        0.5
    }
}
