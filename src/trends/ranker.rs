use tracing::debug;

use crate::config::trend_weights;
use crate::trends::variance::VarianceSource;
use crate::types::{TrendCategory, TrendTopic};

impl TrendTopic {
    pub fn new(
        title: impl Into<String>,
        keyword: impl Into<String>,
        search_volume: u32,
        competition_score: u8,
        monetization_score: u8,
        category: TrendCategory,
    ) -> Self {
        Self {
            title: title.into(),
            keyword: keyword.into(),
            search_volume,
            competition_score,
            monetization_score,
            trend_score: trend_score(search_volume, competition_score, monetization_score),
            category,
        }
    }

    /// Recomputes `trend_score` from the current metrics.
    pub fn rescore(&mut self) {
        self.trend_score = trend_score(self.search_volume, self.competition_score, self.monetization_score);
    }
}

/// Blend of saturating search volume, inverted competition and monetization.
/// Competition above 100 counts as 100.
pub fn trend_score(search_volume: u32, competition_score: u8, monetization_score: u8) -> u8 {
    let volume_norm = (f64::from(search_volume) / trend_weights::VOLUME_CEILING).min(1.0) * 100.0;
    let comp_inverse = 100.0 - f64::from(competition_score.min(100));
    let blended = volume_norm * trend_weights::VOLUME
        + comp_inverse * trend_weights::COMPETITION_INVERSE
        + f64::from(monetization_score) * trend_weights::MONETIZATION;
    blended.round().clamp(0.0, 100.0) as u8
}

/// Shifts the three metrics of `topic` by fresh variance and rescores it.
/// Volume is only floored at zero; competition and monetization stay in [0, 100].
pub fn perturb<V: VarianceSource + ?Sized>(topic: &TrendTopic, variance: &mut V) -> TrendTopic {
    let search_volume = variance
        .perturb(f64::from(topic.search_volume), trend_weights::VOLUME_RANGE)
        .min(f64::from(u32::MAX)) as u32;
    let competition_score = variance
        .perturb(f64::from(topic.competition_score), trend_weights::COMPETITION_RANGE)
        .min(100.0) as u8;
    let monetization_score = variance
        .perturb(f64::from(topic.monetization_score), trend_weights::MONETIZATION_RANGE)
        .min(100.0) as u8;

    let mut varied = TrendTopic {
        search_volume,
        competition_score,
        monetization_score,
        ..topic.clone()
    };
    varied.rescore();
    varied
}

/// Ranks `pool` after perturbing every candidate and returns the best `top_n`.
///
/// A `category` naming a known [`TrendCategory`] restricts the pool before
/// perturbation; an unknown name leaves it unfiltered. Ties keep pool order.
pub fn rank_trend_topics<V: VarianceSource + ?Sized>(
    pool: &[TrendTopic],
    category: Option<&str>,
    top_n: usize,
    variance: &mut V,
) -> Vec<TrendTopic> {
    let filter = category.and_then(|c| c.parse::<TrendCategory>().ok());

    let mut varied: Vec<TrendTopic> = pool
        .iter()
        .filter(|t| filter.map_or(true, |c| t.category == c))
        .map(|t| perturb(t, variance))
        .collect();

    let candidates = varied.len();
    varied.sort_by(|a, b| b.trend_score.cmp(&a.trend_score));
    varied.truncate(top_n);

    debug!(
        category = filter.map(|c| c.as_str()).unwrap_or("all"),
        candidates,
        returned = varied.len(),
        "Ranked trend topics"
    );
    varied
}
