use crate::types::{TrendCategory, TrendTopic};

/// (title, keyword, search volume, competition, monetization, category)
const BASELINE: [(&str, &str, u32, u8, u8, TrendCategory); 15] = [
    ("AI-Powered Home Automation in 2026", "ai home automation 2026", 74_000, 35, 88, TrendCategory::Technology),
    ("Best Budget Electric Vehicles Under $30K", "budget electric vehicles 2026", 110_000, 58, 95, TrendCategory::Automotive),
    ("Remote Work Productivity Tools Guide", "remote work productivity tools", 62_000, 42, 78, TrendCategory::Business),
    ("Beginner's Guide to Passive Income Streams", "passive income streams beginners", 88_000, 65, 92, TrendCategory::Finance),
    ("Plant-Based Protein Supplements Review", "plant based protein supplements", 49_000, 30, 85, TrendCategory::Health),
    ("Smart Home Security Systems Comparison", "smart home security systems 2026", 93_000, 48, 90, TrendCategory::Technology),
    ("Best Online Course Platforms for Creators", "online course platforms creators", 55_000, 38, 82, TrendCategory::Education),
    ("Keto Diet Meal Prep for Beginners", "keto diet meal prep beginners", 71_000, 52, 75, TrendCategory::Food),
    ("Side Hustle Ideas That Actually Work", "side hustle ideas 2026", 120_000, 70, 88, TrendCategory::Finance),
    ("Best VPN Services for Privacy", "best vpn services privacy 2026", 85_000, 62, 93, TrendCategory::Technology),
    ("Email Marketing Automation Strategies", "email marketing automation strategies", 46_000, 40, 86, TrendCategory::Marketing),
    ("Standing Desk Benefits and Best Picks", "standing desk benefits best picks", 67_000, 35, 80, TrendCategory::Lifestyle),
    ("Best Streaming Services Compared", "best streaming services comparison 2026", 140_000, 75, 70, TrendCategory::Entertainment),
    ("How to Start Dropshipping in 2026", "start dropshipping 2026 guide", 98_000, 68, 91, TrendCategory::Business),
    ("Natural Sleep Remedies That Work", "natural sleep remedies that work", 54_000, 28, 76, TrendCategory::Health),
];

/// The fixed candidate pool, with trend scores derived from the baselines.
pub fn default_pool() -> Vec<TrendTopic> {
    BASELINE
        .iter()
        .map(|&(title, keyword, volume, competition, monetization, category)| {
            TrendTopic::new(title, keyword, volume, competition, monetization, category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::ranker::trend_score;

    #[test]
    fn pool_has_fifteen_scored_topics() {
        let pool = default_pool();
        assert_eq!(pool.len(), 15);
        for t in &pool {
            assert_eq!(t.trend_score, trend_score(t.search_volume, t.competition_score, t.monetization_score));
        }
    }

    #[test]
    fn baseline_scores() {
        let pool = default_pool();
        // 74000/150000*100*0.35 + 65*0.25 + 88*0.4 = 17.27 + 16.25 + 35.2
        assert_eq!(pool[0].trend_score, 69);
        // 110000/150000*100*0.35 + 42*0.25 + 95*0.4 = 25.67 + 10.5 + 38
        assert_eq!(pool[1].trend_score, 74);
        // 140000/150000*100*0.35 + 25*0.25 + 70*0.4 = 32.67 + 6.25 + 28
        assert_eq!(pool[12].trend_score, 67);
    }

    #[test]
    fn keywords_are_unique() {
        let pool = default_pool();
        let mut keywords: Vec<&str> = pool.iter().map(|t| t.keyword.as_str()).collect();
        keywords.sort_unstable();
        keywords.dedup();
        assert_eq!(keywords.len(), pool.len());
    }

    #[test]
    fn lifestyle_has_one_candidate() {
        let pool = default_pool();
        let n = pool.iter().filter(|t| t.category == TrendCategory::Lifestyle).count();
        assert_eq!(n, 1);
    }
}
