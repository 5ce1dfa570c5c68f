//! RFM analysis — Recency/Frequency/Monetary value scoring.
//!
//! Each dimension maps to a 1–5 sub-score; the sub-score sum picks the
//! segment label. Customers with no order history get a recency sentinel
//! large enough to always land in the lowest recency bucket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::CustomerAnalytics;
use tracing::debug;

/// Recency assigned to customers who never ordered. Deep inside the
/// lowest bucket (anything above 180 days scores 1).
pub const NEVER_ORDERED_RECENCY_DAYS: i64 = 999;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfmAnalysis {
    /// Whole days since the last order, or the never-ordered sentinel.
    pub recency_days: i64,
    /// Lifetime order count.
    pub frequency: u64,
    /// Lifetime spend.
    pub monetary: f64,
    pub recency_score: u8,
    pub frequency_score: u8,
    pub monetary_score: u8,
    /// Three digits in R-F-M order, e.g. `"543"`.
    pub score: String,
    pub segment: RfmSegment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RfmSegment {
    Champions,
    LoyalCustomers,
    PotentialLoyalists,
    NewCustomers,
    Promising,
    NeedAttention,
    AtRisk,
}

impl RfmSegment {
    pub fn label(&self) -> &'static str {
        match self {
            RfmSegment::Champions => "Champions",
            RfmSegment::LoyalCustomers => "Loyal Customers",
            RfmSegment::PotentialLoyalists => "Potential Loyalists",
            RfmSegment::NewCustomers => "New Customers",
            RfmSegment::Promising => "Promising",
            RfmSegment::NeedAttention => "Need Attention",
            RfmSegment::AtRisk => "At Risk",
        }
    }

    /// Marketing cohorts worth targeting at this segment.
    pub fn recommended_cohorts(&self) -> &'static [&'static str] {
        match self {
            RfmSegment::Champions => &["VIP Customers", "Premium Products"],
            RfmSegment::LoyalCustomers => &["Loyalty Program", "Exclusive Discounts"],
            RfmSegment::PotentialLoyalists => {
                &["New Product Launches", "Cross-sell Campaigns"]
            }
            RfmSegment::AtRisk => &["Re-engagement Campaigns", "Special Offers"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for RfmSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a customer snapshot. Total over all inputs; absent order history
/// falls back to the recency sentinel rather than erroring.
pub fn analyze(analytics: &CustomerAnalytics, now: DateTime<Utc>) -> RfmAnalysis {
    let recency_days = analytics
        .days_since_last_order(now)
        .unwrap_or(NEVER_ORDERED_RECENCY_DAYS);
    let frequency = analytics.total_orders;
    let monetary = analytics.total_spent;

    let recency_score = score_recency(recency_days);
    let frequency_score = score_frequency(frequency);
    let monetary_score = score_monetary(monetary);

    let score = format!("{recency_score}{frequency_score}{monetary_score}");
    let segment = segment_for(recency_score + frequency_score + monetary_score);

    debug!(
        customer_id = analytics.customer_id,
        score = %score,
        segment = %segment,
        "RFM analysis computed"
    );

    RfmAnalysis {
        recency_days,
        frequency,
        monetary,
        recency_score,
        frequency_score,
        monetary_score,
        score,
        segment,
    }
}

fn score_recency(days: i64) -> u8 {
    match days {
        d if d <= 30 => 5,
        d if d <= 60 => 4,
        d if d <= 90 => 3,
        d if d <= 180 => 2,
        _ => 1,
    }
}

fn score_frequency(orders: u64) -> u8 {
    match orders {
        o if o >= 20 => 5,
        o if o >= 10 => 4,
        o if o >= 5 => 3,
        o if o >= 2 => 2,
        _ => 1,
    }
}

fn score_monetary(spent: f64) -> u8 {
    match spent {
        s if s >= 5_000.0 => 5,
        s if s >= 2_000.0 => 4,
        s if s >= 1_000.0 => 3,
        s if s >= 500.0 => 2,
        _ => 1,
    }
}

fn segment_for(sum: u8) -> RfmSegment {
    match sum {
        s if s >= 13 => RfmSegment::Champions,
        s if s >= 11 => RfmSegment::LoyalCustomers,
        s if s >= 9 => RfmSegment::PotentialLoyalists,
        s if s >= 7 => RfmSegment::NewCustomers,
        s if s >= 5 => RfmSegment::Promising,
        s if s >= 3 => RfmSegment::NeedAttention,
        // Unreachable from valid sub-scores (minimum sum is 3). Kept so the
        // label set stays closed over arbitrary sums.
        _ => RfmSegment::AtRisk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn snapshot(orders: u64, spent: f64, last_order: Option<DateTime<Utc>>) -> CustomerAnalytics {
        CustomerAnalytics {
            customer_id: 7,
            total_orders: orders,
            total_spent: spent,
            average_order_value: if orders > 0 { spent / orders as f64 } else { 0.0 },
            last_order_date: last_order,
            favorite_categories: Vec::new(),
            favorite_brands: Vec::new(),
            purchase_frequency: 0.0,
            customer_lifetime_value: spent,
        }
    }

    #[test]
    fn test_champion_fixture() {
        let now = Utc::now();
        let analysis = analyze(&snapshot(25, 6_000.0, Some(now)), now);
        assert_eq!(
            (
                analysis.recency_score,
                analysis.frequency_score,
                analysis.monetary_score
            ),
            (5, 5, 5)
        );
        assert_eq!(analysis.score, "555");
        assert_eq!(analysis.segment, RfmSegment::Champions);
    }

    #[test]
    fn test_never_ordered_uses_sentinel() {
        let analysis = analyze(&snapshot(0, 0.0, None), Utc::now());
        assert_eq!(analysis.recency_days, NEVER_ORDERED_RECENCY_DAYS);
        assert_eq!(analysis.recency_score, 1);
        assert_eq!(analysis.score, "111");
        // Minimum possible sum is 3, which already lands in NeedAttention;
        // the AtRisk fallback is unreachable from real sub-scores.
        assert_eq!(analysis.segment, RfmSegment::NeedAttention);
    }

    #[test]
    fn test_sub_scores_stay_in_range() {
        let now = Utc::now();
        let cases = [
            snapshot(0, 0.0, None),
            snapshot(1, 499.9, Some(now - Duration::days(181))),
            snapshot(4, 999.0, Some(now - Duration::days(90))),
            snapshot(19, 4_999.0, Some(now - Duration::days(31))),
            snapshot(100, 50_000.0, Some(now)),
        ];
        for analytics in &cases {
            let analysis = analyze(analytics, now);
            for score in [
                analysis.recency_score,
                analysis.frequency_score,
                analysis.monetary_score,
            ] {
                assert!((1..=5).contains(&score));
            }
            assert_eq!(analysis.score.len(), 3);
            assert!(analysis.score.chars().all(|c| ('1'..='5').contains(&c)));
        }
    }

    #[test]
    fn test_recency_bucket_boundaries() {
        assert_eq!(score_recency(30), 5);
        assert_eq!(score_recency(31), 4);
        assert_eq!(score_recency(60), 4);
        assert_eq!(score_recency(90), 3);
        assert_eq!(score_recency(180), 2);
        assert_eq!(score_recency(181), 1);
    }

    #[test]
    fn test_segment_sum_boundaries() {
        assert_eq!(segment_for(15), RfmSegment::Champions);
        assert_eq!(segment_for(13), RfmSegment::Champions);
        assert_eq!(segment_for(12), RfmSegment::LoyalCustomers);
        assert_eq!(segment_for(10), RfmSegment::PotentialLoyalists);
        assert_eq!(segment_for(8), RfmSegment::NewCustomers);
        assert_eq!(segment_for(6), RfmSegment::Promising);
        assert_eq!(segment_for(3), RfmSegment::NeedAttention);
        // Below-minimum sums only occur for synthetic input; the fallback
        // still produces a label.
        assert_eq!(segment_for(0), RfmSegment::AtRisk);
    }

    #[test]
    fn test_recommended_cohorts() {
        assert_eq!(
            RfmSegment::Champions.recommended_cohorts(),
            ["VIP Customers", "Premium Products"]
        );
        assert!(RfmSegment::Promising.recommended_cohorts().is_empty());
    }
}
