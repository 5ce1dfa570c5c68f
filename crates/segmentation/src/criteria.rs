//! Declarative segment criteria and the membership predicate.
//!
//! Every field is optional; an absent field means "don't care". Present
//! fields are AND-ed, except the category/brand lists which pass on any
//! overlap with the customer's favorites.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::CustomerAnalytics;

use crate::rfm::RfmAnalysis;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentCriteria {
    /// Exact three-digit RFM score, e.g. `"555"`.
    pub rfm_score: Option<String>,
    pub min_orders: Option<u64>,
    pub max_orders: Option<u64>,
    pub min_spent: Option<f64>,
    pub max_spent: Option<f64>,
    /// Last order must be at most this many days old. Customers with no
    /// order history never match.
    pub last_order_within_days: Option<i64>,
    /// Passes when any listed category is among the customer's favorites.
    pub categories: Option<Vec<String>>,
    /// Passes when any listed brand is among the customer's favorites.
    pub brands: Option<Vec<String>>,
    pub min_average_order_value: Option<f64>,
    pub min_purchase_frequency: Option<f64>,
}

impl SegmentCriteria {
    /// True when no field is set; such criteria match every customer.
    pub fn is_unconstrained(&self) -> bool {
        self.rfm_score.is_none()
            && self.min_orders.is_none()
            && self.max_orders.is_none()
            && self.min_spent.is_none()
            && self.max_spent.is_none()
            && self.last_order_within_days.is_none()
            && self.categories.is_none()
            && self.brands.is_none()
            && self.min_average_order_value.is_none()
            && self.min_purchase_frequency.is_none()
    }
}

/// Evaluate segment membership. Conjunctive and short-circuiting: the first
/// failing predicate decides.
pub fn matches(
    analytics: &CustomerAnalytics,
    rfm: &RfmAnalysis,
    criteria: &SegmentCriteria,
    now: DateTime<Utc>,
) -> bool {
    if let Some(score) = &criteria.rfm_score {
        if &rfm.score != score {
            return false;
        }
    }

    if let Some(min) = criteria.min_orders {
        if analytics.total_orders < min {
            return false;
        }
    }
    if let Some(max) = criteria.max_orders {
        if analytics.total_orders > max {
            return false;
        }
    }

    if let Some(min) = criteria.min_spent {
        if analytics.total_spent < min {
            return false;
        }
    }
    if let Some(max) = criteria.max_spent {
        if analytics.total_spent > max {
            return false;
        }
    }

    if let Some(window) = criteria.last_order_within_days {
        match analytics.days_since_last_order(now) {
            Some(days) if days <= window => {}
            _ => return false,
        }
    }

    if let Some(categories) = &criteria.categories {
        if !categories.is_empty()
            && !categories
                .iter()
                .any(|c| analytics.favorite_categories.contains(c))
        {
            return false;
        }
    }

    if let Some(brands) = &criteria.brands {
        if !brands.is_empty() && !brands.iter().any(|b| analytics.favorite_brands.contains(b)) {
            return false;
        }
    }

    if let Some(min) = criteria.min_average_order_value {
        if analytics.average_order_value < min {
            return false;
        }
    }

    if let Some(min) = criteria.min_purchase_frequency {
        if analytics.purchase_frequency < min {
            return false;
        }
    }

    true
}
