//! Customer purchase analytics snapshot — the read-only input every
//! downstream computation (RFM, criteria matching, offer rules) runs over.
//! The engine never mutates or refreshes it; the caller fetches a fresh
//! snapshot per invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAnalytics {
    pub customer_id: u64,
    pub total_orders: u64,
    pub total_spent: f64,
    pub average_order_value: f64,
    pub last_order_date: Option<DateTime<Utc>>,
    /// Most-purchased categories, highest-ranked first.
    pub favorite_categories: Vec<String>,
    /// Most-purchased brands, highest-ranked first.
    pub favorite_brands: Vec<String>,
    /// Orders per month over the customer's lifetime.
    pub purchase_frequency: f64,
    pub customer_lifetime_value: f64,
}

impl CustomerAnalytics {
    /// Whole days since the last order, None when the customer never ordered.
    pub fn days_since_last_order(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_order_date.map(|d| (now - d).num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn snapshot(last_order: Option<DateTime<Utc>>) -> CustomerAnalytics {
        CustomerAnalytics {
            customer_id: 1,
            total_orders: 4,
            total_spent: 320.0,
            average_order_value: 80.0,
            last_order_date: last_order,
            favorite_categories: vec!["Electronics".to_string()],
            favorite_brands: vec!["Apple".to_string()],
            purchase_frequency: 1.5,
            customer_lifetime_value: 450.0,
        }
    }

    #[test]
    fn test_days_since_last_order() {
        let now = Utc::now();
        let analytics = snapshot(Some(now - Duration::days(45)));
        assert_eq!(analytics.days_since_last_order(now), Some(45));
    }

    #[test]
    fn test_days_since_last_order_never_ordered() {
        let analytics = snapshot(None);
        assert_eq!(analytics.days_since_last_order(Utc::now()), None);
    }
}
