//! Campaign eligibility validation — ordered checks with typed rejection
//! reasons, then discount computation with the double cap (max discount,
//! then order amount).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::{Campaign, CampaignStatus, CartItem, DiscountType};

/// Why a campaign does not apply to an order. `Display` gives the
/// customer-facing message.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    #[error("Campaign is not active")]
    NotActive,
    #[error("Campaign has not started yet")]
    NotStarted,
    #[error("Campaign has expired")]
    Expired,
    #[error("Campaign usage limit reached")]
    UsageLimitReached,
    #[error("Minimum order amount is {minimum}")]
    BelowMinimumOrder { minimum: f64 },
    #[error("Campaign does not apply to any product in the cart")]
    NoApplicableProducts,
    #[error("Cart contains a product excluded from this campaign")]
    ContainsExcludedProduct,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub reason: Option<RejectionReason>,
    /// Capped discount; never exceeds the order amount.
    pub discount_amount: Option<f64>,
}

impl ValidationOutcome {
    fn rejected(reason: RejectionReason) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
            discount_amount: None,
        }
    }

    fn accepted(discount_amount: f64) -> Self {
        Self {
            is_valid: true,
            reason: None,
            discount_amount: Some(discount_amount),
        }
    }
}

/// Check a campaign against an order, short-circuiting on the first failing
/// rule. On success the outcome carries the computed discount.
pub fn validate(
    campaign: &Campaign,
    order_amount: f64,
    cart: &[CartItem],
    now: DateTime<Utc>,
) -> ValidationOutcome {
    metrics::counter!("campaigns.validations").increment(1);

    let outcome = run_checks(campaign, order_amount, cart, now);
    if let Some(reason) = &outcome.reason {
        metrics::counter!("campaigns.rejections").increment(1);
        debug!(
            campaign_id = campaign.id,
            reason = %reason,
            "Campaign rejected"
        );
    }
    outcome
}

fn run_checks(
    campaign: &Campaign,
    order_amount: f64,
    cart: &[CartItem],
    now: DateTime<Utc>,
) -> ValidationOutcome {
    if !campaign.is_active || campaign.status != CampaignStatus::Active {
        return ValidationOutcome::rejected(RejectionReason::NotActive);
    }

    if let Some(start) = campaign.start_date {
        if start > now {
            return ValidationOutcome::rejected(RejectionReason::NotStarted);
        }
    }
    if let Some(end) = campaign.end_date {
        if end < now {
            return ValidationOutcome::rejected(RejectionReason::Expired);
        }
    }

    if let Some(limit) = campaign.usage_limit {
        if campaign.used_count >= limit {
            return ValidationOutcome::rejected(RejectionReason::UsageLimitReached);
        }
    }

    if let Some(minimum) = campaign.min_order_amount {
        if order_amount < minimum {
            return ValidationOutcome::rejected(RejectionReason::BelowMinimumOrder { minimum });
        }
    }

    if !campaign.applicable_products.is_empty()
        && !cart
            .iter()
            .any(|item| campaign.applicable_products.contains(&item.product_id))
    {
        return ValidationOutcome::rejected(RejectionReason::NoApplicableProducts);
    }

    if !campaign.excluded_products.is_empty()
        && cart
            .iter()
            .any(|item| campaign.excluded_products.contains(&item.product_id))
    {
        return ValidationOutcome::rejected(RejectionReason::ContainsExcludedProduct);
    }

    let mut discount = match campaign.discount_type {
        DiscountType::Percentage => order_amount * campaign.discount_value / 100.0,
        DiscountType::Fixed => campaign.discount_value,
        DiscountType::BuyXGetY => 0.0,
    };

    if let Some(max) = campaign.max_discount_amount {
        discount = discount.min(max);
    }
    // A discount can never exceed the order itself.
    discount = discount.min(order_amount);

    ValidationOutcome::accepted(discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CampaignKind;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn campaign() -> Campaign {
        Campaign {
            id: 1,
            name: "Summer Sale".to_string(),
            description: None,
            kind: CampaignKind::Discount,
            status: CampaignStatus::Active,
            target_segment_id: None,
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            min_order_amount: None,
            max_discount_amount: None,
            applicable_products: Vec::new(),
            excluded_products: Vec::new(),
            start_date: None,
            end_date: None,
            usage_limit: None,
            used_count: 0,
            is_active: true,
        }
    }

    fn cart(product_ids: &[u64]) -> Vec<CartItem> {
        product_ids
            .iter()
            .map(|&product_id| CartItem {
                product_id,
                quantity: 1,
                unit_price: 100.0,
            })
            .collect()
    }

    #[test]
    fn test_percentage_discount() {
        let outcome = validate(&campaign(), 200.0, &cart(&[1]), Utc::now());
        assert!(outcome.is_valid);
        assert_eq!(outcome.discount_amount, Some(20.0));
    }

    #[test]
    fn test_inactive_flag_rejected() {
        let mut c = campaign();
        c.is_active = false;
        let outcome = validate(&c, 200.0, &cart(&[1]), Utc::now());
        assert_eq!(outcome.reason, Some(RejectionReason::NotActive));
    }

    #[test]
    fn test_non_active_status_rejected() {
        let mut c = campaign();
        c.status = CampaignStatus::Paused;
        let outcome = validate(&c, 200.0, &cart(&[1]), Utc::now());
        assert_eq!(outcome.reason, Some(RejectionReason::NotActive));
    }

    #[test]
    fn test_date_bounds() {
        let now = Utc::now();

        let mut c = campaign();
        c.start_date = Some(now + Duration::days(1));
        let outcome = validate(&c, 200.0, &cart(&[1]), now);
        assert_eq!(outcome.reason, Some(RejectionReason::NotStarted));

        let mut c = campaign();
        c.end_date = Some(now - Duration::days(1));
        let outcome = validate(&c, 200.0, &cart(&[1]), now);
        assert_eq!(outcome.reason, Some(RejectionReason::Expired));
    }

    #[test]
    fn test_usage_limit_exhausted() {
        let mut c = campaign();
        c.usage_limit = Some(100);
        c.used_count = 100;
        let outcome = validate(&c, 200.0, &cart(&[1]), Utc::now());
        assert!(!outcome.is_valid);
        assert_eq!(outcome.reason, Some(RejectionReason::UsageLimitReached));
    }

    #[test]
    fn test_minimum_order_amount() {
        let mut c = campaign();
        c.min_order_amount = Some(150.0);
        let outcome = validate(&c, 100.0, &cart(&[1]), Utc::now());
        assert_eq!(
            outcome.reason,
            Some(RejectionReason::BelowMinimumOrder { minimum: 150.0 })
        );
    }

    #[test]
    fn test_applicable_products_require_overlap() {
        let mut c = campaign();
        c.applicable_products = vec![10, 11];
        let outcome = validate(&c, 200.0, &cart(&[1, 2]), Utc::now());
        assert_eq!(outcome.reason, Some(RejectionReason::NoApplicableProducts));

        let outcome = validate(&c, 200.0, &cart(&[2, 11]), Utc::now());
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_excluded_products_block() {
        let mut c = campaign();
        c.excluded_products = vec![5];
        let outcome = validate(&c, 200.0, &cart(&[1, 5]), Utc::now());
        assert_eq!(
            outcome.reason,
            Some(RejectionReason::ContainsExcludedProduct)
        );
    }

    #[test]
    fn test_fixed_discount_capped_at_order_amount() {
        let mut c = campaign();
        c.discount_type = DiscountType::Fixed;
        c.discount_value = 500.0;
        let outcome = validate(&c, 120.0, &cart(&[1]), Utc::now());
        assert_eq!(outcome.discount_amount, Some(120.0));
    }

    #[test]
    fn test_max_discount_cap() {
        let mut c = campaign();
        c.discount_value = 50.0;
        c.max_discount_amount = Some(30.0);
        let outcome = validate(&c, 200.0, &cart(&[1]), Utc::now());
        assert_eq!(outcome.discount_amount, Some(30.0));
    }

    #[test]
    fn test_buy_x_get_y_has_no_direct_discount() {
        let mut c = campaign();
        c.discount_type = DiscountType::BuyXGetY;
        let outcome = validate(&c, 200.0, &cart(&[1]), Utc::now());
        assert!(outcome.is_valid);
        assert_eq!(outcome.discount_amount, Some(0.0));
    }

    #[test]
    fn test_discount_never_exceeds_order_amount_randomized() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();

        for _ in 0..1_000 {
            let mut c = campaign();
            c.discount_type = if rng.gen_bool(0.5) {
                DiscountType::Percentage
            } else {
                DiscountType::Fixed
            };
            c.discount_value = rng.gen_range(0.0..500.0);
            c.max_discount_amount = if rng.gen_bool(0.5) {
                Some(rng.gen_range(0.0..300.0))
            } else {
                None
            };
            c.min_order_amount = if rng.gen_bool(0.3) {
                Some(rng.gen_range(0.0..100.0))
            } else {
                None
            };
            let order_amount = rng.gen_range(0.0..1_000.0);

            let outcome = validate(&c, order_amount, &cart(&[1]), now);
            if let Some(discount) = outcome.discount_amount {
                assert!(
                    discount <= order_amount,
                    "discount {discount} exceeds order {order_amount}"
                );
                assert!(discount >= 0.0);
            }
        }
    }
}
