//! EXP accrual — maps customer actions to point awards.
//!
//! The calculator only computes amounts; writing the ledger entry is the
//! caller's job. [`ExpTransaction`] is the append-only record shape that
//! ledger uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::config::AccrualConfig;
use tracing::debug;
use uuid::Uuid;

/// Actions that accrue EXP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpSource {
    Purchase,
    Invitation,
    SocialShare,
    Review,
    Login,
    /// Ad-hoc events; the award is caller-supplied.
    Special,
}

/// Append-only EXP ledger entry. Never mutated once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpTransaction {
    pub id: Uuid,
    pub customer_id: u64,
    pub source: ExpSource,
    pub amount: u64,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub order_id: Option<u64>,
    pub product_id: Option<u64>,
}

impl ExpTransaction {
    pub fn new(
        customer_id: u64,
        source: ExpSource,
        amount: u64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            source,
            amount,
            description: description.into(),
            timestamp: Utc::now(),
            order_id: None,
            product_id: None,
        }
    }

    pub fn with_order(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn with_product(mut self, product_id: u64) -> Self {
        self.product_id = Some(product_id);
        self
    }
}

/// Compute the EXP award for an action.
///
/// Purchases earn the base award plus a floored fraction of the order total
/// when one is supplied. `Special` passes `raw_amount` through (clamped to
/// non-negative); every other source ignores it.
pub fn compute_award(
    config: &AccrualConfig,
    source: ExpSource,
    raw_amount: i64,
    order_total: Option<f64>,
) -> u64 {
    let award = match source {
        ExpSource::Purchase => {
            let bonus = order_total
                .filter(|total| *total > 0.0)
                .map(|total| (total * config.purchase_rate).floor() as u64)
                .unwrap_or(0);
            config.purchase_base + bonus
        }
        ExpSource::Invitation => config.invitation,
        ExpSource::SocialShare => config.social_share,
        ExpSource::Review => config.review,
        ExpSource::Login => config.login,
        ExpSource::Special => raw_amount.max(0) as u64,
    };

    metrics::counter!("loyalty.exp_awarded").increment(award);
    debug!(source = ?source, award = award, "EXP award computed");
    award
}
