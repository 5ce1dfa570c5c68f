//! Campaign domain types. Definitions arrive already fetched from the
//! campaign store; this crate only evaluates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignKind {
    Discount,
    FreeShipping,
    Bundle,
    Loyalty,
    Seasonal,
    Birthday,
    AbandonedCart,
}

impl CampaignKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            CampaignKind::Discount => "Discount",
            CampaignKind::FreeShipping => "Free Shipping",
            CampaignKind::Bundle => "Bundle Deal",
            CampaignKind::Loyalty => "Loyalty Program",
            CampaignKind::Seasonal => "Seasonal",
            CampaignKind::Birthday => "Birthday",
            CampaignKind::AbandonedCart => "Abandoned Cart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    Fixed,
    /// Item-level promotion; carries no direct order discount.
    BuyXGetY,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub kind: CampaignKind,
    pub status: CampaignStatus,
    pub target_segment_id: Option<Uuid>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_amount: Option<f64>,
    pub max_discount_amount: Option<f64>,
    /// When non-empty, the cart must contain at least one of these.
    pub applicable_products: Vec<u64>,
    /// When non-empty, the cart must contain none of these.
    pub excluded_products: Vec<u64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub usage_limit: Option<u64>,
    pub used_count: u64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: u64,
    pub quantity: u32,
    pub unit_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_names() {
        assert_eq!(CampaignKind::FreeShipping.display_name(), "Free Shipping");
        assert_eq!(CampaignKind::AbandonedCart.display_name(), "Abandoned Cart");
    }
}
