//! Offer generator — evaluates independent behavioral rules over a
//! customer snapshot and ranks the resulting candidate offers.
//!
//! Every rule is pure except the birthday rule, which awaits the caller's
//! birth-date capability. That lookup's failure degrades to "no birthday
//! offer"; it never surfaces to the caller.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::CustomerAnalytics;
use storefront_loyalty::LevelProgress;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferType {
    Discount,
    FreeShipping,
    Bundle,
    Loyalty,
    Seasonal,
    Birthday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferDiscountKind {
    Percentage,
    Fixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDiscount {
    pub value: f64,
    pub kind: OfferDiscountKind,
}

impl OfferDiscount {
    fn percentage(value: f64) -> Self {
        Self {
            value,
            kind: OfferDiscountKind::Percentage,
        }
    }
}

/// A ranked candidate promotional incentive with its justification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedOffer {
    pub id: String,
    pub offer_type: OfferType,
    pub title: String,
    pub description: String,
    pub discount: Option<OfferDiscount>,
    pub min_order_amount: Option<f64>,
    /// Higher is shown first.
    pub priority: u8,
    /// Why this offer was selected.
    pub reason: String,
}

/// Caller-supplied async capability resolving a customer's birth date.
pub trait BirthdateSource {
    fn birthdate(
        &self,
        customer_id: u64,
    ) -> impl std::future::Future<Output = anyhow::Result<Option<NaiveDate>>> + Send;
}

/// Outcome of the birth-date lookup. `Failed` and `Absent` produce the same
/// offers; keeping them distinct lets tests pin the degradation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdateLookup {
    Found(NaiveDate),
    Absent,
    Failed,
}

impl BirthdateLookup {
    /// Whether the looked-up date falls on today's day and month.
    pub fn is_birthday(&self, now: DateTime<Utc>) -> bool {
        match self {
            BirthdateLookup::Found(date) => {
                let today = now.date_naive();
                date.day() == today.day() && date.month() == today.month()
            }
            BirthdateLookup::Absent | BirthdateLookup::Failed => false,
        }
    }
}

pub struct OfferGenerator;

impl OfferGenerator {
    pub fn new() -> Self {
        info!("Offer generator initialized");
        Self
    }

    /// Resolve the birth-date capability into an explicit outcome,
    /// swallowing failures.
    pub async fn lookup_birthdate<S: BirthdateSource>(
        source: &S,
        customer_id: u64,
    ) -> BirthdateLookup {
        match source.birthdate(customer_id).await {
            Ok(Some(date)) => BirthdateLookup::Found(date),
            Ok(None) => BirthdateLookup::Absent,
            Err(error) => {
                warn!(customer_id, %error, "Birthdate lookup failed, skipping birthday offer");
                BirthdateLookup::Failed
            }
        }
    }

    /// Generate the ranked offer list for a customer.
    ///
    /// A customer with no analytics snapshot gets an empty list; the
    /// caller's welcome flow handles brand-new customers. Rules are not
    /// mutually exclusive, output is stably sorted by descending priority,
    /// and ties keep rule-evaluation order.
    pub async fn generate<S: BirthdateSource>(
        &self,
        customer_id: u64,
        analytics: Option<&CustomerAnalytics>,
        level: Option<&LevelProgress>,
        birthdates: &S,
        now: DateTime<Utc>,
    ) -> Vec<PersonalizedOffer> {
        let Some(analytics) = analytics else {
            return Vec::new();
        };

        // Resolved up front so the rule pass itself stays synchronous.
        let birthday = Self::lookup_birthdate(birthdates, customer_id).await;

        let mut offers = Vec::new();

        if analytics.total_spent > 2_000.0 && analytics.total_orders > 5 {
            offers.push(PersonalizedOffer {
                id: "vip-discount".to_string(),
                offer_type: OfferType::Discount,
                title: "VIP Customer Discount".to_string(),
                description: "Your exclusive VIP customer discount!".to_string(),
                discount: Some(OfferDiscount::percentage(15.0)),
                min_order_amount: Some(100.0),
                priority: 10,
                reason: "High-value customer".to_string(),
            });
        }

        if analytics.total_orders <= 2 {
            offers.push(PersonalizedOffer {
                id: "new-customer".to_string(),
                offer_type: OfferType::Discount,
                title: "New Customer Welcome Discount".to_string(),
                description: "20% off your first orders!".to_string(),
                discount: Some(OfferDiscount::percentage(20.0)),
                min_order_amount: Some(50.0),
                priority: 9,
                reason: "New customer".to_string(),
            });
        }

        if analytics.total_orders > 3 {
            offers.push(PersonalizedOffer {
                id: "free-shipping".to_string(),
                offer_type: OfferType::FreeShipping,
                title: "Free Shipping".to_string(),
                description: "Free shipping on all your orders!".to_string(),
                discount: None,
                min_order_amount: Some(100.0),
                priority: 8,
                reason: "Frequent shopper".to_string(),
            });
        }

        if birthday.is_birthday(now) {
            offers.push(PersonalizedOffer {
                id: "birthday-special".to_string(),
                offer_type: OfferType::Birthday,
                title: "Happy Birthday!".to_string(),
                description: "Your birthday discount is ready!".to_string(),
                discount: Some(OfferDiscount::percentage(25.0)),
                min_order_amount: Some(75.0),
                priority: 10,
                reason: "Birthday special".to_string(),
            });
        }

        if let Some(days) = analytics.days_since_last_order(now) {
            if days > 30 {
                offers.push(PersonalizedOffer {
                    id: "comeback-offer".to_string(),
                    offer_type: OfferType::Discount,
                    title: "Welcome Back Discount".to_string(),
                    description: "We missed you! Here is your comeback discount.".to_string(),
                    discount: Some(OfferDiscount::percentage(20.0)),
                    min_order_amount: Some(50.0),
                    priority: 9,
                    reason: "No orders in the last 30 days".to_string(),
                });
            }
        }

        if let Some(category) = analytics.favorite_categories.first() {
            offers.push(PersonalizedOffer {
                id: format!("category-{}", category.to_lowercase()),
                offer_type: OfferType::Discount,
                title: format!("{category} Category Special"),
                description: format!("15% off in your favorite {category} category!"),
                discount: Some(OfferDiscount::percentage(15.0)),
                min_order_amount: Some(75.0),
                priority: 7,
                reason: format!("Favorite category: {category}"),
            });
        }

        if let Some(level) = level {
            if level.rank > 0 {
                offers.push(PersonalizedOffer {
                    id: format!("tier-{}", level.current.id),
                    offer_type: OfferType::Loyalty,
                    title: format!("{} Member Bonus Points", level.current.display_name),
                    description: format!(
                        "Earn {}x points on every order",
                        level.current.multiplier
                    ),
                    discount: None,
                    min_order_amount: None,
                    priority: 8,
                    reason: format!("Loyalty tier: {}", level.current.display_name),
                });
            }
        }

        // Stable sort: equal priorities keep rule-evaluation order.
        offers.sort_by(|a, b| b.priority.cmp(&a.priority));

        metrics::counter!("personalization.offers_generated").increment(offers.len() as u64);
        debug!(
            customer_id,
            offers = offers.len(),
            "Personalized offers generated"
        );

        offers
    }
}

impl Default for OfferGenerator {
    fn default() -> Self {
        Self::new()
    }
}
