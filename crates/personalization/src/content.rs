//! Personalized content helpers — greeting, category/brand suggestions,
//! and the next-best-action nudge. All pure functions over the analytics
//! snapshot; the caller localizes or rewords as needed.

use chrono::{DateTime, Utc};
use storefront_core::CustomerAnalytics;

const MAX_SUGGESTIONS: usize = 5;

/// Greeting line tuned to the customer's history.
pub fn greeting(analytics: Option<&CustomerAnalytics>, now: DateTime<Utc>) -> String {
    let Some(analytics) = analytics else {
        return "Welcome!".to_string();
    };

    if analytics.total_orders == 0 {
        return "Welcome! Special discounts await on your first order!".to_string();
    }
    if analytics.total_orders == 1 {
        return "Welcome back! Check out the offers we picked for you.".to_string();
    }
    if analytics.total_orders > 10 {
        return format!(
            "Thank you for your {} orders! Your VIP offers are ready.",
            analytics.total_orders
        );
    }
    if analytics.total_spent > 1_000.0 {
        return "As one of our top customers, special discounts await you.".to_string();
    }
    if let Some(days) = analytics.days_since_last_order(now) {
        if days > 30 {
            return "We missed you! New arrivals and special offers await.".to_string();
        }
    }

    "Welcome! Discover recommendations picked for you.".to_string()
}

/// Favorite categories padded with complementary ones, capped at five.
pub fn category_suggestions(analytics: Option<&CustomerAnalytics>) -> Vec<String> {
    let Some(analytics) = analytics.filter(|a| !a.favorite_categories.is_empty()) else {
        return vec![
            "Popular Categories".to_string(),
            "New Arrivals".to_string(),
            "On Sale".to_string(),
        ];
    };

    let mut suggestions = analytics.favorite_categories.clone();
    for category in &analytics.favorite_categories {
        for complement in complementary_categories(category) {
            suggestions.push(complement.to_string());
        }
    }
    dedup_capped(suggestions)
}

/// Favorite brands padded with similar ones, capped at five.
pub fn brand_suggestions(analytics: Option<&CustomerAnalytics>) -> Vec<String> {
    let Some(analytics) = analytics.filter(|a| !a.favorite_brands.is_empty()) else {
        return vec![
            "Popular Brands".to_string(),
            "New Brands".to_string(),
            "Brands On Sale".to_string(),
        ];
    };

    let mut suggestions = analytics.favorite_brands.clone();
    for brand in &analytics.favorite_brands {
        for similar in similar_brands(brand) {
            suggestions.push(similar.to_string());
        }
    }
    dedup_capped(suggestions)
}

/// Single call-to-action line for the home screen.
pub fn next_best_action(
    analytics: Option<&CustomerAnalytics>,
    has_recommendations: bool,
    now: DateTime<Utc>,
) -> String {
    let Some(analytics) = analytics else {
        return "Explore our products".to_string();
    };

    if analytics.total_orders == 0 {
        return "Place your first order and earn a 20% discount!".to_string();
    }
    if analytics.total_orders == 1 {
        return "Get free shipping on your second order!".to_string();
    }
    if analytics.total_orders < 5 {
        return "Reach 5 orders to become a VIP customer!".to_string();
    }
    if analytics.total_spent > 1_000.0 {
        return "Explore our premium products!".to_string();
    }
    if let Some(days) = analytics.days_since_last_order(now) {
        if days > 30 {
            return "Discover new arrivals and earn a special discount!".to_string();
        }
    }
    if has_recommendations {
        return "Check out products picked for you!".to_string();
    }

    "Explore your favorite categories!".to_string()
}

fn complementary_categories(category: &str) -> &'static [&'static str] {
    match category {
        "Electronics" => &["Accessories", "Cables", "Cases"],
        "Clothing" => &["Shoes", "Accessories", "Bags"],
        "Home & Living" => &["Decor", "Kitchen", "Bathroom"],
        "Sports" => &["Clothing", "Shoes", "Equipment"],
        _ => &[],
    }
}

fn similar_brands(brand: &str) -> &'static [&'static str] {
    match brand {
        "Nike" => &["Adidas", "Puma", "Reebok"],
        "Apple" => &["Samsung", "Huawei", "Xiaomi"],
        "Zara" => &["H&M", "Mango", "Pull & Bear"],
        _ => &[],
    }
}

fn dedup_capped(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
    for value in values {
        if !out.contains(&value) {
            out.push(value);
            if out.len() == MAX_SUGGESTIONS {
                break;
            }
        }
    }
    out
}
