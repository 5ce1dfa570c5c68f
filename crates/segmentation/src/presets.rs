//! Preset segment definitions — the standard RFM cohorts and
//! category-affinity segments the storefront ships with.

use crate::criteria::SegmentCriteria;
use crate::registry::SegmentDefinition;

/// The five standard RFM-based cohorts.
pub fn rfm_presets() -> Vec<SegmentDefinition> {
    vec![
        SegmentDefinition::new(
            "Champions",
            SegmentCriteria {
                rfm_score: Some("555".to_string()),
                min_orders: Some(10),
                min_spent: Some(2_000.0),
                ..Default::default()
            },
        )
        .with_description("Most valuable customers — frequent, high-spend shoppers"),
        SegmentDefinition::new(
            "Loyal Customers",
            SegmentCriteria {
                rfm_score: Some("444".to_string()),
                min_orders: Some(5),
                min_spent: Some(1_000.0),
                ..Default::default()
            },
        )
        .with_description("Regular shoppers with steady order history"),
        SegmentDefinition::new(
            "Potential Loyalists",
            SegmentCriteria {
                rfm_score: Some("333".to_string()),
                min_orders: Some(3),
                min_spent: Some(500.0),
                ..Default::default()
            },
        )
        .with_description("Customers settling into a regular purchase rhythm"),
        SegmentDefinition::new(
            "New Customers",
            SegmentCriteria {
                rfm_score: Some("222".to_string()),
                max_orders: Some(2),
                max_spent: Some(500.0),
                ..Default::default()
            },
        )
        .with_description("Customers with little purchase history yet"),
        SegmentDefinition::new(
            "At Risk",
            SegmentCriteria {
                last_order_within_days: Some(90),
                min_orders: Some(1),
                ..Default::default()
            },
        )
        .with_description("Previously active customers to re-engage"),
    ]
}

/// Category-affinity segments keyed off favorite categories.
pub fn category_presets() -> Vec<SegmentDefinition> {
    vec![
        SegmentDefinition::new(
            "Electronics Shoppers",
            SegmentCriteria {
                categories: Some(vec![
                    "Electronics".to_string(),
                    "Computers".to_string(),
                    "Phones".to_string(),
                ]),
                ..Default::default()
            },
        )
        .with_description("Customers who favor electronics"),
        SegmentDefinition::new(
            "Fashion Shoppers",
            SegmentCriteria {
                categories: Some(vec![
                    "Clothing".to_string(),
                    "Shoes".to_string(),
                    "Accessories".to_string(),
                ]),
                ..Default::default()
            },
        )
        .with_description("Customers who favor fashion"),
        SegmentDefinition::new(
            "Home & Living Shoppers",
            SegmentCriteria {
                categories: Some(vec![
                    "Home & Living".to_string(),
                    "Furniture".to_string(),
                    "Decor".to_string(),
                ]),
                ..Default::default()
            },
        )
        .with_description("Customers who favor home and living products"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfm_presets_cover_standard_cohorts() {
        let presets = rfm_presets();
        assert_eq!(presets.len(), 5);
        assert!(presets.iter().all(|p| p.is_active));
        assert!(presets.iter().all(|p| !p.criteria.is_unconstrained()));
    }

    #[test]
    fn test_category_presets_list_categories() {
        let presets = category_presets();
        assert_eq!(presets.len(), 3);
        for preset in &presets {
            let categories = preset.criteria.categories.as_ref().unwrap();
            assert_eq!(categories.len(), 3);
        }
    }
}
