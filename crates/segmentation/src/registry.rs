//! Segment registry — named criteria records evaluated per customer.
//!
//! Read-mostly and safe for concurrent evaluation across customers; each
//! evaluation is a pure pass over the registered definitions.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use storefront_core::CustomerAnalytics;
use tracing::info;
use uuid::Uuid;

use crate::criteria::{matches, SegmentCriteria};
use crate::rfm::RfmAnalysis;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentDefinition {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub criteria: SegmentCriteria,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SegmentDefinition {
    pub fn new(name: impl Into<String>, criteria: SegmentCriteria) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            criteria,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

pub struct SegmentRegistry {
    segments: DashMap<Uuid, SegmentDefinition>,
}

impl SegmentRegistry {
    pub fn new() -> Self {
        Self {
            segments: DashMap::new(),
        }
    }

    /// Build a registry pre-loaded with the standard preset definitions.
    pub fn with_presets() -> Self {
        let registry = Self::new();
        for definition in crate::presets::rfm_presets() {
            registry.register(definition);
        }
        for definition in crate::presets::category_presets() {
            registry.register(definition);
        }
        info!(segments = registry.len(), "Segment registry seeded with presets");
        registry
    }

    pub fn register(&self, definition: SegmentDefinition) {
        self.segments.insert(definition.id, definition);
    }

    /// Ids of every active segment this customer belongs to.
    pub fn evaluate(
        &self,
        analytics: &CustomerAnalytics,
        rfm: &RfmAnalysis,
        now: DateTime<Utc>,
    ) -> Vec<Uuid> {
        self.segments
            .iter()
            .filter(|entry| {
                let segment = entry.value();
                segment.is_active && matches(analytics, rfm, &segment.criteria, now)
            })
            .map(|entry| entry.value().id)
            .collect()
    }

    pub fn get(&self, id: &Uuid) -> Option<SegmentDefinition> {
        self.segments.get(id).map(|s| s.clone())
    }

    pub fn list(&self) -> Vec<SegmentDefinition> {
        self.segments.iter().map(|s| s.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Default for SegmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
