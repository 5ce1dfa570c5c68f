//! Tier table — the ordered, immutable loyalty bracket configuration.
//!
//! The table is an explicit value injected into [`crate::LevelEngine`], not a
//! process-wide static, so tests and alternate reward economies can supply
//! their own brackets. Construction validates the bracket invariants up
//! front; a malformed table never reaches per-call code.

use serde::{Deserialize, Serialize};
use storefront_core::{EngineError, EngineResult};

/// A single loyalty bracket covering `[min_points, max_points)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tier {
    pub id: String,
    pub display_name: String,
    pub min_points: u64,
    /// Exclusive upper bound; `None` marks the unbounded top tier.
    pub max_points: Option<u64>,
    /// Points multiplier applied to purchases made at this tier.
    pub multiplier: f64,
    pub benefits: Vec<String>,
    pub level_up_rewards: Vec<LevelUpReward>,
}

/// Reward granted on reaching a tier. Static content per tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelUpReward {
    pub kind: RewardKind,
    pub value: u32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Discount,
    Gift,
    Points,
    Badge,
}

/// Ordered, contiguous, non-overlapping tier sequence covering `[0, ∞)`.
///
/// Deserialization runs the same validation as [`TierTable::new`], so a
/// table loaded from config or the wire carries the same guarantees as one
/// built in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TierTableRepr")]
pub struct TierTable {
    tiers: Vec<Tier>,
}

#[derive(Deserialize)]
struct TierTableRepr {
    tiers: Vec<Tier>,
}

impl TryFrom<TierTableRepr> for TierTable {
    type Error = EngineError;

    fn try_from(repr: TierTableRepr) -> EngineResult<Self> {
        Self::new(repr.tiers)
    }
}

impl TierTable {
    /// Validate and build a tier table. Fails loudly on any bracket defect:
    /// empty table, first tier not starting at zero, gaps or overlaps
    /// between consecutive tiers, a bounded top tier, an empty bracket, or
    /// a multiplier below 1.0.
    pub fn new(tiers: Vec<Tier>) -> EngineResult<Self> {
        let Some(first) = tiers.first() else {
            return Err(EngineError::TierTable("tier table is empty".to_string()));
        };
        if first.min_points != 0 {
            return Err(EngineError::TierTable(format!(
                "first tier '{}' must start at 0, starts at {}",
                first.id, first.min_points
            )));
        }

        for window in tiers.windows(2) {
            let (cur, next) = (&window[0], &window[1]);
            match cur.max_points {
                Some(max) if max == next.min_points => {}
                Some(max) => {
                    return Err(EngineError::TierTable(format!(
                        "tier '{}' ends at {} but '{}' starts at {}",
                        cur.id, max, next.id, next.min_points
                    )));
                }
                None => {
                    return Err(EngineError::TierTable(format!(
                        "tier '{}' is unbounded but is not the last tier",
                        cur.id
                    )));
                }
            }
        }

        for tier in &tiers {
            if let Some(max) = tier.max_points {
                if max <= tier.min_points {
                    return Err(EngineError::TierTable(format!(
                        "tier '{}' has empty range [{}, {})",
                        tier.id, tier.min_points, max
                    )));
                }
            }
            if tier.multiplier < 1.0 {
                return Err(EngineError::TierTable(format!(
                    "tier '{}' multiplier {} is below 1.0",
                    tier.id, tier.multiplier
                )));
            }
        }

        let last = &tiers[tiers.len() - 1];
        if last.max_points.is_some() {
            return Err(EngineError::TierTable(format!(
                "top tier '{}' must be unbounded",
                last.id
            )));
        }

        Ok(Self { tiers })
    }

    /// The standard five-tier storefront program.
    pub fn standard() -> Self {
        Self {
            tiers: standard_tiers(),
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn get(&self, rank: usize) -> Option<&Tier> {
        self.tiers.get(rank)
    }

    pub fn by_id(&self, id: &str) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.id == id)
    }
}

fn discount(value: u32, description: &str) -> LevelUpReward {
    LevelUpReward {
        kind: RewardKind::Discount,
        value,
        description: description.to_string(),
    }
}

fn standard_tiers() -> Vec<Tier> {
    vec![
        Tier {
            id: "bronze".to_string(),
            display_name: "Bronze".to_string(),
            min_points: 0,
            max_points: Some(1_500),
            multiplier: 1.0,
            benefits: vec![
                "Base discounts".to_string(),
                "Free shipping".to_string(),
                "Member-only product access".to_string(),
            ],
            level_up_rewards: vec![discount(5, "5% discount coupon")],
        },
        Tier {
            id: "iron".to_string(),
            display_name: "Iron".to_string(),
            min_points: 1_500,
            max_points: Some(4_500),
            multiplier: 1.2,
            benefits: vec![
                "All Bronze benefits".to_string(),
                "5% extra discount".to_string(),
                "Priority support".to_string(),
                "Exclusive campaigns".to_string(),
            ],
            level_up_rewards: vec![
                discount(10, "10% discount coupon"),
                LevelUpReward {
                    kind: RewardKind::Points,
                    value: 1_000,
                    description: "1000 bonus points".to_string(),
                },
            ],
        },
        Tier {
            id: "gold".to_string(),
            display_name: "Gold".to_string(),
            min_points: 4_500,
            max_points: Some(10_500),
            multiplier: 1.5,
            benefits: vec![
                "All Iron benefits".to_string(),
                "10% extra discount".to_string(),
                "Gift wrapping".to_string(),
                "VIP customer service".to_string(),
                "Early access to sales".to_string(),
            ],
            level_up_rewards: vec![
                LevelUpReward {
                    kind: RewardKind::Gift,
                    value: 0,
                    description: "Gift box".to_string(),
                },
                discount(15, "15% discount coupon"),
            ],
        },
        Tier {
            id: "platinum".to_string(),
            display_name: "Platinum".to_string(),
            min_points: 10_500,
            max_points: Some(22_500),
            multiplier: 2.0,
            benefits: vec![
                "All Gold benefits".to_string(),
                "15% extra discount".to_string(),
                "Exclusive product collections".to_string(),
                "Personal shopping advisor".to_string(),
                "Free gift wrapping".to_string(),
            ],
            level_up_rewards: vec![
                LevelUpReward {
                    kind: RewardKind::Gift,
                    value: 0,
                    description: "Premium gift box".to_string(),
                },
                discount(20, "20% discount coupon"),
                LevelUpReward {
                    kind: RewardKind::Points,
                    value: 5_000,
                    description: "5000 bonus points".to_string(),
                },
            ],
        },
        Tier {
            id: "diamond".to_string(),
            display_name: "Diamond".to_string(),
            min_points: 22_500,
            max_points: None,
            multiplier: 3.0,
            benefits: vec![
                "All Platinum benefits".to_string(),
                "20% extra discount".to_string(),
                "Unlimited free shipping".to_string(),
                "Private event invitations".to_string(),
                "Personal style advisor".to_string(),
                "Limited-edition product access".to_string(),
            ],
            level_up_rewards: vec![
                LevelUpReward {
                    kind: RewardKind::Gift,
                    value: 0,
                    description: "Diamond gift box".to_string(),
                },
                discount(25, "25% discount coupon"),
                LevelUpReward {
                    kind: RewardKind::Badge,
                    value: 0,
                    description: "Diamond badge".to_string(),
                },
            ],
        },
    ]
}
