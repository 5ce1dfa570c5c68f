//! Level engine — resolves lifetime EXP into a tier with progress metrics.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::tiers::{LevelUpReward, Tier, TierTable};

/// Resolved tier position for a customer's lifetime EXP total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelProgress {
    pub current: Tier,
    /// Zero-based position of the current tier in the table.
    pub rank: usize,
    /// None when the customer sits at the top tier.
    pub next: Option<Tier>,
    pub total_points: u64,
    /// Zero at the top tier.
    pub points_to_next: u64,
    /// In `[0, 100]`; pinned to 100 at the top tier.
    pub progress_percentage: f64,
    /// Rewards granted on reaching the current tier.
    pub level_up_rewards: Vec<LevelUpReward>,
}

/// Stateless level resolution over an injected tier table.
pub struct LevelEngine {
    table: TierTable,
}

impl LevelEngine {
    pub fn new(table: TierTable) -> Self {
        info!(
            tiers = table.len(),
            top = table.tiers().last().map(|t| t.id.as_str()),
            "Level engine initialized"
        );
        Self { table }
    }

    /// Resolve a lifetime EXP total into tier + progress. Total over all
    /// inputs; negatives clamp to zero.
    pub fn resolve(&self, total_points: i64) -> LevelProgress {
        let points = total_points.max(0) as u64;

        // Highest tier whose lower bound is covered. The table invariants
        // guarantee the first tier starts at zero, so a match always exists.
        let rank = self
            .table
            .tiers()
            .iter()
            .rposition(|t| t.min_points <= points)
            .unwrap_or(0);
        let current = self.table.tiers()[rank].clone();
        let next = self.table.get(rank + 1).cloned();

        let (points_to_next, progress_percentage) = match &next {
            Some(next_tier) => {
                let span = (next_tier.min_points - current.min_points) as f64;
                let into = (points - current.min_points) as f64;
                (
                    next_tier.min_points - points,
                    (into * 100.0 / span).clamp(0.0, 100.0),
                )
            }
            None => (0, 100.0),
        };

        debug!(
            points = points,
            tier = %current.id,
            progress = progress_percentage,
            "Level resolved"
        );

        LevelProgress {
            level_up_rewards: current.level_up_rewards.clone(),
            current,
            rank,
            next,
            total_points: points,
            points_to_next,
            progress_percentage,
        }
    }

    pub fn table(&self) -> &TierTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> LevelEngine {
        LevelEngine::new(TierTable::standard())
    }

    #[test]
    fn test_zero_points_is_first_tier() {
        let progress = engine().resolve(0);
        assert_eq!(progress.current.id, "bronze");
        assert_eq!(progress.rank, 0);
        assert_eq!(progress.points_to_next, 1_500);
        assert_eq!(progress.progress_percentage, 0.0);
    }

    #[test]
    fn test_negative_points_clamp_to_zero() {
        let progress = engine().resolve(-500);
        assert_eq!(progress.total_points, 0);
        assert_eq!(progress.current.id, "bronze");
    }

    #[test]
    fn test_boundary_lands_in_upper_tier() {
        // min_points is inclusive: exactly 1500 is Iron, not Bronze.
        let progress = engine().resolve(1_500);
        assert_eq!(progress.current.id, "iron");
        assert_eq!(progress.progress_percentage, 0.0);
        assert_eq!(progress.points_to_next, 3_000);
    }

    #[test]
    fn test_midway_progress() {
        // Iron spans 1500..4500; 3000 is exactly halfway.
        let progress = engine().resolve(3_000);
        assert_eq!(progress.current.id, "iron");
        assert!((progress.progress_percentage - 50.0).abs() < 1e-9);
        assert_eq!(progress.points_to_next, 1_500);
    }

    #[test]
    fn test_top_tier_has_no_next() {
        let progress = engine().resolve(1_000_000);
        assert_eq!(progress.current.id, "diamond");
        assert!(progress.next.is_none());
        assert_eq!(progress.points_to_next, 0);
        assert_eq!(progress.progress_percentage, 100.0);
    }

    #[test]
    fn test_progress_bounded_and_100_only_at_top() {
        let engine = engine();
        for points in [0i64, 1, 1_499, 1_500, 4_499, 10_500, 22_499, 22_500, 90_000] {
            let progress = engine.resolve(points);
            assert!((0.0..=100.0).contains(&progress.progress_percentage));
            assert_eq!(
                progress.progress_percentage == 100.0,
                progress.next.is_none(),
                "points={points}"
            );
        }
    }

    #[test]
    fn test_resolution_is_monotonic() {
        let engine = engine();
        let mut last_rank = 0;
        for points in (0..30_000).step_by(137) {
            let rank = engine.resolve(points).rank;
            assert!(rank >= last_rank, "rank regressed at {points}");
            last_rank = rank;
        }
    }

    #[test]
    fn test_rewards_match_current_tier() {
        let progress = engine().resolve(5_000);
        assert_eq!(progress.current.id, "gold");
        assert_eq!(
            progress.level_up_rewards.len(),
            progress.current.level_up_rewards.len()
        );
    }

    #[test]
    fn test_idempotent_resolution() {
        let engine = engine();
        let a = engine.resolve(7_777);
        let b = engine.resolve(7_777);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
