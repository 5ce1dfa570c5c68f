//! Loyalty progression — tier table, level resolution, and EXP accrual.

pub mod accrual;
pub mod engine;
pub mod tiers;

pub use accrual::{compute_award, ExpSource, ExpTransaction};
pub use engine::{LevelEngine, LevelProgress};
pub use tiers::{LevelUpReward, RewardKind, Tier, TierTable};
