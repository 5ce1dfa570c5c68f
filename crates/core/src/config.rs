use serde::Deserialize;

use crate::error::EngineResult;

/// Root engine configuration. Loaded from environment variables with the
/// prefix `STOREFRONT__` and optional config files.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub accrual: AccrualConfig,
}

/// EXP accrual constants. Every award amount the calculator can hand out is
/// driven by these, so alternate reward economies are a config change.
#[derive(Debug, Clone, Deserialize)]
pub struct AccrualConfig {
    /// Flat EXP for any completed purchase, before the order-total bonus.
    #[serde(default = "default_purchase_base")]
    pub purchase_base: u64,
    /// Fraction of the order total converted into bonus EXP (floored).
    #[serde(default = "default_purchase_rate")]
    pub purchase_rate: f64,
    #[serde(default = "default_invitation")]
    pub invitation: u64,
    #[serde(default = "default_social_share")]
    pub social_share: u64,
    #[serde(default = "default_review")]
    pub review: u64,
    #[serde(default = "default_login")]
    pub login: u64,
}

fn default_purchase_base() -> u64 {
    50
}
fn default_purchase_rate() -> f64 {
    0.10
}
fn default_invitation() -> u64 {
    250
}
fn default_social_share() -> u64 {
    25
}
fn default_review() -> u64 {
    15
}
fn default_login() -> u64 {
    5
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            purchase_base: default_purchase_base(),
            purchase_rate: default_purchase_rate(),
            invitation: default_invitation(),
            social_share: default_social_share(),
            review: default_review(),
            login: default_login(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            accrual: AccrualConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn load() -> EngineResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("STOREFRONT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
