//! Campaign definitions and the eligibility validator.

pub mod types;
pub mod validator;

pub use types::{
    Campaign, CampaignKind, CampaignStatus, CartItem, DiscountType,
};
pub use validator::{validate, RejectionReason, ValidationOutcome};
