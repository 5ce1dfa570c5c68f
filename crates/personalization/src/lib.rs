//! Personalization engine — candidate offer synthesis and ranking, plus
//! greeting / suggestion / next-best-action helpers.

pub mod content;
pub mod offers;

pub use offers::{
    BirthdateLookup, BirthdateSource, OfferDiscount, OfferDiscountKind, OfferGenerator,
    OfferType, PersonalizedOffer,
};
