//! Automated price estimates for new tasks.
//!
//! The estimate is a fixed lookup, not a model: a base price per category,
//! scaled by an urgency multiplier, then split 70/30 into labour and
//! materials. Identical inputs always give identical estimates.

mod engine;

pub use engine::{
    ESTIMATE_CONFIDENCE, ESTIMATE_FACTORS, FALLBACK_BASE_PRICE, PriceEstimate, base_price,
    estimate, estimate_from_labels, urgency_multiplier_percent,
};

#[cfg(test)]
mod tests;
