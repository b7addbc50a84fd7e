//! Price estimate rules.

use serde::Serialize;

use crate::marketplace::domain::{
    AiClassification, Category, CostBreakdown, TaskEstimate, Urgency,
};

/// Confidence reported with every estimate.
pub const ESTIMATE_CONFIDENCE: u8 = 95;

/// Factors reported with every estimate, in display order.
pub const ESTIMATE_FACTORS: [&str; 3] = ["Task complexity", "Local market rates", "Urgency level"];

/// Base price used when the category is not recognised.
pub const FALLBACK_BASE_PRICE: u32 = 100;

const LABOR_SHARE_PERCENT: u32 = 70;
const MATERIALS_SHARE_PERCENT: u32 = 30;

/// Output of the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceEstimate {
    price: u32,
    confidence: u8,
    breakdown: CostBreakdown,
    factors: [&'static str; 3],
}

impl PriceEstimate {
    /// Returns the estimated price in whole currency units.
    #[must_use]
    pub const fn price(&self) -> u32 {
        self.price
    }

    /// Returns the confidence score.
    #[must_use]
    pub const fn confidence(&self) -> u8 {
        self.confidence
    }

    /// Returns the labour and materials split.
    #[must_use]
    pub const fn breakdown(&self) -> CostBreakdown {
        self.breakdown
    }

    /// Returns the factors considered.
    #[must_use]
    pub const fn factors(&self) -> &[&'static str] {
        &self.factors
    }

    /// Converts the estimate into the fields stored on a task.
    #[must_use]
    pub const fn to_task_estimate(&self) -> TaskEstimate {
        TaskEstimate::new(
            self.price,
            AiClassification {
                confidence: self.confidence,
                breakdown: self.breakdown,
            },
        )
    }
}

/// Returns the base price for `category`, or [`FALLBACK_BASE_PRICE`] when
/// the category is unknown.
#[must_use]
pub const fn base_price(category: Option<Category>) -> u32 {
    match category {
        Some(Category::Plumbing) => 150,
        Some(Category::Electrical) => 200,
        Some(Category::Carpentry) => 120,
        Some(Category::Painting) => 100,
        Some(Category::Appliance) => 180,
        Some(Category::General) => 90,
        None => FALLBACK_BASE_PRICE,
    }
}

/// Returns the urgency multiplier as a whole percentage.
#[must_use]
pub const fn urgency_multiplier_percent(urgency: Urgency) -> u32 {
    match urgency {
        Urgency::Immediate => 150,
        Urgency::Today => 120,
        Urgency::ThisWeek => 100,
        Urgency::Flexible => 90,
    }
}

/// `value * percent / 100`, rounded half up.
const fn percent_of(value: u32, percent: u32) -> u32 {
    value.saturating_mul(percent).saturating_add(50).div_euclid(100)
}

const fn estimate_with_base(base: u32, urgency: Urgency) -> PriceEstimate {
    let price = percent_of(base, urgency_multiplier_percent(urgency));
    PriceEstimate {
        price,
        confidence: ESTIMATE_CONFIDENCE,
        breakdown: CostBreakdown {
            labor: percent_of(price, LABOR_SHARE_PERCENT),
            materials: percent_of(price, MATERIALS_SHARE_PERCENT),
        },
        factors: ESTIMATE_FACTORS,
    }
}

/// Estimates the price of a task in `category` needed with `urgency`.
#[must_use]
pub const fn estimate(category: Category, urgency: Urgency) -> PriceEstimate {
    estimate_with_base(base_price(Some(category)), urgency)
}

/// Estimates from raw labels, falling back instead of failing.
///
/// An unknown category uses [`FALLBACK_BASE_PRICE`]; an unknown urgency is
/// treated as [`Urgency::Flexible`].
#[must_use]
pub fn estimate_from_labels(category: &str, urgency: &str) -> PriceEstimate {
    let parsed_category = Category::try_from(category).ok();
    let parsed_urgency = Urgency::try_from(urgency).unwrap_or_default();
    estimate_with_base(base_price(parsed_category), parsed_urgency)
}
