//! Unit tests for the price estimate rules.

use super::{ESTIMATE_FACTORS, estimate, estimate_from_labels};
use crate::marketplace::domain::{Category, CostBreakdown, Urgency};
use rstest::rstest;

#[rstest]
#[case(Category::Plumbing, Urgency::Immediate, 225, 158, 68)]
#[case(Category::Plumbing, Urgency::Flexible, 135, 95, 41)]
#[case(Category::Electrical, Urgency::Today, 240, 168, 72)]
#[case(Category::Electrical, Urgency::ThisWeek, 200, 140, 60)]
#[case(Category::Carpentry, Urgency::Today, 144, 101, 43)]
#[case(Category::Painting, Urgency::Flexible, 90, 63, 27)]
#[case(Category::Appliance, Urgency::Immediate, 270, 189, 81)]
#[case(Category::General, Urgency::Flexible, 81, 57, 24)]
fn estimate_applies_base_price_and_urgency(
    #[case] category: Category,
    #[case] urgency: Urgency,
    #[case] price: u32,
    #[case] labor: u32,
    #[case] materials: u32,
) {
    let quote = estimate(category, urgency);

    assert_eq!(quote.price(), price);
    assert_eq!(quote.breakdown(), CostBreakdown { labor, materials });
}

#[test]
fn estimate_is_deterministic_with_fixed_confidence_and_factors() {
    for category in Category::ALL {
        for urgency in Urgency::ALL {
            let first = estimate(category, urgency);
            let second = estimate(category, urgency);

            assert_eq!(first, second);
            assert_eq!(first.confidence(), 95);
            assert_eq!(first.factors(), ESTIMATE_FACTORS.as_slice());
        }
    }
}

#[test]
fn breakdown_shares_are_rounded_independently() {
    // 94.5 and 40.5 both round up, so the shares sum to 136.
    let quote = estimate(Category::General, Urgency::Immediate);

    assert_eq!(quote.price(), 135);
    assert_eq!(quote.breakdown().labor, 95);
    assert_eq!(quote.breakdown().materials, 41);
}

#[rstest]
#[case("unknown", "flexible", 90)]
#[case("unknown", "immediate", 150)]
#[case("plumbing", "someday", 135)]
#[case("Electrical", "TODAY", 240)]
#[case("general", "thisWeek", 90)]
fn estimate_from_labels_falls_back_instead_of_failing(
    #[case] category: &str,
    #[case] urgency: &str,
    #[case] price: u32,
) {
    assert_eq!(estimate_from_labels(category, urgency).price(), price);
}

#[test]
fn task_estimate_carries_price_confidence_and_breakdown() {
    let quote = estimate(Category::Electrical, Urgency::Today);
    let stored = quote.to_task_estimate();

    assert_eq!(stored.estimated_price(), 240);
    assert_eq!(stored.ai_classification().confidence, 95);
    assert_eq!(stored.ai_classification().breakdown, quote.breakdown());
}
