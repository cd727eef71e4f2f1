//! Unit economics (forward evaluation) tests
//!
//! Reference scenario used throughout:
//! - product cost 35, packaging 3 (flat)
//! - card fee 3% + tax 6% (percentage)
//! - no monthly costs allocated to the unit
//!
//! total_unit_cost = 38, variable_percent_sum = 9

use pricing_engine_core_rs::{
    allocate, evaluate, CostConfiguration, MarginTier, PricingError, UnitCostBreakdown,
    VariableCostKind,
};

/// Helper to create the reference breakdown
fn reference_breakdown() -> UnitCostBreakdown {
    let config = CostConfiguration::new(30)
        .with_variable_cost("packaging", 3.0, VariableCostKind::PerUnitFlat)
        .with_variable_cost("card fee", 3.0, VariableCostKind::Percentage)
        .with_variable_cost("tax", 6.0, VariableCostKind::Percentage);
    allocate(&config, 35.0).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_reference_price_is_healthy() {
    let breakdown = reference_breakdown();
    assert_eq!(breakdown.total_unit_cost, 38.0);
    assert_eq!(breakdown.variable_percent_sum, 9.0);

    let economics = evaluate(&breakdown, 80.0).unwrap();

    // 80 - 38 - 80 * 0.09 = 34.8
    assert_close(economics.contribution_margin, 34.8);
    // 34.8 / 80 = 43.5%
    assert_close(economics.margin_percent, 43.5);
    assert_eq!(economics.tier, MarginTier::Healthy);
    assert_eq!(economics.price, 80.0);
    assert_eq!(economics.breakdown, breakdown);
}

#[test]
fn test_markup_percent_on_reference_price() {
    let economics = evaluate(&reference_breakdown(), 80.0).unwrap();
    assert_close(economics.markup_percent().unwrap(), 34.8 / 38.0 * 100.0);
}

#[test]
fn test_loss_making_price_is_critical() {
    let economics = evaluate(&reference_breakdown(), 30.0).unwrap();

    // 30 - 38 - 2.7 = -10.7
    assert_close(economics.contribution_margin, -10.7);
    assert!(economics.margin_percent < 0.0);
    assert_eq!(economics.tier, MarginTier::Critical);
}

#[test]
fn test_high_price_is_premium() {
    let economics = evaluate(&reference_breakdown(), 200.0).unwrap();

    // 200 - 38 - 18 = 144 -> 72%
    assert_close(economics.margin_percent, 72.0);
    assert_eq!(economics.tier, MarginTier::Premium);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_zero_price_is_critical_without_nan() {
    let economics = evaluate(&reference_breakdown(), 0.0).unwrap();

    assert_eq!(economics.margin_percent, 0.0);
    assert_eq!(economics.contribution_margin, -38.0);
    assert_eq!(economics.tier, MarginTier::Critical);
    assert!(economics.margin_percent.is_finite());
    assert!(economics.contribution_margin.is_finite());
}

#[test]
fn test_negative_price_is_rejected() {
    let err = evaluate(&reference_breakdown(), -5.0).unwrap_err();
    assert_eq!(
        err,
        PricingError::NonPositiveInput {
            field: "price",
            value: -5.0
        }
    );
}

#[test]
fn test_non_finite_price_is_rejected() {
    assert!(matches!(
        evaluate(&reference_breakdown(), f64::NAN),
        Err(PricingError::NonPositiveInput { field: "price", .. })
    ));
    assert!(matches!(
        evaluate(&reference_breakdown(), f64::INFINITY),
        Err(PricingError::NonPositiveInput { field: "price", .. })
    ));
}

#[test]
fn test_fee_stack_over_100_gives_negative_margin() {
    let breakdown = UnitCostBreakdown::from_parts(10.0, 0.0, 0.0, 0.0, 120.0).unwrap();
    let economics = evaluate(&breakdown, 50.0).unwrap();

    // 50 - 10 - 60 = -20
    assert_close(economics.contribution_margin, -20.0);
    assert_eq!(economics.tier, MarginTier::Critical);
}

#[test]
fn test_evaluation_is_bit_identical_across_calls() {
    let breakdown = reference_breakdown();
    let a = evaluate(&breakdown, 73.37).unwrap();
    let b = evaluate(&breakdown, 73.37).unwrap();

    assert_eq!(a.contribution_margin.to_bits(), b.contribution_margin.to_bits());
    assert_eq!(a.margin_percent.to_bits(), b.margin_percent.to_bits());
    assert_eq!(a, b);
}
