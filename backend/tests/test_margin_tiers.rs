//! Margin tier classification tests
//!
//! Boundaries are half-open: each threshold belongs to the tier above it.

use pricing_engine_core_rs::{classify, MarginTier};

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_tier_boundaries() {
    assert_eq!(classify(19.99), MarginTier::Critical);
    assert_eq!(classify(20.0), MarginTier::Tight);
    assert_eq!(classify(34.99), MarginTier::Tight);
    assert_eq!(classify(35.0), MarginTier::Healthy);
    assert_eq!(classify(49.99), MarginTier::Healthy);
    assert_eq!(classify(50.0), MarginTier::Premium);
}

#[test]
fn test_losses_are_critical() {
    assert_eq!(classify(0.0), MarginTier::Critical);
    assert_eq!(classify(-0.01), MarginTier::Critical);
    assert_eq!(classify(-500.0), MarginTier::Critical);
    assert_eq!(classify(f64::NEG_INFINITY), MarginTier::Critical);
}

#[test]
fn test_extreme_markups_are_premium() {
    assert_eq!(classify(100.0), MarginTier::Premium);
    assert_eq!(classify(1_000.0), MarginTier::Premium);
    assert_eq!(classify(f64::INFINITY), MarginTier::Premium);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_tiers_are_ordered_worst_to_best() {
    assert!(MarginTier::Critical < MarginTier::Tight);
    assert!(MarginTier::Tight < MarginTier::Healthy);
    assert!(MarginTier::Healthy < MarginTier::Premium);
    assert_eq!(MarginTier::Premium.rank(), 3);
}

#[test]
fn test_rank_never_decreases_over_a_sweep() {
    let mut previous = classify(-100.0).rank();
    let mut margin = -100.0;
    while margin <= 200.0 {
        let rank = classify(margin).rank();
        assert!(rank >= previous, "rank dropped at {}", margin);
        previous = rank;
        margin += 0.25;
    }
}

#[test]
fn test_tier_labels_and_serialization() {
    assert_eq!(MarginTier::Healthy.to_string(), "healthy");
    assert_eq!(
        serde_json::to_string(&MarginTier::Premium).unwrap(),
        "\"Premium\""
    );
}
