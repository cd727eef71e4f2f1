//! Tier price ladder
//!
//! The lowest price at which each bounded tier (Tight, Healthy, Premium) is
//! reached for a given cost breakdown.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::PricingResult;
use crate::costs::allocation::UnitCostBreakdown;
use crate::models::tier::MarginTier;
use crate::pricing::economics::evaluate;
use crate::pricing::solver::solve_for_margin;

/// Margin-target step, in percentage points, used to clear a tier boundary
const BOUNDARY_STEP_PERCENT: f64 = 1e-9;

/// Steps tried before a tier is reported as unreachable
const MAX_BOUNDARY_STEPS: u32 = 16;

/// Entry price for one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierPrice {
    pub tier: MarginTier,
    pub min_margin_percent: f64,

    /// `None` when the tier is unreachable with this fee stack
    pub price: Option<f64>,
}

/// Lowest solved price that `evaluate` classifies into `tier` or better
///
/// The solver is exact up to floating-point rounding, and at a threshold that
/// rounding can land the evaluated margin just under the boundary. Each retry
/// re-solves for a target a little above the boundary, far larger than the
/// rounding error yet far below the gap to the next tier.
fn tier_entry_price(
    breakdown: &UnitCostBreakdown,
    tier: MarginTier,
    min_margin_percent: f64,
) -> PricingResult<Option<f64>> {
    for step in 0..MAX_BOUNDARY_STEPS {
        let target = min_margin_percent + f64::from(step) * BOUNDARY_STEP_PERCENT;
        let Some(price) = solve_for_margin(breakdown, target)?.price() else {
            return Ok(None);
        };
        if evaluate(breakdown, price)?.tier >= tier {
            return Ok(Some(price));
        }
    }

    debug!(%tier, min_margin_percent, "tier boundary not cleared");
    Ok(None)
}

/// Build the ladder for every tier with a lower bound, worst to best
///
/// # Example
/// ```
/// use pricing_engine_core_rs::costs::UnitCostBreakdown;
/// use pricing_engine_core_rs::models::MarginTier;
/// use pricing_engine_core_rs::report::tier_price_ladder;
///
/// let breakdown = UnitCostBreakdown::from_parts(38.0, 0.0, 0.0, 0.0, 0.0).unwrap();
/// let ladder = tier_price_ladder(&breakdown).unwrap();
///
/// assert_eq!(ladder[0].tier, MarginTier::Tight);
/// assert!((ladder[2].price.unwrap() - 76.0).abs() < 1e-9);
/// ```
pub fn tier_price_ladder(breakdown: &UnitCostBreakdown) -> PricingResult<Vec<TierPrice>> {
    let mut ladder = Vec::with_capacity(MarginTier::ALL.len() - 1);

    for tier in MarginTier::ALL {
        let Some(min_margin_percent) = tier.lower_bound() else {
            continue;
        };

        ladder.push(TierPrice {
            tier,
            min_margin_percent,
            price: tier_entry_price(breakdown, tier, min_margin_percent)?,
        });
    }

    Ok(ladder)
}
