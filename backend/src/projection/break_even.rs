//! Break-even calculation
//!
//! ```text
//! units_needed   = ceil(total_fixed_costs / contribution_margin_per_unit)
//! revenue_needed = units_needed * price
//! ```
//!
//! Partial units do not exist, so the count rounds up to the next whole unit.
//! With a margin of zero or below, no sales volume ever covers the fixed
//! costs and the result is reported as infeasible with no numbers at all.
//! The same holds when the unit count or the revenue falls outside the range
//! of `u64` or `f64`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::PricingResult;
use crate::core::validation::{require_finite, require_non_negative};

/// Relative distance from an integer within which a unit ratio is treated as
/// that integer, so `1.1 / 0.1 = 11.000000000000002` needs 11 units, not 12.
const WHOLE_UNIT_TOLERANCE: f64 = 1e-9;

/// Break-even outcome
///
/// `units_needed` and `revenue_needed` are `Some` exactly when `feasible`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    pub contribution_margin_per_unit: f64,
    pub total_fixed_costs: f64,
    pub feasible: bool,
    pub units_needed: Option<u64>,
    pub revenue_needed: Option<f64>,
}

impl BreakEvenResult {
    fn infeasible(contribution_margin_per_unit: f64, total_fixed_costs: f64) -> Self {
        Self {
            contribution_margin_per_unit,
            total_fixed_costs,
            feasible: false,
            units_needed: None,
            revenue_needed: None,
        }
    }
}

/// Round a unit ratio up to whole units
///
/// `None` when the ratio does not fit in a `u64`.
fn whole_units(ratio: f64) -> Option<u64> {
    if !ratio.is_finite() || ratio >= u64::MAX as f64 {
        return None;
    }

    let nearest = ratio.round();
    let units = if (ratio - nearest).abs() <= WHOLE_UNIT_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };

    Some(units as u64)
}

/// Compute the sales volume and revenue needed to cover fixed costs
///
/// `price` is the sale price the margin was computed at; the margin alone
/// does not determine it.
///
/// # Errors
/// `NonPositiveInput` if the margin is not finite, or fixed costs or price
/// are negative or not finite.
///
/// # Example
/// ```
/// use pricing_engine_core_rs::projection::break_even;
///
/// let result = break_even(34.8, 450.0, 80.0).unwrap();
/// assert!(result.feasible);
/// assert_eq!(result.units_needed, Some(13));
/// assert_eq!(result.revenue_needed, Some(1040.0));
///
/// let loss = break_even(-2.0, 450.0, 30.0).unwrap();
/// assert!(!loss.feasible);
/// assert_eq!(loss.units_needed, None);
/// ```
pub fn break_even(
    contribution_margin_per_unit: f64,
    total_fixed_costs: f64,
    price: f64,
) -> PricingResult<BreakEvenResult> {
    let margin = require_finite("contribution_margin_per_unit", contribution_margin_per_unit)?;
    let fixed = require_non_negative("total_fixed_costs", total_fixed_costs)?;
    let price = require_non_negative("price", price)?;

    if margin <= 0.0 {
        debug!(margin, fixed, "break-even infeasible: non-positive margin");
        return Ok(BreakEvenResult::infeasible(margin, fixed));
    }

    let Some(units) = whole_units(fixed / margin) else {
        debug!(margin, fixed, "break-even infeasible: unit count out of range");
        return Ok(BreakEvenResult::infeasible(margin, fixed));
    };

    let revenue = units as f64 * price;
    if !revenue.is_finite() {
        debug!(margin, fixed, units, price, "break-even infeasible: revenue out of range");
        return Ok(BreakEvenResult::infeasible(margin, fixed));
    }
    debug!(margin, fixed, units, revenue, "break-even computed");

    Ok(BreakEvenResult {
        contribution_margin_per_unit: margin,
        total_fixed_costs: fixed,
        feasible: true,
        units_needed: Some(units),
        revenue_needed: Some(revenue),
    })
}
