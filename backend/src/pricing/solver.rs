//! Price solver
//!
//! Inverse of `evaluate`: find the price that yields a desired margin.
//!
//! Percentage costs are levied on the price, so they shrink the share of the
//! price that is left to cover unit cost and margin. With `C` the total unit
//! cost, `v` the percentage cost sum and `m` the desired margin on price:
//!
//! ```text
//! price = C / (1 - v/100 - m/100)
//! ```
//!
//! No positive price exists when `v >= 100` (fees consume the whole price)
//! or when `v + m >= 100` (the margin ceiling is `100 - v`).
//!
//! `solve_for_markup` targets a markup on cost instead:
//!
//! ```text
//! price = C * (1 + k/100) / (1 - v/100)
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{PricingError, PricingResult};
use crate::core::validation::require_finite;
use crate::costs::allocation::UnitCostBreakdown;

/// Outcome of solving for a price
///
/// Infeasibility is an expected business condition (a misconfigured fee
/// stack, an unreachable target) and is reported as a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PriceSolution {
    /// A positive, finite price reaching the target
    Solved { price: f64 },

    /// No positive price reaches the target
    Infeasible {
        /// Percentage cost sum of the breakdown
        variable_percent_sum: f64,
        /// Highest margin on price this fee stack allows (`100 - v`)
        max_margin_percent: f64,
    },
}

impl PriceSolution {
    pub fn price(&self) -> Option<f64> {
        match self {
            PriceSolution::Solved { price } => Some(*price),
            PriceSolution::Infeasible { .. } => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, PriceSolution::Solved { .. })
    }

    /// Convert to the price, treating infeasibility as an error
    ///
    /// # Errors
    /// `InfeasiblePrice` carrying the percentage cost sum.
    pub fn into_price(self) -> PricingResult<f64> {
        match self {
            PriceSolution::Solved { price } => Ok(price),
            PriceSolution::Infeasible {
                variable_percent_sum,
                ..
            } => Err(PricingError::InfeasiblePrice {
                variable_percent_sum,
            }),
        }
    }
}

fn infeasible(breakdown: &UnitCostBreakdown) -> PriceSolution {
    PriceSolution::Infeasible {
        variable_percent_sum: breakdown.variable_percent_sum,
        max_margin_percent: 100.0 - breakdown.variable_percent_sum,
    }
}

fn solved_or_infeasible(breakdown: &UnitCostBreakdown, price: f64) -> PriceSolution {
    if price.is_finite() && price >= 0.0 {
        PriceSolution::Solved { price }
    } else {
        infeasible(breakdown)
    }
}

/// Solve for the price whose margin on price equals `desired_margin_percent`
///
/// Infeasible when the fee stack reaches 100%, when the target is at or above
/// `100 - v`, or when the unit cost is zero (every positive price then yields
/// the same margin).
///
/// # Errors
/// `NonPositiveInput` if `desired_margin_percent` is not finite.
///
/// # Example
/// ```
/// use pricing_engine_core_rs::costs::UnitCostBreakdown;
/// use pricing_engine_core_rs::pricing::{evaluate, solve_for_margin};
///
/// let breakdown = UnitCostBreakdown::from_parts(35.0, 0.0, 3.0, 0.0, 9.0).unwrap();
/// let price = solve_for_margin(&breakdown, 43.5).unwrap().into_price().unwrap();
///
/// assert!((price - 80.0).abs() < 1e-9);
/// assert!((evaluate(&breakdown, price).unwrap().margin_percent - 43.5).abs() < 1e-9);
/// ```
pub fn solve_for_margin(
    breakdown: &UnitCostBreakdown,
    desired_margin_percent: f64,
) -> PricingResult<PriceSolution> {
    let desired = require_finite("desired_margin_percent", desired_margin_percent)?;

    let denominator = breakdown.retained_fraction() - desired / 100.0;
    let solution = if breakdown.retained_fraction() <= 0.0
        || denominator <= 0.0
        || breakdown.total_unit_cost <= 0.0
    {
        infeasible(breakdown)
    } else {
        solved_or_infeasible(breakdown, breakdown.total_unit_cost / denominator)
    };

    debug!(desired_margin_percent = desired, ?solution, "solved for margin");
    Ok(solution)
}

/// Solve for the price whose markup on total unit cost equals `desired_markup_percent`
///
/// The markup is grossed up by the share of the price kept after percentage
/// costs. Infeasible when the fee stack reaches 100% or the target markup is
/// below -100% (which would need a negative price).
///
/// # Errors
/// `NonPositiveInput` if `desired_markup_percent` is not finite.
pub fn solve_for_markup(
    breakdown: &UnitCostBreakdown,
    desired_markup_percent: f64,
) -> PricingResult<PriceSolution> {
    let desired = require_finite("desired_markup_percent", desired_markup_percent)?;

    let retained = breakdown.retained_fraction();
    let solution = if retained <= 0.0 {
        infeasible(breakdown)
    } else {
        solved_or_infeasible(
            breakdown,
            breakdown.total_unit_cost * (1.0 + desired / 100.0) / retained,
        )
    };

    debug!(desired_markup_percent = desired, ?solution, "solved for markup");
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_stack_at_100_is_infeasible() {
        let breakdown = UnitCostBreakdown::from_parts(10.0, 0.0, 0.0, 0.0, 100.0).unwrap();
        let solution = solve_for_margin(&breakdown, 10.0).unwrap();
        assert_eq!(
            solution,
            PriceSolution::Infeasible {
                variable_percent_sum: 100.0,
                max_margin_percent: 0.0
            }
        );
        assert_eq!(
            solution.into_price(),
            Err(PricingError::InfeasiblePrice {
                variable_percent_sum: 100.0
            })
        );
    }

    #[test]
    fn test_markup_uses_grossed_up_formula() {
        let breakdown = UnitCostBreakdown::from_parts(38.0, 0.0, 0.0, 0.0, 9.0).unwrap();
        let price = solve_for_markup(&breakdown, 50.0).unwrap().price().unwrap();
        assert!((price - 38.0 * 1.5 / 0.91).abs() < 1e-9);
    }

    #[test]
    fn test_markup_below_minus_100_is_infeasible() {
        let breakdown = UnitCostBreakdown::from_parts(38.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert!(!solve_for_markup(&breakdown, -150.0).unwrap().is_feasible());
    }
}
