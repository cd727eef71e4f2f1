//! Sales-volume scenarios
//!
//! For each quantity `q`:
//!
//! ```text
//! total_profit                   = contribution_margin_per_unit * q
//! percent_of_fixed_costs_covered = clamp(total_profit / total_fixed_costs * 100, 0, 100)
//! ```
//!
//! With no fixed costs there is nothing to cover and coverage is 100%.
//! Scenarios report raw coverage; classifying it is left to the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{PricingError, PricingResult};
use crate::core::validation::{require_finite, require_non_negative};

/// Quantities projected when the caller has no preference
pub const DEFAULT_SCENARIO_QUANTITIES: [u64; 4] = [5, 10, 20, 50];

/// Profit and fixed-cost coverage at one sales volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub quantity: u64,
    pub total_profit: f64,
    pub percent_of_fixed_costs_covered: f64,
}

/// Project profit and coverage for each quantity, in input order
///
/// # Errors
/// - `NonPositiveInput` if the margin is not finite
/// - `NonPositiveInput` if fixed costs are negative or not finite
/// - `NonPositiveInput` for a zero quantity
/// - `NonPositiveInput` if a quantity drives total profit past the `f64` range
///
/// # Example
/// ```
/// use pricing_engine_core_rs::projection::{project, DEFAULT_SCENARIO_QUANTITIES};
///
/// let scenarios = project(30.0, 450.0, &DEFAULT_SCENARIO_QUANTITIES).unwrap();
/// assert_eq!(scenarios[0].total_profit, 150.0);
/// assert!((scenarios[1].percent_of_fixed_costs_covered - 66.666_666).abs() < 1e-3);
/// assert_eq!(scenarios[3].percent_of_fixed_costs_covered, 100.0);
/// ```
pub fn project(
    contribution_margin_per_unit: f64,
    total_fixed_costs: f64,
    quantities: &[u64],
) -> PricingResult<Vec<ScenarioProjection>> {
    let margin = require_finite("contribution_margin_per_unit", contribution_margin_per_unit)?;
    let fixed = require_non_negative("total_fixed_costs", total_fixed_costs)?;

    let projections = quantities
        .iter()
        .map(|&quantity| {
            if quantity == 0 {
                return Err(PricingError::NonPositiveInput {
                    field: "quantity",
                    value: 0.0,
                });
            }

            let total_profit = require_finite("total_profit", margin * quantity as f64)?;
            let percent_of_fixed_costs_covered = if fixed > 0.0 {
                (total_profit / fixed * 100.0).clamp(0.0, 100.0)
            } else {
                100.0
            };

            Ok(ScenarioProjection {
                quantity,
                total_profit,
                percent_of_fixed_costs_covered,
            })
        })
        .collect::<PricingResult<Vec<_>>>()?;

    debug!(margin, fixed, count = projections.len(), "projected scenarios");
    Ok(projections)
}
