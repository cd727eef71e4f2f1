//! Cost allocation
//!
//! Turns a monthly cost configuration plus the assumed monthly sales volume
//! into the cost attributable to one unit.
//!
//! ```text
//! fixed_allocation    = sum(fixed_monthly_costs) / volume
//! shipping_allocation = shipping_monthly_cost / volume
//! total_unit_cost     = product_cost + fixed_allocation
//!                     + variable_flat_per_unit + shipping_allocation
//! ```
//!
//! Percentage variable costs are NOT part of `total_unit_cost`: they are
//! levied on the price, so they are carried separately in
//! `variable_percent_sum`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::PricingResult;
use crate::core::validation::{require_config_amount, require_finite, require_non_negative};
use crate::models::config::CostConfiguration;

/// Per-unit cost breakdown
///
/// Produced fresh per call; `total_unit_cost` always equals the sum of the
/// four per-unit terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCostBreakdown {
    /// Cost of producing or acquiring the unit
    pub product_cost: f64,

    /// Share of monthly fixed costs
    pub fixed_allocation: f64,

    /// Sum of `PerUnitFlat` variable costs
    pub variable_flat_per_unit: f64,

    /// Share of monthly shipping spend
    pub shipping_allocation: f64,

    /// Sum of the four terms above
    pub total_unit_cost: f64,

    /// Sum of `Percentage` variable cost rates (0-100 scale), applied to price
    pub variable_percent_sum: f64,
}

impl UnitCostBreakdown {
    /// Build a breakdown from already-known per-unit figures
    ///
    /// # Errors
    /// `NonPositiveInput` if any term is negative or not finite, or if the
    /// terms sum past the largest finite `f64`.
    ///
    /// # Example
    /// ```
    /// use pricing_engine_core_rs::costs::UnitCostBreakdown;
    ///
    /// let breakdown = UnitCostBreakdown::from_parts(35.0, 0.0, 3.0, 0.0, 9.0).unwrap();
    /// assert_eq!(breakdown.total_unit_cost, 38.0);
    /// ```
    pub fn from_parts(
        product_cost: f64,
        fixed_allocation: f64,
        variable_flat_per_unit: f64,
        shipping_allocation: f64,
        variable_percent_sum: f64,
    ) -> PricingResult<Self> {
        let product_cost = require_non_negative("product_cost", product_cost)?;
        let fixed_allocation = require_non_negative("fixed_allocation", fixed_allocation)?;
        let variable_flat_per_unit =
            require_non_negative("variable_flat_per_unit", variable_flat_per_unit)?;
        let shipping_allocation = require_non_negative("shipping_allocation", shipping_allocation)?;
        let variable_percent_sum = require_non_negative("variable_percent_sum", variable_percent_sum)?;
        let total_unit_cost = require_finite(
            "total_unit_cost",
            product_cost + fixed_allocation + variable_flat_per_unit + shipping_allocation,
        )?;

        Ok(Self {
            product_cost,
            fixed_allocation,
            variable_flat_per_unit,
            shipping_allocation,
            total_unit_cost,
            variable_percent_sum,
        })
    }

    /// Fraction of the price kept after percentage costs (`1 - v/100`)
    ///
    /// Zero or negative when the fee stack reaches 100%.
    pub fn retained_fraction(&self) -> f64 {
        1.0 - self.variable_percent_sum / 100.0
    }
}

/// Allocate a configuration's costs to a single unit
///
/// # Errors
/// - `NonPositiveInput` if `product_cost` is negative or not finite
/// - `InvalidConfiguration` if the configuration fails validation, or if its
///   cost lists sum past the largest finite `f64`
/// - `NonPositiveInput` if the per-unit terms sum past the largest finite `f64`
///
/// # Example
/// ```
/// use pricing_engine_core_rs::costs::allocate;
/// use pricing_engine_core_rs::models::{CostConfiguration, VariableCostKind};
///
/// let config = CostConfiguration::new(30)
///     .with_fixed_cost("rent", 450.0)
///     .with_variable_cost("packaging", 3.0, VariableCostKind::PerUnitFlat);
///
/// let breakdown = allocate(&config, 35.0).unwrap();
/// assert_eq!(breakdown.fixed_allocation, 15.0);
/// assert_eq!(breakdown.total_unit_cost, 53.0);
/// ```
pub fn allocate(config: &CostConfiguration, product_cost: f64) -> PricingResult<UnitCostBreakdown> {
    let product_cost = require_non_negative("product_cost", product_cost)?;
    config.validate()?;

    // Each entry is finite, but the sums can still overflow
    let total_fixed = require_config_amount("sum of fixed monthly costs", config.total_fixed_costs())?;
    let variable_flat_per_unit =
        require_config_amount("sum of per-unit flat costs", config.flat_variable_per_unit())?;
    let variable_percent_sum =
        require_config_amount("sum of percentage costs", config.variable_percent_sum())?;

    let volume = config.assumed_monthly_sales_volume as f64;
    let breakdown = UnitCostBreakdown::from_parts(
        product_cost,
        total_fixed / volume,
        variable_flat_per_unit,
        config.shipping_monthly_cost / volume,
        variable_percent_sum,
    )?;

    debug!(
        product_cost,
        fixed_allocation = breakdown.fixed_allocation,
        shipping_allocation = breakdown.shipping_allocation,
        total_unit_cost = breakdown.total_unit_cost,
        variable_percent_sum,
        "allocated unit cost"
    );

    Ok(breakdown)
}
