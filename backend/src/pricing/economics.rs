//! Unit economics
//!
//! ```text
//! contribution_margin = price - total_unit_cost - price * variable_percent_sum / 100
//! margin_percent      = contribution_margin / price * 100      (price > 0)
//!                     = 0                                       (price == 0)
//! ```
//!
//! A zero price is a normal transient state (the merchant has not finished
//! typing), so it evaluates to a poor result instead of an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::PricingResult;
use crate::core::validation::{require_finite, require_non_negative};
use crate::costs::allocation::UnitCostBreakdown;
use crate::models::tier::{classify, MarginTier};

/// Result of evaluating a candidate price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitEconomics {
    pub breakdown: UnitCostBreakdown,
    pub price: f64,

    /// Revenue left per unit after unit cost and percentage costs
    pub contribution_margin: f64,

    /// Contribution margin as a percentage of price
    pub margin_percent: f64,

    pub tier: MarginTier,
}

impl UnitEconomics {
    /// Contribution margin as a percentage of total unit cost
    ///
    /// `None` when the unit cost is zero.
    pub fn markup_percent(&self) -> Option<f64> {
        let cost = self.breakdown.total_unit_cost;
        if cost > 0.0 {
            Some(self.contribution_margin / cost * 100.0)
        } else {
            None
        }
    }

    /// Contribution margin with the fixed-cost allocation added back
    ///
    /// This is what each sale contributes toward the monthly fixed costs, and
    /// the figure break-even and scenario projections are computed from.
    ///
    /// Shipping stays deducted. It is budgeted monthly but spent per parcel,
    /// so it counts as a per-unit cost at the assumed sales volume and is not
    /// part of the fixed total that break-even has to cover.
    pub fn contribution_before_fixed(&self) -> f64 {
        self.contribution_margin + self.breakdown.fixed_allocation
    }

    /// Amount of the price taken by percentage costs
    pub fn percentage_costs(&self) -> f64 {
        self.price * self.breakdown.variable_percent_sum / 100.0
    }
}

/// Evaluate a candidate sale price against a cost breakdown
///
/// # Errors
/// - `NonPositiveInput` if `price` is negative or not finite
/// - `NonPositiveInput` if the price is so large that the percentage costs
///   leave the `f64` range
///
/// # Example
/// ```
/// use pricing_engine_core_rs::costs::UnitCostBreakdown;
/// use pricing_engine_core_rs::models::MarginTier;
/// use pricing_engine_core_rs::pricing::evaluate;
///
/// let breakdown = UnitCostBreakdown::from_parts(35.0, 0.0, 3.0, 0.0, 9.0).unwrap();
/// let economics = evaluate(&breakdown, 80.0).unwrap();
///
/// assert!((economics.contribution_margin - 34.8).abs() < 1e-9);
/// assert!((economics.margin_percent - 43.5).abs() < 1e-9);
/// assert_eq!(economics.tier, MarginTier::Healthy);
/// ```
pub fn evaluate(breakdown: &UnitCostBreakdown, price: f64) -> PricingResult<UnitEconomics> {
    let price = require_non_negative("price", price)?;

    let (contribution_margin, margin_percent) = if price > 0.0 {
        let margin = price
            - breakdown.total_unit_cost
            - price * (breakdown.variable_percent_sum / 100.0);
        let margin = require_finite("contribution_margin", margin)?;
        (margin, require_finite("margin_percent", margin / price * 100.0)?)
    } else {
        (-breakdown.total_unit_cost, 0.0)
    };

    let tier = classify(margin_percent);

    debug!(price, contribution_margin, margin_percent, %tier, "evaluated price");

    Ok(UnitEconomics {
        breakdown: *breakdown,
        price,
        contribution_margin,
        margin_percent,
        tier,
    })
}
