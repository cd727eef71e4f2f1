//! Pricing report
//!
//! One-call composition for callers that render a whole pricing screen:
//!
//! 1. Allocate the configuration's costs to one unit
//! 2. Evaluate the candidate price (margin, tier)
//! 3. Break-even against the monthly fixed costs
//! 4. Scenario projections at the requested volumes
//! 5. Entry price of each tier
//!
//! Break-even and scenarios use the contribution margin *before* the fixed
//! allocation: fixed costs are recovered by volume there, so charging the
//! per-unit allocation as well would count them twice. Shipping is not part
//! of that fixed total: it is spent per parcel, so its per-unit share stays
//! in the margin.

pub mod ladder;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::PricingResult;
use crate::costs::allocation::allocate;
use crate::models::config::CostConfiguration;
use crate::pricing::economics::{evaluate, UnitEconomics};
use crate::projection::break_even::{break_even, BreakEvenResult};
use crate::projection::scenarios::{project, ScenarioProjection};

pub use ladder::{tier_price_ladder, TierPrice};

/// Everything a pricing screen shows for one product at one price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    /// Fingerprint of the configuration this report was computed against
    pub config_fingerprint: String,
    pub economics: UnitEconomics,
    pub break_even: BreakEvenResult,
    pub scenarios: Vec<ScenarioProjection>,
    pub ladder: Vec<TierPrice>,
}

/// Build a full report for a product cost and candidate price
///
/// # Errors
/// Any error from allocation, evaluation or projection (see `PricingError`).
///
/// # Example
/// ```
/// use pricing_engine_core_rs::models::{CostConfiguration, MarginTier, VariableCostKind};
/// use pricing_engine_core_rs::projection::DEFAULT_SCENARIO_QUANTITIES;
/// use pricing_engine_core_rs::report::analyze;
///
/// let config = CostConfiguration::new(30)
///     .with_fixed_cost("rent", 450.0)
///     .with_variable_cost("packaging", 3.0, VariableCostKind::PerUnitFlat)
///     .with_variable_cost("card fee", 3.0, VariableCostKind::Percentage)
///     .with_variable_cost("tax", 6.0, VariableCostKind::Percentage);
///
/// let report = analyze(&config, 35.0, 80.0, &DEFAULT_SCENARIO_QUANTITIES).unwrap();
/// assert_eq!(report.economics.tier, MarginTier::Tight);
/// assert_eq!(report.break_even.units_needed, Some(13));
/// ```
pub fn analyze(
    config: &CostConfiguration,
    product_cost: f64,
    price: f64,
    quantities: &[u64],
) -> PricingResult<PricingReport> {
    let config_fingerprint = config.fingerprint()?;
    let breakdown = allocate(config, product_cost)?;
    let economics = evaluate(&breakdown, price)?;

    let margin = economics.contribution_before_fixed();
    let fixed = config.total_fixed_costs();

    let break_even_result = break_even(margin, fixed, economics.price)?;
    let scenarios = project(margin, fixed, quantities)?;
    let ladder = tier_price_ladder(&breakdown)?;

    debug!(
        fingerprint = %config_fingerprint,
        tier = %economics.tier,
        feasible = break_even_result.feasible,
        "pricing report built"
    );

    Ok(PricingReport {
        config_fingerprint,
        economics,
        break_even: break_even_result,
        scenarios,
        ladder,
    })
}
