//! Pricing Engine Core - Rust Engine
//!
//! Deterministic unit economics for small-business pricing: per-unit cost
//! allocation, margin and health tier for a candidate price, the inverse
//! price solver, and break-even / volume projections.
//!
//! # Architecture
//!
//! - **core**: Error taxonomy and input validation
//! - **models**: Domain types (CostConfiguration, MarginTier)
//! - **costs**: Per-unit cost allocation and formula documentation
//! - **pricing**: Forward evaluation and inverse price solving
//! - **projection**: Break-even and sales-volume scenarios
//! - **report**: One-call composition for a full pricing screen
//!
//! # Critical Invariants
//!
//! 1. Every function is pure: same inputs, bit-identical outputs
//! 2. Infeasibility is a value; only malformed inputs are errors
//! 3. No NaN or infinity ever reaches a caller

// Module declarations
pub mod core;
pub mod costs;
pub mod models;
pub mod pricing;
pub mod projection;
pub mod report;

// Re-exports for convenience
pub use crate::core::{PricingError, PricingResult};
pub use costs::{allocate, UnitCostBreakdown};
pub use models::{
    classify, CostConfiguration, FixedCost, MarginTier, VariableCost, VariableCostKind,
};
pub use pricing::{evaluate, solve_for_margin, solve_for_markup, PriceSolution, UnitEconomics};
pub use projection::{
    break_even, project, BreakEvenResult, ScenarioProjection, DEFAULT_SCENARIO_QUANTITIES,
};
pub use report::{analyze, tier_price_ladder, PricingReport, TierPrice};
