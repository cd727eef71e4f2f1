//! Volume projections from a per-unit contribution margin
//!
//! - **break_even**: units and revenue needed to cover fixed costs
//! - **scenarios**: profit and fixed-cost coverage at given sales volumes

pub mod break_even;
pub mod scenarios;

pub use break_even::{break_even, BreakEvenResult};
pub use scenarios::{project, ScenarioProjection, DEFAULT_SCENARIO_QUANTITIES};
