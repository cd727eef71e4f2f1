//! Domain models for the pricing engine

pub mod config;
pub mod tier;

// Re-exports
pub use config::{CostConfiguration, FixedCost, VariableCost, VariableCostKind};
pub use tier::{classify, MarginTier};
