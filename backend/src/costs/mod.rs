//! Cost allocation and formula documentation
//!
//! This module provides:
//! - Per-unit cost allocation (`allocation`)
//! - Self-documenting schema for every engine formula (`schema_docs`)
//!
//! # Single Source of Truth
//!
//! Formula documentation lives in `schema_docs.rs` and is exported for the
//! CLI command `pricing formulas`.

pub mod allocation;
pub mod schema_docs;

// Re-exports
pub use allocation::{allocate, UnitCostBreakdown};
pub use schema_docs::{
    formula_docs, formula_schema, FormulaCategory, FormulaElement, FormulaExample, FormulaSchemaDoc,
};
