//! Forward and inverse price evaluation
//!
//! - **economics**: cost breakdown + price -> contribution margin, margin %, tier
//! - **solver**: cost breakdown + desired margin -> price
//!
//! The two directions agree: a price returned by the solver, fed back into
//! `evaluate`, reproduces the requested margin.

pub mod economics;
pub mod solver;

pub use economics::{evaluate, UnitEconomics};
pub use solver::{solve_for_margin, solve_for_markup, PriceSolution};
