//! Core building blocks shared by every engine component
//!
//! - **error**: the engine's error taxonomy
//! - **validation**: finite / non-negative guards applied at every entry point

pub mod error;
pub mod validation;

pub use error::{PricingError, PricingResult};
