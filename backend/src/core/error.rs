//! Pricing engine errors
//!
//! Every failure is local and synchronous. Infeasible outcomes (a fee stack
//! that eats the whole price, a margin that never covers fixed costs) are
//! normal result values and only become errors when a caller explicitly asks
//! for a price that does not exist (see `PriceSolution::into_price`).

use thiserror::Error;

/// Errors that can occur while computing unit economics
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// The merchant's cost configuration cannot be used for allocation
    #[error("Invalid cost configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Percentage-based variable costs consume 100% or more of any price
    #[error("No positive price is feasible: percentage costs sum to {variable_percent_sum}%")]
    InfeasiblePrice { variable_percent_sum: f64 },

    /// A caller-supplied number is negative or not finite
    #[error("{field} must be a finite, non-negative number (got {value})")]
    NonPositiveInput { field: &'static str, value: f64 },
}

impl PricingError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        PricingError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the engine
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_value() {
        let err = PricingError::NonPositiveInput {
            field: "price",
            value: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "price must be a finite, non-negative number (got -1.5)"
        );

        let err = PricingError::InfeasiblePrice {
            variable_percent_sum: 104.0,
        };
        assert!(err.to_string().contains("104%"));
    }
}
