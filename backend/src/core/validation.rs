//! Input guards
//!
//! Malformed numbers are rejected at the boundary instead of being clamped,
//! so an upstream bug surfaces as an error rather than a plausible-looking
//! price.

use super::error::{PricingError, PricingResult};

/// Require a finite value (any sign)
pub fn require_finite(field: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NonPositiveInput { field, value })
    }
}

/// Require a finite value that is `>= 0`
pub fn require_non_negative(field: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PricingError::NonPositiveInput { field, value })
    }
}

/// Require a configuration amount that is finite and `>= 0`
///
/// Same check as [`require_non_negative`] but reported as a configuration
/// problem, naming the cost entry.
pub fn require_config_amount(label: &str, value: f64) -> PricingResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid_config(format!(
            "{} must be a finite, non-negative amount (got {})",
            label, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(require_non_negative("price", 0.0), Ok(0.0));
    }

    #[test]
    fn test_non_negative_rejects_negative_and_nan() {
        assert!(require_non_negative("price", -0.01).is_err());
        assert!(require_non_negative("price", f64::NAN).is_err());
        assert!(require_non_negative("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_finite_accepts_negative() {
        assert_eq!(require_finite("margin", -12.5), Ok(-12.5));
        assert!(require_finite("margin", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_config_amount_names_the_entry() {
        let err = require_config_amount("fixed cost 'rent'", -5.0).unwrap_err();
        match err {
            PricingError::InvalidConfiguration { reason } => {
                assert!(reason.contains("fixed cost 'rent'"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
