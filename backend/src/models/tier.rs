//! Margin health tiers ("semaphore")
//!
//! Four ordered buckets over the realized margin percentage. Thresholds are
//! half-open and gap-free:
//!
//! | margin %     | tier     |
//! |--------------|----------|
//! | `(-inf, 20)` | Critical |
//! | `[20, 35)`   | Tight    |
//! | `[35, 50)`   | Healthy  |
//! | `[50, inf)`  | Premium  |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of `Tight`
pub const TIGHT_THRESHOLD: f64 = 20.0;
/// Lower bound of `Healthy`
pub const HEALTHY_THRESHOLD: f64 = 35.0;
/// Lower bound of `Premium`
pub const PREMIUM_THRESHOLD: f64 = 50.0;

/// Qualitative margin health, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarginTier {
    /// Below 20%: loss-making or barely covering costs
    Critical,
    /// 20% to 35%
    Tight,
    /// 35% to 50%
    Healthy,
    /// 50% and above
    Premium,
}

impl MarginTier {
    /// All tiers in rank order
    pub const ALL: [MarginTier; 4] = [
        MarginTier::Critical,
        MarginTier::Tight,
        MarginTier::Healthy,
        MarginTier::Premium,
    ];

    /// 0 for Critical up to 3 for Premium
    pub fn rank(self) -> u8 {
        match self {
            MarginTier::Critical => 0,
            MarginTier::Tight => 1,
            MarginTier::Healthy => 2,
            MarginTier::Premium => 3,
        }
    }

    /// Smallest margin percent in this tier (`None` for Critical, which is unbounded)
    pub fn lower_bound(self) -> Option<f64> {
        match self {
            MarginTier::Critical => None,
            MarginTier::Tight => Some(TIGHT_THRESHOLD),
            MarginTier::Healthy => Some(HEALTHY_THRESHOLD),
            MarginTier::Premium => Some(PREMIUM_THRESHOLD),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarginTier::Critical => "critical",
            MarginTier::Tight => "tight",
            MarginTier::Healthy => "healthy",
            MarginTier::Premium => "premium",
        }
    }
}

impl fmt::Display for MarginTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Get the tier for a margin percentage
///
/// Total over every `f64`: losses land in `Critical`, extreme markups in
/// `Premium`, and NaN (no comparison holds) in `Critical`.
///
/// # Example
/// ```
/// use pricing_engine_core_rs::models::{classify, MarginTier};
///
/// assert_eq!(classify(-40.0), MarginTier::Critical);
/// assert_eq!(classify(43.5), MarginTier::Healthy);
/// assert_eq!(classify(250.0), MarginTier::Premium);
/// ```
pub fn classify(margin_percent: f64) -> MarginTier {
    if margin_percent >= PREMIUM_THRESHOLD {
        MarginTier::Premium
    } else if margin_percent >= HEALTHY_THRESHOLD {
        MarginTier::Healthy
    } else if margin_percent >= TIGHT_THRESHOLD {
        MarginTier::Tight
    } else {
        MarginTier::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_matches_ord() {
        for pair in MarginTier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_lower_bound_classifies_into_own_tier() {
        for tier in MarginTier::ALL {
            if let Some(bound) = tier.lower_bound() {
                assert_eq!(classify(bound), tier);
            }
        }
    }

    #[test]
    fn test_nan_is_critical() {
        assert_eq!(classify(f64::NAN), MarginTier::Critical);
    }
}
