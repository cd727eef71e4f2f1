//! Cost configuration model
//!
//! A merchant's monthly cost structure, supplied by an external configuration
//! store. The engine only reads it.
//!
//! Amounts are currency units (`f64`). Percentage variable costs use the
//! 0-100 scale (`3.0` means 3%).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::error::{PricingError, PricingResult};
use crate::core::validation::require_config_amount;

/// A recurring monthly cost (rent, utilities, tools)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCost {
    pub name: String,
    pub amount: f64,
}

/// How a variable cost is applied to a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableCostKind {
    /// Rate levied on the sale price (card fees, sales tax)
    Percentage,

    /// Currency amount incurred per unit regardless of price (packaging)
    PerUnitFlat,
}

/// A cost incurred per sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableCost {
    pub name: String,

    /// Percentage points for `Percentage`, currency for `PerUnitFlat`
    pub amount: f64,

    pub kind: VariableCostKind,
}

/// Merchant-level cost configuration
///
/// # Example
/// ```
/// use pricing_engine_core_rs::models::{CostConfiguration, VariableCostKind};
///
/// let config = CostConfiguration::new(30)
///     .with_fixed_cost("rent", 450.0)
///     .with_variable_cost("packaging", 3.0, VariableCostKind::PerUnitFlat)
///     .with_variable_cost("card fee", 3.0, VariableCostKind::Percentage);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_fixed_costs(), 450.0);
/// assert_eq!(config.variable_percent_sum(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostConfiguration {
    /// Monthly fixed costs, in entry order
    #[serde(default)]
    pub fixed_monthly_costs: Vec<FixedCost>,

    /// Per-sale costs, in entry order
    #[serde(default)]
    pub variable_costs: Vec<VariableCost>,

    /// Monthly shipping spend, allocated per unit like fixed costs
    #[serde(default)]
    pub shipping_monthly_cost: f64,

    /// Units per month used to allocate monthly costs. Not a forecast.
    ///
    /// Signed so that a 0 or negative value from the store is reported by
    /// `validate()` instead of failing deserialization.
    pub assumed_monthly_sales_volume: i64,
}

impl CostConfiguration {
    /// Empty configuration with the given allocation volume
    pub fn new(assumed_monthly_sales_volume: i64) -> Self {
        Self {
            fixed_monthly_costs: Vec::new(),
            variable_costs: Vec::new(),
            shipping_monthly_cost: 0.0,
            assumed_monthly_sales_volume,
        }
    }

    pub fn with_fixed_cost(mut self, name: impl Into<String>, amount: f64) -> Self {
        self.fixed_monthly_costs.push(FixedCost {
            name: name.into(),
            amount,
        });
        self
    }

    pub fn with_variable_cost(
        mut self,
        name: impl Into<String>,
        amount: f64,
        kind: VariableCostKind,
    ) -> Self {
        self.variable_costs.push(VariableCost {
            name: name.into(),
            amount,
            kind,
        });
        self
    }

    pub fn with_shipping(mut self, shipping_monthly_cost: f64) -> Self {
        self.shipping_monthly_cost = shipping_monthly_cost;
        self
    }

    /// Check the configuration can be allocated
    ///
    /// # Errors
    /// `InvalidConfiguration` if the sales volume is below 1 or any amount
    /// is negative or not finite.
    pub fn validate(&self) -> PricingResult<()> {
        if self.assumed_monthly_sales_volume < 1 {
            return Err(PricingError::invalid_config(format!(
                "assumed_monthly_sales_volume must be >= 1 (got {})",
                self.assumed_monthly_sales_volume
            )));
        }

        for cost in &self.fixed_monthly_costs {
            require_config_amount(&format!("fixed cost '{}'", cost.name), cost.amount)?;
        }

        for cost in &self.variable_costs {
            require_config_amount(&format!("variable cost '{}'", cost.name), cost.amount)?;
        }

        require_config_amount("shipping_monthly_cost", self.shipping_monthly_cost)?;

        Ok(())
    }

    /// Sum of all monthly fixed costs
    pub fn total_fixed_costs(&self) -> f64 {
        self.fixed_monthly_costs.iter().map(|c| c.amount).sum()
    }

    /// Sum of `PerUnitFlat` variable costs
    pub fn flat_variable_per_unit(&self) -> f64 {
        self.sum_variable(VariableCostKind::PerUnitFlat)
    }

    /// Sum of `Percentage` variable cost rates (0-100 scale)
    pub fn variable_percent_sum(&self) -> f64 {
        self.sum_variable(VariableCostKind::Percentage)
    }

    fn sum_variable(&self, kind: VariableCostKind) -> f64 {
        self.variable_costs
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.amount)
            .sum()
    }

    /// SHA-256 of the configuration's canonical JSON (sorted keys)
    ///
    /// Lets a caller tell whether a report was computed against the
    /// configuration it currently holds.
    ///
    /// # Errors
    /// Fails validation first, so non-finite amounts never reach the encoder.
    pub fn fingerprint(&self) -> PricingResult<String> {
        self.validate()?;

        let value = serde_json::to_value(self).map_err(|e| {
            PricingError::invalid_config(format!("configuration serialization failed: {}", e))
        })?;

        let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
            PricingError::invalid_config(format!("configuration serialization failed: {}", e))
        })?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}

/// Recursively sort object keys
fn canonicalize(value: serde_json::Value) -> serde_json::Value {
    use serde_json::Value;
    use std::collections::BTreeMap;

    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
