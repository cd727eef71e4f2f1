//! Formula Schema Documentation
//!
//! Self-documenting description of every formula the engine applies.
//! Consumed by the CLI `formulas` command.

use serde::{Deserialize, Serialize};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Category for grouping formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaCategory {
    /// Spreading monthly costs over units
    Allocation,
    /// Forward evaluation of a price
    Margin,
    /// Inverse evaluation (price from a target)
    Solver,
    /// Volume-based projections
    Projection,
}

/// Worked example for a formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaExample {
    /// Scenario description
    pub scenario: String,
    /// Input values as (name, value) pairs
    pub inputs: Vec<(String, String)>,
    /// Calculation steps
    pub calculation: String,
    /// Final result
    pub result: String,
}

/// Documentation for a single formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaElement {
    /// Output name (e.g., "contribution_margin")
    pub name: String,

    /// Human-readable name (e.g., "Contribution Margin")
    pub display_name: String,

    pub category: FormulaCategory,

    /// What the figure means to a merchant
    pub description: String,

    /// Plain-text formula
    pub formula: String,

    /// Unit of the result
    pub unit: String,

    /// Rust source file location
    pub source_location: String,

    /// Related formulas
    pub see_also: Vec<String>,

    pub example: Option<FormulaExample>,
}

/// Complete formula schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaSchemaDoc {
    pub version: String,
    pub formulas: Vec<FormulaElement>,
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

fn pairs(inputs: &[(&str, &str)]) -> Vec<(String, String)> {
    inputs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Every formula, in evaluation order
pub fn formula_docs() -> Vec<FormulaElement> {
    vec![
        FormulaElement {
            name: "total_unit_cost".to_string(),
            display_name: "Unit Cost".to_string(),
            category: FormulaCategory::Allocation,
            description: "Everything one sale costs before percentage fees: the product itself, \
                flat per-unit costs, and its share of monthly fixed and shipping costs."
                .to_string(),
            formula: "product_cost + sum(fixed) / volume + sum(flat) + shipping / volume"
                .to_string(),
            unit: "currency per unit".to_string(),
            source_location: "backend/src/costs/allocation.rs".to_string(),
            see_also: strings(&["variable_percent_sum"]),
            example: Some(FormulaExample {
                scenario: "Handmade candle, 30 sales a month".to_string(),
                inputs: pairs(&[
                    ("product_cost", "35"),
                    ("fixed_monthly_costs", "450"),
                    ("packaging (flat)", "3"),
                    ("assumed_monthly_sales_volume", "30"),
                ]),
                calculation: "35 + 450 / 30 + 3 + 0 = 53".to_string(),
                result: "53 per unit".to_string(),
            }),
        },
        FormulaElement {
            name: "variable_percent_sum".to_string(),
            display_name: "Percentage Fees".to_string(),
            category: FormulaCategory::Allocation,
            description: "Sum of fees levied on the sale price (card processing, sales tax). \
                Kept apart from unit cost because it scales with price."
                .to_string(),
            formula: "sum(percentage variable costs)".to_string(),
            unit: "percent of price".to_string(),
            source_location: "backend/src/models/config.rs".to_string(),
            see_also: strings(&["contribution_margin"]),
            example: Some(FormulaExample {
                scenario: "Card fee plus tax".to_string(),
                inputs: pairs(&[("card fee", "3%"), ("tax", "6%")]),
                calculation: "3 + 6 = 9".to_string(),
                result: "9%".to_string(),
            }),
        },
        FormulaElement {
            name: "contribution_margin".to_string(),
            display_name: "Contribution Margin".to_string(),
            category: FormulaCategory::Margin,
            description: "What is left of one sale after unit cost and percentage fees."
                .to_string(),
            formula: "price - total_unit_cost - price * variable_percent_sum / 100".to_string(),
            unit: "currency per unit".to_string(),
            source_location: "backend/src/pricing/economics.rs".to_string(),
            see_also: strings(&["margin_percent", "markup_percent"]),
            example: Some(FormulaExample {
                scenario: "Selling at 80".to_string(),
                inputs: pairs(&[
                    ("price", "80"),
                    ("total_unit_cost", "38"),
                    ("variable_percent_sum", "9"),
                ]),
                calculation: "80 - 38 - 80 * 0.09 = 34.8".to_string(),
                result: "34.8 per unit".to_string(),
            }),
        },
        FormulaElement {
            name: "margin_percent".to_string(),
            display_name: "Margin".to_string(),
            category: FormulaCategory::Margin,
            description: "Contribution margin as a share of price; drives the health tier \
                (critical < 20 <= tight < 35 <= healthy < 50 <= premium). A zero price reports 0."
                .to_string(),
            formula: "contribution_margin / price * 100".to_string(),
            unit: "percent of price".to_string(),
            source_location: "backend/src/pricing/economics.rs".to_string(),
            see_also: strings(&["price_for_margin"]),
            example: Some(FormulaExample {
                scenario: "Selling at 80".to_string(),
                inputs: pairs(&[("contribution_margin", "34.8"), ("price", "80")]),
                calculation: "34.8 / 80 * 100 = 43.5".to_string(),
                result: "43.5% (healthy)".to_string(),
            }),
        },
        FormulaElement {
            name: "markup_percent".to_string(),
            display_name: "Markup".to_string(),
            category: FormulaCategory::Margin,
            description: "Contribution margin as a share of unit cost.".to_string(),
            formula: "contribution_margin / total_unit_cost * 100".to_string(),
            unit: "percent of cost".to_string(),
            source_location: "backend/src/pricing/economics.rs".to_string(),
            see_also: strings(&["price_for_markup"]),
            example: None,
        },
        FormulaElement {
            name: "price_for_margin".to_string(),
            display_name: "Price for Target Margin".to_string(),
            category: FormulaCategory::Solver,
            description: "Price at which the margin on price equals the target. Unreachable \
                when fees plus target margin reach 100%."
                .to_string(),
            formula: "total_unit_cost / (1 - variable_percent_sum / 100 - margin / 100)"
                .to_string(),
            unit: "currency".to_string(),
            source_location: "backend/src/pricing/solver.rs".to_string(),
            see_also: strings(&["margin_percent"]),
            example: Some(FormulaExample {
                scenario: "Target 43.5% margin".to_string(),
                inputs: pairs(&[
                    ("total_unit_cost", "38"),
                    ("variable_percent_sum", "9"),
                    ("margin", "43.5"),
                ]),
                calculation: "38 / (1 - 0.09 - 0.435) = 80".to_string(),
                result: "80".to_string(),
            }),
        },
        FormulaElement {
            name: "price_for_markup".to_string(),
            display_name: "Price for Target Markup".to_string(),
            category: FormulaCategory::Solver,
            description: "Price at which the markup on cost equals the target, grossed up for \
                percentage fees. Unreachable when fees reach 100%."
                .to_string(),
            formula: "total_unit_cost * (1 + markup / 100) / (1 - variable_percent_sum / 100)"
                .to_string(),
            unit: "currency".to_string(),
            source_location: "backend/src/pricing/solver.rs".to_string(),
            see_also: strings(&["markup_percent"]),
            example: None,
        },
        FormulaElement {
            name: "break_even_units".to_string(),
            display_name: "Break-Even Units".to_string(),
            category: FormulaCategory::Projection,
            description: "Whole units to sell each month before fixed costs are covered. \
                Not reachable with a margin of zero or below."
                .to_string(),
            formula: "ceil(total_fixed_costs / contribution_margin_per_unit)".to_string(),
            unit: "units".to_string(),
            source_location: "backend/src/projection/break_even.rs".to_string(),
            see_also: strings(&["scenario_coverage"]),
            example: Some(FormulaExample {
                scenario: "Covering 450 of monthly costs".to_string(),
                inputs: pairs(&[
                    ("total_fixed_costs", "450"),
                    ("contribution_margin_per_unit", "34.8"),
                ]),
                calculation: "ceil(450 / 34.8) = ceil(12.93) = 13".to_string(),
                result: "13 units (1,040 revenue at 80)".to_string(),
            }),
        },
        FormulaElement {
            name: "scenario_coverage".to_string(),
            display_name: "Fixed-Cost Coverage".to_string(),
            category: FormulaCategory::Projection,
            description: "Share of monthly fixed costs covered by a given sales volume, \
                capped to 0-100%."
                .to_string(),
            formula: "clamp(contribution_margin_per_unit * quantity / total_fixed_costs * 100, 0, 100)"
                .to_string(),
            unit: "percent".to_string(),
            source_location: "backend/src/projection/scenarios.rs".to_string(),
            see_also: strings(&["break_even_units"]),
            example: Some(FormulaExample {
                scenario: "Selling 10 units".to_string(),
                inputs: pairs(&[
                    ("contribution_margin_per_unit", "34.8"),
                    ("quantity", "10"),
                    ("total_fixed_costs", "450"),
                ]),
                calculation: "348 / 450 * 100 = 77.3".to_string(),
                result: "77.3% covered".to_string(),
            }),
        },
    ]
}

/// Versioned schema wrapping [`formula_docs`]
pub fn formula_schema() -> FormulaSchemaDoc {
    FormulaSchemaDoc {
        version: "1.0".to_string(),
        formulas: formula_docs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_formula_category_serializes_to_json() {
        let json = serde_json::to_string(&FormulaCategory::Solver).unwrap();
        assert_eq!(json, "\"Solver\"");
    }

    #[test]
    fn test_formula_names_are_unique() {
        let docs = formula_docs();
        let names: HashSet<_> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), docs.len());
    }

    #[test]
    fn test_see_also_references_exist() {
        let docs = formula_docs();
        let names: HashSet<_> = docs.iter().map(|d| d.name.clone()).collect();
        for doc in &docs {
            for related in &doc.see_also {
                assert!(names.contains(related), "{} -> {}", doc.name, related);
            }
        }
    }

    #[test]
    fn test_every_category_is_documented() {
        let docs = formula_docs();
        for category in [
            FormulaCategory::Allocation,
            FormulaCategory::Margin,
            FormulaCategory::Solver,
            FormulaCategory::Projection,
        ] {
            assert!(docs.iter().any(|d| d.category == category));
        }
    }
}
