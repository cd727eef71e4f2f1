//! Plain-text rendering for the terminal

use std::fmt::Write;

use pricing_engine_core_rs::costs::FormulaElement;
use pricing_engine_core_rs::{PriceSolution, PricingReport, TierPrice, UnitEconomics};

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Why break-even has no unit count, given the per-sale contribution
fn unreachable_reason(contribution_per_sale: f64) -> String {
    if contribution_per_sale < 0.0 {
        format!("each sale loses {}", money(-contribution_per_sale))
    } else if contribution_per_sale == 0.0 {
        "sales only cover their own costs".to_string()
    } else {
        format!(
            "each sale adds only {}, too little to count the units",
            money(contribution_per_sale)
        )
    }
}

fn economics_lines(out: &mut String, economics: &UnitEconomics) {
    let b = &economics.breakdown;
    let _ = writeln!(out, "Unit cost          {:>10}", money(b.total_unit_cost));
    let _ = writeln!(out, "  product          {:>10}", money(b.product_cost));
    let _ = writeln!(out, "  fixed share      {:>10}", money(b.fixed_allocation));
    let _ = writeln!(out, "  flat costs       {:>10}", money(b.variable_flat_per_unit));
    let _ = writeln!(out, "  shipping share   {:>10}", money(b.shipping_allocation));
    let _ = writeln!(out, "Percentage fees    {:>9.2}%", b.variable_percent_sum);
    let _ = writeln!(out, "Price              {:>10}", money(economics.price));
    let _ = writeln!(
        out,
        "Contribution       {:>10}  ({:.2}%, {})",
        money(economics.contribution_margin),
        economics.margin_percent,
        economics.tier
    );
}

fn ladder_lines(out: &mut String, ladder: &[TierPrice]) {
    for entry in ladder {
        let price = match entry.price {
            Some(price) => money(price),
            None => "unreachable".to_string(),
        };
        let _ = writeln!(
            out,
            "  {:<8} >= {:>4.0}%  {:>12}",
            entry.tier.label(),
            entry.min_margin_percent,
            price
        );
    }
}

/// Full pricing report
pub fn report(report: &PricingReport) -> String {
    let mut out = String::new();
    economics_lines(&mut out, &report.economics);

    let be = &report.break_even;
    match (be.units_needed, be.revenue_needed) {
        (Some(units), Some(revenue)) => {
            let _ = writeln!(
                out,
                "Break-even         {} units ({} revenue)",
                units,
                money(revenue)
            );
        }
        _ => {
            let _ = writeln!(
                out,
                "Break-even         not reachable: {}",
                unreachable_reason(be.contribution_margin_per_unit)
            );
        }
    }

    let _ = writeln!(out, "Scenarios");
    for scenario in &report.scenarios {
        let _ = writeln!(
            out,
            "  {:>6} units  profit {:>10}  covers {:>5.1}% of fixed costs",
            scenario.quantity,
            money(scenario.total_profit),
            scenario.percent_of_fixed_costs_covered
        );
    }

    let _ = writeln!(out, "Tier prices");
    ladder_lines(&mut out, &report.ladder);
    out
}

/// Solver outcome, with the economics at the solved price
pub fn solution(solution: &PriceSolution, economics: Option<&UnitEconomics>) -> String {
    let mut out = String::new();
    match (solution, economics) {
        (PriceSolution::Solved { .. }, Some(economics)) => economics_lines(&mut out, economics),
        (PriceSolution::Solved { price }, None) => {
            let _ = writeln!(out, "Price              {:>10}", money(*price));
        }
        (
            PriceSolution::Infeasible {
                variable_percent_sum,
                max_margin_percent,
            },
            _,
        ) => {
            let _ = writeln!(
                out,
                "No price reaches this target: percentage fees total {:.2}%, \
                 so the margin can never exceed {:.2}%",
                variable_percent_sum, max_margin_percent
            );
        }
    }
    out
}

/// Tier price ladder
pub fn ladder(ladder: &[TierPrice]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tier prices");
    ladder_lines(&mut out, ladder);
    out
}

/// Formula reference
pub fn formulas(formulas: &[FormulaElement]) -> String {
    let mut out = String::new();
    for formula in formulas {
        let _ = writeln!(out, "{} ({})", formula.display_name, formula.name);
        let _ = writeln!(out, "  {}", formula.formula);
        let _ = writeln!(out, "  {}", formula.description);
        if let Some(example) = &formula.example {
            let _ = writeln!(out, "  e.g. {}: {}", example.scenario, example.calculation);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_engine_core_rs::costs::formula_docs;
    use pricing_engine_core_rs::{analyze, CostConfiguration, VariableCostKind};

    fn sample_report(price: f64) -> PricingReport {
        let config = CostConfiguration::new(30)
            .with_fixed_cost("rent", 450.0)
            .with_variable_cost("packaging", 3.0, VariableCostKind::PerUnitFlat)
            .with_variable_cost("card fee", 3.0, VariableCostKind::Percentage)
            .with_variable_cost("tax", 6.0, VariableCostKind::Percentage);
        analyze(&config, 35.0, price, &[5, 10]).unwrap()
    }

    #[test]
    fn test_report_shows_tier_and_break_even() {
        let text = report(&sample_report(80.0));
        assert!(text.contains("tight"));
        assert!(text.contains("13 units (1040.00 revenue)"));
        assert!(text.contains("premium"));
    }

    #[test]
    fn test_report_explains_unreachable_break_even() {
        let text = report(&sample_report(0.0));
        assert!(text.contains("not reachable: each sale loses 38.00"));
    }

    #[test]
    fn test_unreachable_reason_depends_on_margin_sign() {
        assert_eq!(unreachable_reason(-2.5), "each sale loses 2.50");
        assert_eq!(unreachable_reason(0.0), "sales only cover their own costs");
        assert!(!unreachable_reason(1e-12).contains("loses"));
        assert!(unreachable_reason(1e-12).contains("too little"));
    }

    #[test]
    fn test_infeasible_solution_names_the_fee_total() {
        let text = solution(
            &PriceSolution::Infeasible {
                variable_percent_sum: 104.0,
                max_margin_percent: -4.0,
            },
            None,
        );
        assert!(text.contains("104.00%"));
    }

    #[test]
    fn test_formulas_lists_every_entry() {
        let docs = formula_docs();
        let text = formulas(&docs);
        for doc in &docs {
            assert!(text.contains(&doc.formula));
        }
    }
}
