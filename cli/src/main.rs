//! Pricing CLI
//!
//! Loads a merchant's cost configuration from a JSON file and prints unit
//! economics, price targets, tier prices or the formula reference.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pricing_engine_core_rs::costs::schema_docs::formula_schema;
use pricing_engine_core_rs::{
    allocate, analyze, evaluate, solve_for_margin, solve_for_markup, tier_price_ladder,
    CostConfiguration, DEFAULT_SCENARIO_QUANTITIES,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Debug, Parser)]
#[command(name = "pricing")]
#[command(about = "Unit economics, price targets and break-even for a product")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a candidate price: margin, tier, break-even, scenarios
    Evaluate(EvaluateArgs),
    /// Find the price that reaches a target margin (or markup)
    Solve(SolveArgs),
    /// Entry price of each margin tier
    Ladder(ProductArgs),
    /// Print every formula the engine applies
    Formulas {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct ProductArgs {
    /// Cost configuration JSON file
    #[arg(long)]
    config: PathBuf,

    /// Cost of producing or acquiring one unit
    #[arg(long, allow_negative_numbers = true)]
    product_cost: f64,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct EvaluateArgs {
    #[command(flatten)]
    product: ProductArgs,

    /// Candidate sale price
    #[arg(long, allow_negative_numbers = true)]
    price: f64,

    /// Sales volumes to project, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SCENARIO_QUANTITIES)]
    quantities: Vec<u64>,
}

#[derive(Debug, Args)]
struct SolveArgs {
    #[command(flatten)]
    product: ProductArgs,

    /// Target margin on price (or markup on cost with --markup), in percent
    #[arg(long, allow_negative_numbers = true)]
    margin: f64,

    /// Treat --margin as a markup on unit cost
    #[arg(long)]
    markup: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<CostConfiguration> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading cost configuration {}", path.display()))?;
    let config: CostConfiguration = serde_json::from_str(&text)
        .with_context(|| format!("parsing cost configuration {}", path.display()))?;
    config.validate()?;

    info!(path = %path.display(), volume = config.assumed_monthly_sales_volume, "loaded cost configuration");
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Evaluate(args) => {
            let config = load_config(&args.product.config)?;
            let report = analyze(
                &config,
                args.product.product_cost,
                args.price,
                &args.quantities,
            )?;

            if args.product.json {
                print_json(&report)?;
            } else {
                print!("{}", render::report(&report));
            }
        }
        Command::Solve(args) => {
            let config = load_config(&args.product.config)?;
            let breakdown = allocate(&config, args.product.product_cost)?;
            let solution = if args.markup {
                solve_for_markup(&breakdown, args.margin)?
            } else {
                solve_for_margin(&breakdown, args.margin)?
            };
            let economics = match solution.price() {
                Some(price) => Some(evaluate(&breakdown, price)?),
                None => None,
            };

            if args.product.json {
                print_json(&serde_json::json!({
                    "solution": solution,
                    "economics": economics,
                }))?;
            } else {
                print!("{}", render::solution(&solution, economics.as_ref()));
            }
        }
        Command::Ladder(args) => {
            let config = load_config(&args.config)?;
            let breakdown = allocate(&config, args.product_cost)?;
            let ladder = tier_price_ladder(&breakdown)?;

            if args.json {
                print_json(&ladder)?;
            } else {
                print!("{}", render::ladder(&ladder));
            }
        }
        Command::Formulas { json } => {
            let schema = formula_schema();
            if json {
                print_json(&schema)?;
            } else {
                print!("{}", render::formulas(&schema.formulas));
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_defaults_to_standard_quantities() {
        let cli = Cli::try_parse_from([
            "pricing",
            "evaluate",
            "--config",
            "shop.json",
            "--product-cost",
            "35",
            "--price",
            "80",
        ])
        .unwrap();

        match cli.command {
            Command::Evaluate(args) => {
                assert_eq!(args.quantities, vec![5, 10, 20, 50]);
                assert_eq!(args.price, 80.0);
                assert!(!args.product.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_solve_accepts_markup_flag_and_quantities_list() {
        let cli = Cli::try_parse_from([
            "pricing",
            "solve",
            "--config",
            "shop.json",
            "--product-cost",
            "35",
            "--margin",
            "-10",
            "--markup",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Command::Solve(args) => {
                assert_eq!(args.margin, -10.0);
                assert!(args.markup);
                assert!(args.product.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from([
            "pricing",
            "evaluate",
            "--config",
            "shop.json",
            "--product-cost",
            "35",
            "--price",
            "80",
            "--quantities",
            "1,2,3",
        ])
        .unwrap();
        match cli.command {
            Command::Evaluate(args) => assert_eq!(args.quantities, vec![1, 2, 3]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_sample_configuration_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/candle_shop.json");
        let config = load_config(&path).unwrap();

        assert_eq!(config.total_fixed_costs(), 450.0);
        assert_eq!(config.variable_percent_sum(), 9.0);
        assert_eq!(config.flat_variable_per_unit(), 3.0);
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/shop.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/shop.json"));
    }
}
