//! Compare one plan across the rate presets and any custom rates
//!
//! Usage: cargo run --bin compare_rates -- --monthly 200 --years 25 --rate 0.085

use anyhow::{Context, Result};
use clap::Parser;
use investment_projection::{
    params::{DEFAULT_CONTRIBUTION_GROWTH, DEFAULT_HORIZON_YEARS, DEFAULT_INITIAL_AMOUNT, DEFAULT_MONTHLY_CONTRIBUTION},
    scenario::ScenarioOutcome,
    InvestmentParameters, RatePreset, ReturnRate, ScenarioRunner,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "compare_rates", about = "Project one plan under several annual return rates")]
struct Args {
    #[arg(long, default_value_t = DEFAULT_INITIAL_AMOUNT)]
    initial: f64,

    #[arg(long, default_value_t = DEFAULT_MONTHLY_CONTRIBUTION)]
    monthly: f64,

    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    years: u32,

    #[arg(long, default_value_t = DEFAULT_CONTRIBUTION_GROWTH)]
    growth: f64,

    #[arg(long)]
    inflation: Option<f64>,

    /// Extra custom rates as decimals (repeatable)
    #[arg(long = "rate", allow_hyphen_values = true)]
    rates: Vec<f64>,

    /// Write the comparison table here
    #[arg(long)]
    output: Option<PathBuf>,
}

fn write_outcomes(path: &Path, outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["Scenario", "AnnualReturn", "FinalValue", "TotalContributions", "Gain", "ROI", "CAGR", "RealFinalValue"])?;

    let opt = |v: Option<f64>| v.map(|x| format!("{:.6}", x)).unwrap_or_default();
    for outcome in outcomes {
        let m = &outcome.metrics;
        wtr.write_record([
            outcome.label.clone(),
            format!("{:.6}", outcome.annual_return),
            format!("{:.2}", m.final_balance),
            format!("{:.2}", m.total_contributed),
            format!("{:.2}", m.total_gain),
            opt(m.roi),
            opt(m.cagr),
            m.real_final_balance.map(|x| format!("{:.2}", x)).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Presets followed by the custom rates, each checked against the base plan
fn scenario_rates(runner: &ScenarioRunner, custom: &[f64]) -> Result<Vec<ReturnRate>> {
    let mut rates: Vec<ReturnRate> = RatePreset::ALL.iter().map(|&p| p.into()).collect();

    for &rate in custom {
        let mut plan = runner.parameters().clone();
        plan.annual_return = rate;
        plan.validate()
            .with_context(|| format!("Invalid custom rate {}", rate))?;
        rates.push(ReturnRate::Custom(rate));
    }

    Ok(rates)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let mut params = InvestmentParameters::new(args.initial, args.monthly, args.years.saturating_mul(12), 0.0)
        .with_contribution_growth(args.growth);
    params.inflation = args.inflation;
    params.validate().context("Invalid investment parameters")?;

    let runner = ScenarioRunner::new(params);
    let rates = scenario_rates(&runner, &args.rates)?;
    let outcomes = runner.run_rates(&rates);

    println!("{:<20} {:>8} {:>16} {:>16} {:>10} {:>10}",
        "Scenario", "Rate", "Final Value", "Contributed", "ROI", "CAGR");
    println!("{}", "-".repeat(85));
    for outcome in &outcomes {
        let m = &outcome.metrics;
        println!("{:<20} {:>7.2}% {:>16.2} {:>16.2} {:>10} {:>10}",
            outcome.label,
            outcome.annual_return * 100.0,
            m.final_balance,
            m.total_contributed,
            m.roi.map(|v| format!("{:.2}%", v * 100.0)).unwrap_or_else(|| "n/a".into()),
            m.cagr.map(|v| format!("{:.2}%", v * 100.0)).unwrap_or_else(|| "n/a".into()),
        );
    }

    if let Some(path) = &args.output {
        write_outcomes(path, &outcomes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nComparison written to: {}", path.display());
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ScenarioRunner {
        ScenarioRunner::new(InvestmentParameters::new(1000.0, 100.0, 120, 0.0))
    }

    #[test]
    fn test_custom_rates_follow_presets() {
        let rates = scenario_rates(&runner(), &[0.085, -0.3]).unwrap();

        assert_eq!(rates.len(), RatePreset::ALL.len() + 2);
        assert_eq!(rates[0], ReturnRate::Preset(RatePreset::Conservative));
        assert_eq!(rates[rates.len() - 1], ReturnRate::Custom(-0.3));
    }

    #[test]
    fn test_rate_without_positive_growth_factor_is_rejected() {
        assert!(scenario_rates(&runner(), &[0.05, -13.0]).is_err());
        assert!(scenario_rates(&runner(), &[-12.0]).is_err());
        assert!(scenario_rates(&runner(), &[f64::NAN]).is_err());
    }
}
