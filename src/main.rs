//! Investment Projection CLI
//!
//! Builds a plan from flags or a JSON file, projects it and writes CSV tables

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use investment_projection::{
    export,
    params::{
        load_lump_sums, load_parameters, DEFAULT_ANNUAL_RETURN, DEFAULT_CONTRIBUTION_GROWTH,
        DEFAULT_HORIZON_YEARS, DEFAULT_INITIAL_AMOUNT, DEFAULT_MONTHLY_CONTRIBUTION,
    },
    InvestmentParameters, LumpSum, ProjectionEngine, ProjectionMetrics, RatePreset, ReturnRate,
    YearSummary,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "investment_projection", version, about = "Project the growth of a periodic investment plan")]
struct Cli {
    /// JSON parameter file; replaces the plan flags below
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial lump sum
    #[arg(long, default_value_t = DEFAULT_INITIAL_AMOUNT)]
    initial: f64,

    /// Monthly contribution in year 1
    #[arg(long, default_value_t = DEFAULT_MONTHLY_CONTRIBUTION)]
    monthly: f64,

    /// Horizon in years
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    years: u32,

    /// Horizon in months; overrides --years
    #[arg(long)]
    months: Option<u32>,

    /// Named return assumption
    #[arg(long, value_enum, conflicts_with = "rate")]
    preset: Option<RatePreset>,

    /// Custom annual return as a decimal (0.08 = 8%)
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<f64>,

    /// Annual increase of the monthly contribution as a decimal
    #[arg(long, default_value_t = DEFAULT_CONTRIBUTION_GROWTH)]
    growth: f64,

    /// Annual inflation as a decimal; enables the real series
    #[arg(long)]
    inflation: Option<f64>,

    /// One-time injection as MONTH:AMOUNT (repeatable, at most 5)
    #[arg(long = "lump", value_parser = parse_lump_sum)]
    lumps: Vec<LumpSum>,

    /// CSV file with Month,Amount rows to add to the lump sums
    #[arg(long)]
    lumps_csv: Option<PathBuf>,

    /// Calendar date of month 1 (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Write the month table here
    #[arg(long)]
    months_csv: Option<PathBuf>,

    /// Write the year table here
    #[arg(long)]
    years_csv: Option<PathBuf>,

    /// Write the inflation-adjusted month table here
    #[arg(long)]
    real_csv: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn parse_lump_sum(s: &str) -> Result<LumpSum, String> {
    let (month, amount) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MONTH:AMOUNT, got '{}'", s))?;
    let month: u32 = month.trim().parse().map_err(|e| format!("bad month '{}': {}", month, e))?;
    let amount: f64 = amount.trim().parse().map_err(|e| format!("bad amount '{}': {}", amount, e))?;
    Ok(LumpSum::new(month, amount))
}

impl Cli {
    fn to_parameters(&self) -> Result<InvestmentParameters> {
        let mut params = match &self.config {
            Some(path) => load_parameters(path)
                .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
            None => {
                let rate = match (self.rate, self.preset) {
                    (Some(rate), _) => ReturnRate::Custom(rate),
                    (None, Some(preset)) => ReturnRate::Preset(preset),
                    (None, None) => ReturnRate::Custom(DEFAULT_ANNUAL_RETURN),
                };
                let horizon = self.months.unwrap_or(self.years.saturating_mul(12));

                let mut params = InvestmentParameters::new(self.initial, self.monthly, horizon, rate.annual_rate())
                    .with_contribution_growth(self.growth);
                params.inflation = self.inflation;
                params.start_date = self.start_date;
                for lump in &self.lumps {
                    params.add_lump_sum(*lump);
                }
                params
            }
        };

        if let Some(path) = &self.lumps_csv {
            let lumps = load_lump_sums(path)
                .with_context(|| format!("Failed to load lump sums from {}", path.display()))?;
            for lump in lumps {
                params.add_lump_sum(lump);
            }
        }

        params.validate().context("Invalid investment parameters")?;

        if self.real_csv.is_some() && params.inflation.is_none() {
            bail!("--real-csv requires an inflation rate (--inflation or \"inflation\" in --config)");
        }
        Ok(params)
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    parameters: &'a InvestmentParameters,
    metrics: &'a ProjectionMetrics,
    years: &'a [YearSummary],
}

fn pct(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}%", v * 100.0)).unwrap_or_else(|| "n/a".to_string())
}

fn print_summary(params: &InvestmentParameters, metrics: &ProjectionMetrics, years: &[YearSummary]) {
    println!("Investment Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");

    println!("Plan:");
    println!("  Initial Investment: {:.2}", params.initial_amount);
    println!("  Monthly Contribution: {:.2}", params.monthly_contribution);
    println!("  Horizon: {} months", params.horizon_months);
    println!("  Annual Return: {:.2}%", params.annual_return * 100.0);
    println!("  Contribution Growth: {}", pct(params.contribution_growth));
    println!("  Inflation: {}", pct(params.inflation));
    for lump in &params.lump_sums {
        println!("  Lump Sum: {:.2} at month {}", lump.amount, lump.month);
    }
    println!();

    println!("{:>5} {:>6} {:>14} {:>14} {:>14} {:>14} {:>9}",
        "Year", "Months", "Contributed", "Total Contrib", "Total Value", "Gain", "ROI");
    println!("{}", "-".repeat(82));
    for year in years {
        println!("{:>5} {:>6} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>9}",
            year.year,
            year.months,
            year.contributions,
            year.cumulative_contributions,
            year.ending_balance,
            year.cumulative_gain,
            pct(year.roi),
        );
    }

    println!("\nSummary:");
    println!("  Final Value: {:.2}", metrics.final_balance);
    println!("  Total Contributions: {:.2}", metrics.total_contributed);
    println!("  Investment Gain: {:.2}", metrics.total_gain);
    println!("  Return on Investment: {}", pct(metrics.roi));
    println!("  CAGR: {}", pct(metrics.cagr));
    println!("  Contributions %: {}", pct(metrics.contribution_share));
    println!("  Investment Gains %: {}", pct(metrics.gain_share));
    if let Some(real) = metrics.real_final_balance {
        println!("  Final Value (today's money): {:.2}", real);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.to_parameters()?;

    let projection = ProjectionEngine::new(params).project();
    let years = projection.years();
    let metrics = projection.metrics();

    if cli.json {
        let report = Report {
            parameters: &projection.parameters,
            metrics: &metrics,
            years: &years,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&projection.parameters, &metrics, &years);
    }

    if let Some(path) = &cli.months_csv {
        export::write_months_to_path(path, &projection.months, projection.parameters.start_date)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Month table written to: {}", path.display());
    }
    if let Some(path) = &cli.years_csv {
        export::write_years_to_path(path, &years)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Year table written to: {}", path.display());
    }
    if let (Some(path), Some(real)) = (&cli.real_csv, &projection.real_months) {
        export::write_real_months_to_path(path, real)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Real month table written to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lump_sum() {
        assert_eq!(parse_lump_sum("60:1000").unwrap(), LumpSum::new(60, 1000.0));
        assert_eq!(parse_lump_sum(" 6 : 250.5").unwrap(), LumpSum::new(6, 250.5));
        assert!(parse_lump_sum("60").is_err());
        assert!(parse_lump_sum("x:1").is_err());
    }

    #[test]
    fn test_flags_build_parameters() {
        let cli = Cli::parse_from([
            "investment_projection",
            "--initial", "1000",
            "--monthly", "100",
            "--months", "30",
            "--preset", "balanced",
            "--growth", "0",
            "--lump", "12:500",
            "--lump", "6:100",
        ]);
        let params = cli.to_parameters().unwrap();

        assert_eq!(params.horizon_months, 30);
        assert_eq!(params.annual_return, 0.06);
        assert_eq!(params.lump_sums[0].month, 6);
        assert_eq!(params.lump_sums.len(), 2);
    }

    #[test]
    fn test_negative_custom_rate() {
        let cli = Cli::parse_from(["investment_projection", "--rate", "-0.1", "--years", "1"]);
        let params = cli.to_parameters().unwrap();
        assert_eq!(params.annual_return, -0.1);
        assert_eq!(params.horizon_months, 12);
    }

    #[test]
    fn test_real_table_needs_inflation() {
        let cli = Cli::parse_from(["investment_projection", "--years", "1", "--real-csv", "real.csv"]);
        let err = cli.to_parameters().unwrap_err();
        assert!(err.to_string().contains("--real-csv requires an inflation rate"));

        let cli = Cli::parse_from([
            "investment_projection", "--years", "1", "--inflation", "0.02", "--real-csv", "real.csv",
        ]);
        assert_eq!(cli.to_parameters().unwrap().inflation, Some(0.02));
    }

    #[test]
    fn test_invalid_flags_are_rejected() {
        let cli = Cli::parse_from(["investment_projection", "--years", "1", "--lump", "13:100"]);
        assert!(cli.to_parameters().is_err());
    }
}
