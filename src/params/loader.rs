//! Load plan parameters from JSON files and lump-sum schedules from CSV

use super::data::{
    InvestmentParameters, LumpSum, DEFAULT_ANNUAL_RETURN, DEFAULT_CONTRIBUTION_GROWTH,
    DEFAULT_HORIZON_YEARS, DEFAULT_INITIAL_AMOUNT, DEFAULT_MONTHLY_CONTRIBUTION,
};
use crate::error::Result;
use crate::rates::RatePreset;
use chrono::NaiveDate;
use csv::Reader;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parameter file layout. Every field is optional.
#[derive(Debug, Deserialize)]
struct ParametersFile {
    #[serde(default = "default_initial_amount")]
    initial_amount: f64,

    #[serde(default = "default_monthly_contribution")]
    monthly_contribution: f64,

    /// Takes precedence over `horizon_years`
    #[serde(default)]
    horizon_months: Option<u32>,

    #[serde(default = "default_horizon_years")]
    horizon_years: u32,

    /// Custom rate; takes precedence over `rate_preset`
    #[serde(default)]
    annual_return: Option<f64>,

    #[serde(default)]
    rate_preset: Option<RatePreset>,

    #[serde(default = "default_contribution_growth")]
    contribution_growth: Option<f64>,

    #[serde(default)]
    inflation: Option<f64>,

    #[serde(default)]
    lump_sums: Vec<LumpSum>,

    #[serde(default)]
    start_date: Option<NaiveDate>,
}

fn default_initial_amount() -> f64 { DEFAULT_INITIAL_AMOUNT }
fn default_monthly_contribution() -> f64 { DEFAULT_MONTHLY_CONTRIBUTION }
fn default_horizon_years() -> u32 { DEFAULT_HORIZON_YEARS }
fn default_contribution_growth() -> Option<f64> { Some(DEFAULT_CONTRIBUTION_GROWTH) }

impl ParametersFile {
    fn to_parameters(self) -> InvestmentParameters {
        let horizon_months = self
            .horizon_months
            .unwrap_or_else(|| self.horizon_years.saturating_mul(12));

        let annual_return = match (self.annual_return, self.rate_preset) {
            (Some(rate), _) => rate,
            (None, Some(preset)) => preset.annual_rate(),
            (None, None) => DEFAULT_ANNUAL_RETURN,
        };

        let mut params =
            InvestmentParameters::new(self.initial_amount, self.monthly_contribution, horizon_months, annual_return);
        params.contribution_growth = self.contribution_growth;
        params.inflation = self.inflation;
        params.lump_sums = self.lump_sums;
        params.start_date = self.start_date;
        params.sort_lump_sums();
        params
    }
}

/// Raw CSV row of a lump-sum schedule
#[derive(Debug, Deserialize)]
struct LumpSumRow {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Amount")]
    amount: f64,
}

/// Load and validate parameters from a JSON file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<InvestmentParameters> {
    let file = File::open(path)?;
    load_parameters_from_reader(BufReader::new(file))
}

/// Load and validate parameters from any reader
pub fn load_parameters_from_reader<R: Read>(reader: R) -> Result<InvestmentParameters> {
    let raw: ParametersFile = serde_json::from_reader(reader)?;
    let params = raw.to_parameters();
    params.validate()?;
    Ok(params)
}

/// Load a `Month,Amount` lump-sum schedule from a CSV file
pub fn load_lump_sums<P: AsRef<Path>>(path: P) -> Result<Vec<LumpSum>> {
    let file = File::open(path)?;
    load_lump_sums_from_reader(file)
}

/// Load a lump-sum schedule from any reader
pub fn load_lump_sums_from_reader<R: Read>(reader: R) -> Result<Vec<LumpSum>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut lumps = Vec::new();

    for result in csv_reader.deserialize() {
        let row: LumpSumRow = result?;
        lumps.push(LumpSum::new(row.month, row.amount));
    }

    lumps.sort_by_key(|l| l.month);
    Ok(lumps)
}
