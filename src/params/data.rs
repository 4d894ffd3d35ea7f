//! Investment plan parameters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Maximum number of one-time lump sums in a plan
pub const MAX_LUMP_SUMS: usize = 5;

/// Longest supported horizon (100 years)
pub const MAX_HORIZON_MONTHS: u32 = 1200;

pub const DEFAULT_INITIAL_AMOUNT: f64 = 50.0;
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 50.0;
pub const DEFAULT_HORIZON_YEARS: u32 = 30;
pub const DEFAULT_ANNUAL_RETURN: f64 = 0.08;
pub const DEFAULT_CONTRIBUTION_GROWTH: f64 = 0.03;

/// A one-time contribution applied at a given month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpSum {
    /// Month of the injection (1-indexed)
    pub month: u32,

    /// Amount added to that month's contribution
    pub amount: f64,
}

impl LumpSum {
    pub fn new(month: u32, amount: f64) -> Self {
        Self { month, amount }
    }
}

/// Everything the engine needs to project one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    /// Lump sum invested before month 1
    pub initial_amount: f64,

    /// Base monthly contribution for year 1
    pub monthly_contribution: f64,

    /// Number of months to project
    pub horizon_months: u32,

    /// Nominal annual return (decimal, may be negative)
    pub annual_return: f64,

    /// Yearly step-up of the monthly contribution
    #[serde(default)]
    pub contribution_growth: Option<f64>,

    /// Annual inflation used for the real series
    #[serde(default)]
    pub inflation: Option<f64>,

    /// One-time injections, sorted by month
    #[serde(default)]
    pub lump_sums: Vec<LumpSum>,

    /// Calendar month of projection month 1 (labels only)
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl InvestmentParameters {
    pub fn new(
        initial_amount: f64,
        monthly_contribution: f64,
        horizon_months: u32,
        annual_return: f64,
    ) -> Self {
        Self {
            initial_amount,
            monthly_contribution,
            horizon_months,
            annual_return,
            contribution_growth: None,
            inflation: None,
            lump_sums: Vec::new(),
            start_date: None,
        }
    }

    pub fn with_contribution_growth(mut self, rate: f64) -> Self {
        self.contribution_growth = Some(rate);
        self
    }

    pub fn with_inflation(mut self, rate: f64) -> Self {
        self.inflation = Some(rate);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Add a lump sum, keeping the schedule ordered by month
    pub fn with_lump_sum(mut self, month: u32, amount: f64) -> Self {
        self.add_lump_sum(LumpSum::new(month, amount));
        self
    }

    pub fn add_lump_sum(&mut self, lump: LumpSum) {
        let idx = self.lump_sums.partition_point(|l| l.month <= lump.month);
        self.lump_sums.insert(idx, lump);
    }

    /// Re-establish month order after the schedule was filled directly
    pub fn sort_lump_sums(&mut self) {
        self.lump_sums.sort_by_key(|l| l.month);
    }

    /// Monthly rate as the nominal annual rate divided by 12 (not the geometric equivalent)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return / 12.0
    }

    /// Plan year containing the given month (1-indexed)
    pub fn year_of_month(month: u32) -> u32 {
        month.saturating_sub(1) / 12 + 1
    }

    /// Regular contribution for every month of plan year `year`
    pub fn contribution_for_year(&self, year: u32) -> f64 {
        let growth = self.contribution_growth.unwrap_or(0.0);
        let elapsed = year.saturating_sub(1);
        self.monthly_contribution * (1.0 + growth).powi(elapsed as i32)
    }

    /// Total of lump sums scheduled for `month`
    pub fn lump_sum_for_month(&self, month: u32) -> f64 {
        self.lump_sums
            .iter()
            .filter(|l| l.month == month)
            .map(|l| l.amount)
            .sum()
    }

    /// Check the structural invariants the engine relies on
    pub fn validate(&self) -> Result<()> {
        check_amount("initial_amount", self.initial_amount)?;
        check_amount("monthly_contribution", self.monthly_contribution)?;

        if self.horizon_months == 0 {
            return Err(ProjectionError::invalid(
                "horizon_months",
                "must be at least one month",
            ));
        }
        if self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(ProjectionError::invalid(
                "horizon_months",
                format!("must not exceed {} months", MAX_HORIZON_MONTHS),
            ));
        }

        if !self.annual_return.is_finite() {
            return Err(ProjectionError::invalid("annual_return", "must be a finite number"));
        }
        // Monthly growth factor 1 + r/12 has to stay positive
        if self.annual_return <= -12.0 {
            return Err(ProjectionError::invalid(
                "annual_return",
                "monthly growth factor would not be positive",
            ));
        }

        if let Some(rate) = self.contribution_growth {
            check_rate("contribution_growth", rate)?;
        }
        if let Some(rate) = self.inflation {
            check_rate("inflation", rate)?;
        }

        if self.lump_sums.len() > MAX_LUMP_SUMS {
            return Err(ProjectionError::TooManyLumpSums {
                count: self.lump_sums.len(),
                max: MAX_LUMP_SUMS,
            });
        }
        for lump in &self.lump_sums {
            if lump.month == 0 || lump.month > self.horizon_months {
                return Err(ProjectionError::LumpSumOutsideHorizon {
                    month: lump.month,
                    horizon: self.horizon_months,
                });
            }
            check_amount("lump_sums.amount", lump.amount)?;
        }

        Ok(())
    }
}

impl Default for InvestmentParameters {
    fn default() -> Self {
        Self::new(
            DEFAULT_INITIAL_AMOUNT,
            DEFAULT_MONTHLY_CONTRIBUTION,
            DEFAULT_HORIZON_YEARS * 12,
            DEFAULT_ANNUAL_RETURN,
        )
        .with_contribution_growth(DEFAULT_CONTRIBUTION_GROWTH)
    }
}

fn check_amount(field: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(ProjectionError::invalid(field, "must be a finite number"));
    }
    if amount < 0.0 {
        return Err(ProjectionError::invalid(field, "must not be negative"));
    }
    Ok(())
}

fn check_rate(field: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(ProjectionError::invalid(field, "must be a non-negative decimal rate"));
    }
    Ok(())
}
