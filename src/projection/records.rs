//! Output structures for projections

use serde::{Deserialize, Serialize};

use super::summary::{summarize, ProjectionMetrics, YearSummary};
use crate::params::InvestmentParameters;

/// One month of the nominal ledger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub month: u32,

    /// Regular contribution plus any lump sum applied this month
    pub contribution: f64,

    /// Initial amount plus all contributions to date
    pub cumulative_contributions: f64,

    /// Balance at month end
    pub balance: f64,

    /// Balance minus cumulative contributions
    pub gain: f64,
}

impl MonthRecord {
    pub fn year(&self) -> u32 {
        InvestmentParameters::year_of_month(self.month)
    }
}

/// One month of the inflation-adjusted series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealMonthRecord {
    pub month: u32,

    /// Cumulative price level, (1 + inflation/12)^month
    pub deflator: f64,

    pub contribution: f64,
    pub cumulative_contributions: f64,
    pub balance: f64,
    pub gain: f64,
}

/// Complete result of one projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// Parameters the run was computed from
    pub parameters: InvestmentParameters,

    /// Nominal ledger, one record per month
    pub months: Vec<MonthRecord>,

    /// Real ledger, present when an inflation rate was supplied
    pub real_months: Option<Vec<RealMonthRecord>>,
}

impl Projection {
    /// Balance after the last month, or the initial amount for an empty horizon
    pub fn terminal_balance(&self) -> f64 {
        self.months
            .last()
            .map(|r| r.balance)
            .unwrap_or(self.parameters.initial_amount)
    }

    pub fn total_contributed(&self) -> f64 {
        self.months
            .last()
            .map(|r| r.cumulative_contributions)
            .unwrap_or(self.parameters.initial_amount)
    }

    pub fn real_terminal_balance(&self) -> Option<f64> {
        let real = self.real_months.as_ref()?;
        Some(real.last().map(|r| r.balance).unwrap_or(self.parameters.initial_amount))
    }

    /// Yearly view of the nominal ledger
    pub fn years(&self) -> Vec<YearSummary> {
        summarize(&self.months)
    }

    pub fn metrics(&self) -> ProjectionMetrics {
        ProjectionMetrics::from_projection(self)
    }
}
