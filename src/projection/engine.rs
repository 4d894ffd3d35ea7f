//! Core projection engine for monthly contribution plans

use log::{debug, warn};

use super::inflation::deflate;
use super::records::{MonthRecord, Projection};
use super::state::ProjectionState;
use crate::params::InvestmentParameters;

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: InvestmentParameters,
}

impl ProjectionEngine {
    /// Create a new projection engine for the given plan
    pub fn new(params: InvestmentParameters) -> Self {
        Self { params }
    }

    /// Run the nominal projection and, if inflation is set, the real pass over it
    pub fn project(&self) -> Projection {
        let months = self.project_months();
        let real_months = self.params.inflation.map(|rate| deflate(&months, rate));

        if let Some(last) = months.last() {
            debug!(
                "Projected {} months: balance {:.2}, contributed {:.2}",
                months.len(),
                last.balance,
                last.cumulative_contributions
            );
        }

        Projection {
            parameters: self.params.clone(),
            months,
            real_months,
        }
    }

    /// Nominal ledger, one record per month
    pub fn project_months(&self) -> Vec<MonthRecord> {
        let horizon = self.params.horizon_months;

        for lump in &self.params.lump_sums {
            if lump.month == 0 || lump.month > horizon {
                warn!(
                    "Lump sum of {:.2} at month {} is outside the {}-month horizon and is ignored",
                    lump.amount, lump.month, horizon
                );
            }
        }

        let mut state = ProjectionState::from_parameters(&self.params);
        let mut records = Vec::with_capacity(horizon as usize);

        for _month in 1..=horizon {
            state.advance_month();
            records.push(self.calculate_month(&mut state));
        }

        records
    }

    /// Apply one month of growth and contributions
    fn calculate_month(&self, state: &mut ProjectionState) -> MonthRecord {
        let contribution = self.params.contribution_for_year(state.year)
            + self.params.lump_sum_for_month(state.month);

        // Contribution lands at month end and earns nothing this month
        state.balance = state.balance * (1.0 + self.params.monthly_rate()) + contribution;
        state.cumulative_contributions += contribution;

        MonthRecord {
            month: state.month,
            contribution,
            cumulative_contributions: state.cumulative_contributions,
            balance: state.balance,
            gain: state.gain(),
        }
    }
}

/// Project a plan and return only the nominal month ledger
pub fn project(params: &InvestmentParameters) -> Vec<MonthRecord> {
    ProjectionEngine::new(params.clone()).project_months()
}
