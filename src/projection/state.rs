//! Running state of a plan during projection

use crate::params::InvestmentParameters;

/// State of the plan at the end of the last processed month
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Plan year (1-indexed)
    pub year: u32,

    /// Month within plan year (1-12)
    pub month_in_year: u32,

    /// Balance at month end
    pub balance: f64,

    /// Initial amount plus every contribution applied so far
    pub cumulative_contributions: f64,
}

impl ProjectionState {
    /// Initialize state before month 1
    pub fn from_parameters(params: &InvestmentParameters) -> Self {
        Self {
            month: 0,
            year: 1,
            month_in_year: 0,
            balance: params.initial_amount,
            cumulative_contributions: params.initial_amount,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.year = InvestmentParameters::year_of_month(self.month);
        self.month_in_year = (self.month - 1) % 12 + 1;
    }

    pub fn gain(&self) -> f64 {
        self.balance - self.cumulative_contributions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_tracks_plan_year() {
        let params = InvestmentParameters::new(500.0, 10.0, 24, 0.05);
        let mut state = ProjectionState::from_parameters(&params);
        assert_eq!(state.gain(), 0.0);

        for _ in 0..13 {
            state.advance_month();
        }
        assert_eq!(state.month, 13);
        assert_eq!(state.year, 2);
        assert_eq!(state.month_in_year, 1);
    }
}
