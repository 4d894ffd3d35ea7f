//! Yearly aggregation and summary metrics

use serde::{Deserialize, Serialize};

use super::records::{MonthRecord, Projection};

pub const MONTHS_PER_YEAR: usize = 12;

/// One plan year of the ledger (the last year may be partial)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,

    /// Months in this bucket (12 except possibly the last)
    pub months: u32,

    /// Contributions applied during the year, lump sums included
    pub contributions: f64,

    pub cumulative_contributions: f64,
    pub ending_balance: f64,
    pub cumulative_gain: f64,

    /// Change in cumulative gain over the year
    pub gain_in_year: f64,

    /// Cumulative gain / cumulative contributions at year end
    pub roi: Option<f64>,
}

/// Group month records into consecutive 12-month buckets
pub fn summarize(records: &[MonthRecord]) -> Vec<YearSummary> {
    let mut summaries = Vec::with_capacity(records.len().div_ceil(MONTHS_PER_YEAR));
    let mut prior_gain = 0.0;

    for (idx, chunk) in records.chunks(MONTHS_PER_YEAR).enumerate() {
        let Some(last) = chunk.last() else { continue };

        summaries.push(YearSummary {
            year: idx as u32 + 1,
            months: chunk.len() as u32,
            contributions: chunk.iter().map(|r| r.contribution).sum(),
            cumulative_contributions: last.cumulative_contributions,
            ending_balance: last.balance,
            cumulative_gain: last.gain,
            gain_in_year: last.gain - prior_gain,
            roi: ratio(last.gain, last.cumulative_contributions),
        });
        prior_gain = last.gain;
    }

    summaries
}

/// Headline figures for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMetrics {
    pub horizon_months: u32,
    pub final_balance: f64,
    pub total_contributed: f64,
    pub total_gain: f64,

    /// None when nothing was contributed
    pub roi: Option<f64>,

    /// None when the initial investment is zero or the horizon is empty
    pub cagr: Option<f64>,

    /// Shares of the final balance; None when the final balance is zero
    pub contribution_share: Option<f64>,
    pub gain_share: Option<f64>,

    /// Final balance in today's money, when inflation is modelled
    pub real_final_balance: Option<f64>,
}

impl ProjectionMetrics {
    pub fn from_projection(projection: &Projection) -> Self {
        let params = &projection.parameters;
        let final_balance = projection.terminal_balance();
        let total_contributed = projection.total_contributed();
        let total_gain = final_balance - total_contributed;

        let initial_invested = params.initial_amount
            + projection.months.first().map(|r| r.contribution).unwrap_or(0.0);

        Self {
            horizon_months: projection.months.len() as u32,
            final_balance,
            total_contributed,
            total_gain,
            roi: roi(final_balance, total_contributed),
            cagr: cagr(final_balance, initial_invested, projection.months.len() as u32),
            contribution_share: ratio(total_contributed, final_balance),
            gain_share: ratio(total_gain, final_balance),
            real_final_balance: projection.real_terminal_balance(),
        }
    }
}

/// (final − contributed) / contributed
pub fn roi(final_balance: f64, total_contributed: f64) -> Option<f64> {
    ratio(final_balance - total_contributed, total_contributed)
}

/// (final / initial)^(12 / months) − 1
pub fn cagr(final_balance: f64, initial_invested: f64, horizon_months: u32) -> Option<f64> {
    if horizon_months == 0 || initial_invested <= 0.0 {
        return None;
    }
    let growth = final_balance / initial_invested;
    if !growth.is_finite() || growth <= 0.0 {
        return None;
    }
    Some(growth.powf(12.0 / horizon_months as f64) - 1.0)
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::InvestmentParameters;
    use crate::projection::{project, ProjectionEngine};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_thirty_months_make_three_years() {
        let params = InvestmentParameters::new(1000.0, 100.0, 30, 0.06).with_contribution_growth(0.05);
        let records = project(&params);
        let years = summarize(&records);

        assert_eq!(years.len(), 3);
        assert_eq!(years.iter().map(|y| y.months).collect::<Vec<_>>(), vec![12, 12, 6]);

        for (summary, chunk) in years.iter().zip(records.chunks(12)) {
            let last = chunk.last().unwrap();
            let contributed: f64 = chunk.iter().map(|r| r.contribution).sum();
            assert_eq!(summary.ending_balance, last.balance);
            assert_eq!(summary.cumulative_gain, last.gain);
            assert_abs_diff_eq!(summary.contributions, contributed, epsilon = 1e-9);
        }

        assert_abs_diff_eq!(years[0].contributions, 1200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(years[1].contributions, 1260.0, epsilon = 1e-9);
        assert_abs_diff_eq!(years[2].contributions, 6.0 * 110.25, epsilon = 1e-9);
    }

    #[test]
    fn test_year_gain_and_roi() {
        let records = project(&InvestmentParameters::new(1000.0, 100.0, 24, 0.12));
        let years = summarize(&records);

        assert_abs_diff_eq!(years[0].gain_in_year, records[11].gain, epsilon = 1e-9);
        assert_abs_diff_eq!(
            years[1].gain_in_year,
            records[23].gain - records[11].gain,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            years[1].roi.unwrap(),
            records[23].gain / records[23].cumulative_contributions,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_empty_ledger_has_no_years() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_metrics_for_reference_plan() {
        let projection = ProjectionEngine::new(InvestmentParameters::new(1000.0, 0.0, 12, 0.12)).project();
        let metrics = projection.metrics();

        assert_relative_eq!(metrics.final_balance, 1000.0 * 1.01_f64.powi(12), max_relative = 1e-12);
        assert_eq!(metrics.total_contributed, 1000.0);
        assert_relative_eq!(metrics.roi.unwrap(), 1.01_f64.powi(12) - 1.0, max_relative = 1e-9);
        assert_relative_eq!(metrics.cagr.unwrap(), 1.01_f64.powi(12) - 1.0, max_relative = 1e-9);
        assert!(metrics.real_final_balance.is_none());
    }

    #[test]
    fn test_cagr_not_applicable_without_initial_investment() {
        let projection = ProjectionEngine::new(
            InvestmentParameters::new(0.0, 0.0, 24, 0.08).with_lump_sum(12, 1000.0),
        )
        .project();
        let metrics = projection.metrics();

        assert!(metrics.cagr.is_none());
        assert!(metrics.roi.is_some());
    }

    #[test]
    fn test_cagr_counts_first_month_contribution() {
        let projection = ProjectionEngine::new(InvestmentParameters::new(0.0, 100.0, 24, 0.0)).project();
        let metrics = projection.metrics();

        // 2400 from an initial 100 over two years
        assert_relative_eq!(metrics.cagr.unwrap(), 24.0_f64.sqrt() - 1.0, max_relative = 1e-12);
        assert_abs_diff_eq!(metrics.roi.unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_metrics_for_empty_plan() {
        let projection = ProjectionEngine::new(InvestmentParameters::new(0.0, 0.0, 0, 0.05)).project();
        let metrics = projection.metrics();

        assert_eq!(metrics.final_balance, 0.0);
        assert!(metrics.roi.is_none());
        assert!(metrics.cagr.is_none());
        assert!(metrics.contribution_share.is_none());
    }

    #[test]
    fn test_shares_and_real_balance() {
        let projection = ProjectionEngine::new(
            InvestmentParameters::new(1000.0, 100.0, 60, 0.07).with_inflation(0.02),
        )
        .project();
        let metrics = projection.metrics();

        assert_relative_eq!(
            metrics.contribution_share.unwrap() + metrics.gain_share.unwrap(),
            1.0,
            max_relative = 1e-12
        );
        assert!(metrics.real_final_balance.unwrap() < metrics.final_balance);
    }

    #[test]
    fn test_cagr_rejects_non_positive_growth() {
        assert!(cagr(0.0, 100.0, 12).is_none());
        assert!(cagr(100.0, 0.0, 12).is_none());
        assert!(cagr(100.0, 100.0, 0).is_none());
        assert_abs_diff_eq!(cagr(121.0, 100.0, 24).unwrap(), 0.1, epsilon = 1e-12);
    }
}
