//! Scenario runner for comparing return assumptions
//!
//! Holds one base plan and projects it under many rates, or projects a
//! batch of independent plans. Runs share nothing and execute in parallel.

use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::params::InvestmentParameters;
use crate::projection::{Projection, ProjectionEngine, ProjectionMetrics};
use crate::rates::{RatePreset, ReturnRate};

/// Result of one rate scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub label: String,
    pub annual_return: f64,
    pub metrics: ProjectionMetrics,
}

/// Runner for batch projections of a base plan
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(InvestmentParameters::default());
/// for outcome in runner.run_presets() {
///     println!("{}: {:.2}", outcome.label, outcome.metrics.final_balance);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: InvestmentParameters,
}

impl ScenarioRunner {
    pub fn new(base: InvestmentParameters) -> Self {
        Self { base }
    }

    pub fn parameters(&self) -> &InvestmentParameters {
        &self.base
    }

    /// Project the base plan as configured
    pub fn run(&self) -> Projection {
        ProjectionEngine::new(self.base.clone()).project()
    }

    /// Project the base plan once per rate; outcomes keep input order
    pub fn run_rates(&self, rates: &[ReturnRate]) -> Vec<ScenarioOutcome> {
        info!("Running {} rate scenarios over {} months", rates.len(), self.base.horizon_months);

        rates
            .par_iter()
            .map(|rate| {
                let mut params = self.base.clone();
                params.annual_return = rate.annual_rate();
                let projection = ProjectionEngine::new(params).project();
                ScenarioOutcome {
                    label: rate.label(),
                    annual_return: rate.annual_rate(),
                    metrics: projection.metrics(),
                }
            })
            .collect()
    }

    /// Project the base plan under every preset
    pub fn run_presets(&self) -> Vec<ScenarioOutcome> {
        let rates: Vec<ReturnRate> = RatePreset::ALL.iter().map(|&p| p.into()).collect();
        self.run_rates(&rates)
    }

    /// Project independent plans; results keep input order
    pub fn run_batch(plans: &[InvestmentParameters]) -> Vec<Projection> {
        info!("Running batch of {} plans", plans.len());

        plans
            .par_iter()
            .map(|params| ProjectionEngine::new(params.clone()).project())
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(InvestmentParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_scenarios_keep_order() {
        let runner = ScenarioRunner::new(InvestmentParameters::new(1000.0, 100.0, 120, 0.0));
        let rates = [ReturnRate::Custom(0.03), ReturnRate::Custom(0.05), ReturnRate::Custom(0.07)];

        let outcomes = runner.run_rates(&rates);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].annual_return, 0.03);
        assert_eq!(outcomes[2].label, "Custom 7.00%");

        // Higher rate should result in higher final balance
        assert!(outcomes[2].metrics.final_balance > outcomes[1].metrics.final_balance);
        assert!(outcomes[1].metrics.final_balance > outcomes[0].metrics.final_balance);
        // Contributions do not depend on the rate
        assert_eq!(outcomes[0].metrics.total_contributed, outcomes[2].metrics.total_contributed);
    }

    #[test]
    fn test_presets_cover_all() {
        let outcomes = ScenarioRunner::default().run_presets();
        let labels: Vec<&str> = outcomes.iter().map(|o| o.label.as_str()).collect();
        let expected: Vec<&str> = RatePreset::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let plans = vec![
            InvestmentParameters::new(0.0, 50.0, 12, 0.05),
            InvestmentParameters::new(5000.0, 0.0, 36, 0.08).with_inflation(0.02),
        ];

        let results = ScenarioRunner::run_batch(&plans);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].months.len(), 12);
        assert!(results[1].real_months.is_some());
        let runner = ScenarioRunner::new(plans[1].clone());
        assert_eq!(runner.parameters(), &plans[1]);
        assert_eq!(results[1].months, runner.run().months);
    }
}
