//! Inflation adjustment of a nominal ledger

use super::records::{MonthRecord, RealMonthRecord};

/// Deflate every nominal value of month m by (1 + inflation/12)^m.
///
/// Runs as a separate pass; the nominal records are left untouched.
pub fn deflate(records: &[MonthRecord], annual_inflation: f64) -> Vec<RealMonthRecord> {
    let monthly_factor = 1.0 + annual_inflation / 12.0;

    records
        .iter()
        .map(|record| {
            let deflator = monthly_factor.powi(record.month as i32);
            RealMonthRecord {
                month: record.month,
                deflator,
                contribution: record.contribution / deflator,
                cumulative_contributions: record.cumulative_contributions / deflator,
                balance: record.balance / deflator,
                gain: record.gain / deflator,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::InvestmentParameters;
    use crate::projection::project;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_inflation_is_identity() {
        let records = project(&InvestmentParameters::new(1000.0, 50.0, 18, 0.07));
        let real = deflate(&records, 0.0);

        for (nominal, real) in records.iter().zip(&real) {
            assert_eq!(real.deflator, 1.0);
            assert_eq!(real.balance, nominal.balance);
            assert_eq!(real.cumulative_contributions, nominal.cumulative_contributions);
        }
    }

    #[test]
    fn test_deflator_compounds_monthly() {
        let records = project(&InvestmentParameters::new(1000.0, 100.0, 24, 0.08));
        let real = deflate(&records, 0.024);

        assert_relative_eq!(real[0].deflator, 1.002, max_relative = 1e-12);
        assert_relative_eq!(real[23].deflator, 1.002_f64.powi(24), max_relative = 1e-12);
        assert_relative_eq!(real[23].balance, records[23].balance / 1.002_f64.powi(24), max_relative = 1e-12);
        assert_relative_eq!(
            real[23].gain,
            real[23].balance - real[23].cumulative_contributions,
            max_relative = 1e-9
        );
        assert!(real.iter().zip(&records).all(|(r, n)| r.balance < n.balance));
    }

    #[test]
    fn test_empty_ledger() {
        assert!(deflate(&[], 0.03).is_empty());
    }
}
