//! CSV export of month and year tables
//!
//! Currency columns are rounded to cents and ROI is written in percent,
//! the layout of the calculator's data download.

use chrono::{Months, NaiveDate};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::projection::{MonthRecord, RealMonthRecord, YearSummary};

const MONTH_HEADER: [&str; 6] = [
    "Month",
    "Date",
    "Contribution",
    "Total Contributions",
    "Total Value",
    "Investment Gain",
];

const YEAR_HEADER: [&str; 8] = [
    "Year",
    "Months",
    "Yearly Contribution",
    "Total Contributions",
    "Total Value",
    "Investment Gain",
    "Yearly Gain",
    "ROI (%)",
];

const REAL_MONTH_HEADER: [&str; 6] = [
    "Month",
    "Deflator",
    "Real Contribution",
    "Real Total Contributions",
    "Real Total Value",
    "Real Investment Gain",
];

#[derive(Debug, Serialize)]
struct MonthRow {
    month: u32,
    date: Option<String>,
    contribution: f64,
    cumulative_contributions: f64,
    balance: f64,
    gain: f64,
}

#[derive(Debug, Serialize)]
struct YearRow {
    year: u32,
    months: u32,
    contributions: f64,
    cumulative_contributions: f64,
    ending_balance: f64,
    cumulative_gain: f64,
    gain_in_year: f64,
    roi_pct: Option<f64>,
}

#[derive(Debug, Serialize)]
struct RealMonthRow {
    month: u32,
    deflator: f64,
    contribution: f64,
    cumulative_contributions: f64,
    balance: f64,
    gain: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calendar label (`YYYY-MM`) of projection month `month`
pub fn month_label(start: NaiveDate, month: u32) -> Option<String> {
    start
        .checked_add_months(Months::new(month.saturating_sub(1)))
        .map(|date| date.format("%Y-%m").to_string())
}

/// Write the nominal month ledger with a header row
pub fn write_months<W: Write>(
    writer: W,
    records: &[MonthRecord],
    start_date: Option<NaiveDate>,
) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(MONTH_HEADER)?;

    for record in records {
        wtr.serialize(MonthRow {
            month: record.month,
            date: start_date.and_then(|start| month_label(start, record.month)),
            contribution: round2(record.contribution),
            cumulative_contributions: round2(record.cumulative_contributions),
            balance: round2(record.balance),
            gain: round2(record.gain),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write yearly summaries with a header row
pub fn write_years<W: Write>(writer: W, years: &[YearSummary]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(YEAR_HEADER)?;

    for summary in years {
        wtr.serialize(YearRow {
            year: summary.year,
            months: summary.months,
            contributions: round2(summary.contributions),
            cumulative_contributions: round2(summary.cumulative_contributions),
            ending_balance: round2(summary.ending_balance),
            cumulative_gain: round2(summary.cumulative_gain),
            gain_in_year: round2(summary.gain_in_year),
            roi_pct: summary.roi.map(|roi| round2(roi * 100.0)),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the inflation-adjusted ledger with a header row
pub fn write_real_months<W: Write>(writer: W, records: &[RealMonthRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(REAL_MONTH_HEADER)?;

    for record in records {
        wtr.serialize(RealMonthRow {
            month: record.month,
            deflator: record.deflator,
            contribution: round2(record.contribution),
            cumulative_contributions: round2(record.cumulative_contributions),
            balance: round2(record.balance),
            gain: round2(record.gain),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_months_to_path<P: AsRef<Path>>(
    path: P,
    records: &[MonthRecord],
    start_date: Option<NaiveDate>,
) -> Result<()> {
    write_months(File::create(path)?, records, start_date)
}

pub fn write_years_to_path<P: AsRef<Path>>(path: P, years: &[YearSummary]) -> Result<()> {
    write_years(File::create(path)?, years)
}

pub fn write_real_months_to_path<P: AsRef<Path>>(path: P, records: &[RealMonthRecord]) -> Result<()> {
    write_real_months(File::create(path)?, records)
}
