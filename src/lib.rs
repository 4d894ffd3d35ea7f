//! Investment Projection - monthly growth projection for periodic investment plans
//!
//! This library provides:
//! - A pure monthly projection engine (initial amount, growing contributions, lump sums)
//! - Inflation-adjusted (real) series as a separate pass
//! - Yearly summaries and headline metrics (ROI, CAGR)
//! - Static return-rate presets and multi-rate scenario runs
//! - CSV export of month and year tables

pub mod error;
pub mod params;
pub mod rates;
pub mod projection;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::ProjectionError;
pub use params::{InvestmentParameters, LumpSum};
pub use projection::{MonthRecord, Projection, ProjectionEngine, ProjectionMetrics, YearSummary};
pub use rates::{RatePreset, ReturnRate};
pub use scenario::ScenarioRunner;
