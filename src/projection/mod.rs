//! Projection engine for monthly contribution plans

mod state;
mod engine;
mod records;
mod inflation;
mod summary;

pub use state::ProjectionState;
pub use engine::{project, ProjectionEngine};
pub use records::{MonthRecord, Projection, RealMonthRecord};
pub use inflation::deflate;
pub use summary::{cagr, roi, summarize, ProjectionMetrics, YearSummary, MONTHS_PER_YEAR};
