//! Plan parameters, validation and file loading

mod data;
pub mod loader;

pub use data::{
    InvestmentParameters, LumpSum, DEFAULT_ANNUAL_RETURN, DEFAULT_CONTRIBUTION_GROWTH,
    DEFAULT_HORIZON_YEARS, DEFAULT_INITIAL_AMOUNT, DEFAULT_MONTHLY_CONTRIBUTION,
    MAX_HORIZON_MONTHS, MAX_LUMP_SUMS,
};
pub use loader::{load_lump_sums, load_lump_sums_from_reader, load_parameters, load_parameters_from_reader};
