//! Static return-rate presets
//!
//! Long-run averages used as selectable assumptions. These are fixed
//! configuration values, not market data.

use serde::{Deserialize, Serialize};

/// Named annual return assumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RatePreset {
    /// Bond-heavy portfolio
    Conservative,
    /// 60/40 style mix
    Balanced,
    /// S&P 500 long-run average after inflation
    Sp500Real,
    /// S&P 500 long-run nominal average with dividends reinvested
    Sp500Nominal,
}

impl RatePreset {
    pub const ALL: [RatePreset; 4] = [
        RatePreset::Conservative,
        RatePreset::Balanced,
        RatePreset::Sp500Real,
        RatePreset::Sp500Nominal,
    ];

    /// Annual rate as a decimal
    pub fn annual_rate(self) -> f64 {
        match self {
            RatePreset::Conservative => 0.04,
            RatePreset::Balanced => 0.06,
            RatePreset::Sp500Real => 0.07,
            RatePreset::Sp500Nominal => 0.10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatePreset::Conservative => "Conservative",
            RatePreset::Balanced => "Balanced",
            RatePreset::Sp500Real => "S&P 500 (real)",
            RatePreset::Sp500Nominal => "S&P 500 (nominal)",
        }
    }
}

/// Either a preset or a user-supplied annual rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnRate {
    Preset(RatePreset),
    Custom(f64),
}

impl ReturnRate {
    pub fn annual_rate(&self) -> f64 {
        match self {
            ReturnRate::Preset(preset) => preset.annual_rate(),
            ReturnRate::Custom(rate) => *rate,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ReturnRate::Preset(preset) => preset.label().to_string(),
            ReturnRate::Custom(rate) => format!("Custom {:.2}%", rate * 100.0),
        }
    }
}

impl From<RatePreset> for ReturnRate {
    fn from(preset: RatePreset) -> Self {
        ReturnRate::Preset(preset)
    }
}
