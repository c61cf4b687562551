//! Error type for configuration and comparison failures.
//!
//! Policy violations are not errors: they are reported inside
//! [`crate::ScoreResult`].

use thiserror::Error;

use crate::strength::StrengthLabel;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Strength scale must have exactly 6 thresholds, found {found}")]
    ThresholdCount { found: usize },
    #[error("Strength scale threshold {threshold} must map to \"{expected}\", found \"{found}\"")]
    ThresholdLabel {
        threshold: i64,
        expected: StrengthLabel,
        found: StrengthLabel,
    },
    #[error("Strength scale fallback must map to \"Invalid\", found \"{found}\"")]
    FallbackLabel { found: StrengthLabel },
    #[error("Unknown strength label: {0}")]
    UnknownLabel(String),
    #[error("Cannot compare against a zero-score baseline")]
    ZeroBaseline,
    #[error("Guesses per second must be a positive finite number, got {0}")]
    InvalidGuessRate(f64),
}
