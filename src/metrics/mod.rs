//! Scoring metrics
//!
//! Each metric is a pure function of the password text returning a signed
//! contribution. Metrics never depend on each other; the score is their sum.

mod additive;
mod dates;
mod deductive;
mod patterns;

use additive::*;
use deductive::*;

/// Signature shared by every metric.
pub type Metric = fn(&str) -> i64;

/// Every metric in evaluation order: 8 additive, then 11 deductive.
pub const METRICS: &[(&str, Metric)] = &[
    ("character_volume", character_volume),
    ("uppercase_contribution", uppercase_contribution),
    ("lowercase_contribution", lowercase_contribution),
    ("digit_contribution", digit_contribution),
    ("symbol_contribution", symbol_contribution),
    ("middle_bonus", middle_bonus),
    ("requirements_bonus", requirements_bonus),
    ("entropy_bonus", entropy_bonus),
    ("letters_only", letters_only),
    ("digits_only", digits_only),
    ("consecutive_uppercase", consecutive_uppercase),
    ("consecutive_lowercase", consecutive_lowercase),
    ("consecutive_digits", consecutive_digits),
    ("sequential_letters", sequential_letters),
    ("sequential_digits", sequential_digits),
    ("sequential_symbols", sequential_symbols),
    ("repeated_characters", repeated_characters),
    ("date_patterns", date_patterns),
    ("keyboard_patterns", keyboard_patterns),
];

/// One metric's contribution to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricValue {
    pub name: &'static str,
    pub value: i64,
}

/// Evaluates every metric against `password`, in table order.
///
/// No policy check happens here; callers wanting the sentinel behavior for
/// empty or non-conforming passwords go through [`crate::compute_score`].
pub fn metric_breakdown(password: &str) -> Vec<MetricValue> {
    METRICS
        .iter()
        .map(|&(name, metric)| MetricValue {
            name,
            value: metric(password),
        })
        .collect()
}

/// Sum of all metric values.
pub(crate) fn total_score(password: &str) -> i64 {
    METRICS.iter().map(|&(_, metric)| metric(password)).sum()
}
