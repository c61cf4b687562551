//! Comparator - scores two passwords under one policy and reports the change.

use secrecy::SecretString;

use crate::error::ScoreError;
use crate::evaluator::compute_score;
use crate::validator::PolicyOptions;

/// Change between two scores.
///
/// `difference` is the percentage change relative to the old score and
/// `difference_percentage` is the plain ratio `new / old`, both rounded to
/// two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonResult {
    pub old_password_score: i64,
    pub new_password_score: i64,
    pub difference: f64,
    pub difference_percentage: f64,
}

/// Compares two already computed scores.
///
/// # Errors
/// Returns [`ScoreError::ZeroBaseline`] when `old_score` is 0.
pub fn compare_scores(old_score: i64, new_score: i64) -> Result<ComparisonResult, ScoreError> {
    if old_score == 0 {
        return Err(ScoreError::ZeroBaseline);
    }
    let old = old_score as f64;
    let new = new_score as f64;

    Ok(ComparisonResult {
        old_password_score: old_score,
        new_password_score: new_score,
        difference: round2((new - old) / old * 100.0),
        difference_percentage: round2(new / old),
    })
}

/// Scores both passwords under `policy` and compares them.
///
/// A password rejected by the policy takes part with the `-1` sentinel.
pub fn compare_password(
    old_password: &SecretString,
    new_password: &SecretString,
    policy: Option<&PolicyOptions>,
) -> Result<ComparisonResult, ScoreError> {
    let old = compute_score(old_password, policy);
    let new = compute_score(new_password, policy);
    compare_scores(old.score, new.score)
}

/// Rounds half up to two decimals.
fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
