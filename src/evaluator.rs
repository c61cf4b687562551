//! Scoring pipeline - validates against the policy, then sums the metrics.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::metrics::total_score;
use crate::validator::{validate_password, PolicyOptions};

/// Score reported when a password fails validation.
pub const NOT_COMPUTED: i64 = -1;

/// Outcome of one scoring pass.
///
/// `errors` is empty exactly when `score` was computed; otherwise `score` is
/// [`NOT_COMPUTED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i64,
    pub errors: Vec<String>,
}

impl ScoreResult {
    fn rejected(errors: Vec<String>) -> Self {
        Self {
            score: NOT_COMPUTED,
            errors,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates `password` against `policy` and, if it passes, scores it.
///
/// # Arguments
/// * `password` - The password to score
/// * `policy` - Optional constraints; the empty-password check applies regardless
///
/// # Returns
/// A `ScoreResult` holding either the metric sum or the policy violations.
pub fn compute_score(password: &SecretString, policy: Option<&PolicyOptions>) -> ScoreResult {
    let pwd = password.expose_secret();

    let errors = validate_password(pwd, policy);
    if !errors.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Password rejected by policy with {} violation(s)", errors.len());
        return ScoreResult::rejected(errors);
    }

    let score = total_score(pwd);

    #[cfg(feature = "tracing")]
    tracing::debug!("Password scored {}", score);

    ScoreResult {
        score,
        errors: Vec::new(),
    }
}

/// Async version that debounces, then sends the result via channel.
///
/// If `token` is cancelled before scoring starts, the result carries the
/// single error `"Evaluation cancelled"`.
#[cfg(feature = "async")]
pub async fn compute_score_tx(
    password: &SecretString,
    policy: Option<&PolicyOptions>,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("scoring is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    let result = if token.is_cancelled() {
        ScoreResult::rejected(vec!["Evaluation cancelled".to_string()])
    } else {
        compute_score(password, policy)
    };

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password score: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
