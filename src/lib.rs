//! Password scoring library
//!
//! This library computes a heuristic strength score for a password,
//! validates it against a configurable policy, estimates brute-force crack
//! time, classifies scores into strength labels and compares two passwords.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async scoring with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_score::{compute_score, get_strength, PolicyOptions, StrengthLabel, StrengthScale};
//! use secrecy::SecretString;
//!
//! let policy = PolicyOptions::default().with_min_length(8);
//! let password = SecretString::new("Passw0rd!".to_string().into());
//!
//! let result = compute_score(&password, Some(&policy));
//! assert_eq!(result.score, 95);
//!
//! let strength = get_strength(result.score, &StrengthScale::default()).unwrap();
//! assert_eq!(strength, StrengthLabel::Good);
//! ```

// Internal modules
mod compare;
mod crack_time;
mod error;
mod evaluator;
mod metrics;
mod scan;
mod strength;
mod validator;

// Public API
pub use compare::{compare_password, compare_scores, ComparisonResult};
pub use crack_time::{
    calculate_crack_time, format_duration, CrackTimeOptions, CrackTimeResult,
    DEFAULT_GUESSES_PER_SECOND, DEFAULT_POSSIBLE_CHARACTERS,
};
pub use error::ScoreError;
pub use evaluator::{compute_score, ScoreResult, NOT_COMPUTED};
pub use metrics::{metric_breakdown, MetricValue};
pub use strength::{get_strength, StrengthLabel, StrengthScale};
pub use validator::{validate_password, PolicyOptions, Violation};

#[cfg(feature = "async")]
pub use evaluator::compute_score_tx;
