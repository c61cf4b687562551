//! Strength classifier - maps a score to a label through a caller-supplied
//! threshold table.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ScoreError;

/// Strength labels, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Invalid,
    VeryWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
    Perfect,
}

impl StrengthLabel {
    pub const ALL: [StrengthLabel; 7] = [
        StrengthLabel::Invalid,
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Good,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
        StrengthLabel::Perfect,
    ];

    /// Labels a scale's thresholds must map to, in ascending threshold order.
    pub const GRADED: [StrengthLabel; 6] = [
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Good,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
        StrengthLabel::Perfect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Invalid => "Invalid",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
            StrengthLabel::Perfect => "Perfect",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthLabel {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrengthLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ScoreError::UnknownLabel(s.to_string()))
    }
}

/// Threshold table used by [`get_strength`].
///
/// A score gets the label of the first threshold strictly greater than it;
/// scores at or above every threshold get `fallback`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthScale {
    pub thresholds: BTreeMap<i64, StrengthLabel>,
    pub fallback: StrengthLabel,
}

impl StrengthScale {
    pub fn new<I>(thresholds: I, fallback: StrengthLabel) -> Self
    where
        I: IntoIterator<Item = (i64, StrengthLabel)>,
    {
        Self {
            thresholds: thresholds.into_iter().collect(),
            fallback,
        }
    }

    /// Checks the table shape: six distinct thresholds mapping, in ascending
    /// order, to `Very Weak` through `Perfect`, and an `Invalid` fallback.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.thresholds.len() != StrengthLabel::GRADED.len() {
            return Err(ScoreError::ThresholdCount {
                found: self.thresholds.len(),
            });
        }
        for ((&threshold, &found), expected) in self.thresholds.iter().zip(StrengthLabel::GRADED) {
            if found != expected {
                return Err(ScoreError::ThresholdLabel {
                    threshold,
                    expected,
                    found,
                });
            }
        }
        if self.fallback != StrengthLabel::Invalid {
            return Err(ScoreError::FallbackLabel {
                found: self.fallback,
            });
        }
        Ok(())
    }
}

impl Default for StrengthScale {
    fn default() -> Self {
        Self::new(
            [40, 80, 120, 160, 200, 240]
                .into_iter()
                .zip(StrengthLabel::GRADED),
            StrengthLabel::Invalid,
        )
    }
}

/// Classifies `score` against `scale`.
///
/// The scale is validated first. Negative scores, including the `-1`
/// sentinel, are always `Invalid`.
pub fn get_strength(score: i64, scale: &StrengthScale) -> Result<StrengthLabel, ScoreError> {
    if let Err(e) = scale.validate() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected strength scale: {}", e);
        return Err(e);
    }

    if score < 0 {
        return Ok(StrengthLabel::Invalid);
    }

    Ok(scale
        .thresholds
        .iter()
        .find(|(threshold, _)| **threshold > score)
        .map(|(_, label)| *label)
        .unwrap_or(scale.fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_is_valid() {
        assert_eq!(StrengthScale::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_thresholds() {
        let scale = StrengthScale::default();
        let thresholds: Vec<i64> = scale.thresholds.keys().copied().collect();
        assert_eq!(thresholds, vec![40, 80, 120, 160, 200, 240]);
        assert_eq!(scale.fallback, StrengthLabel::Invalid);
        assert_eq!(get_strength(130, &scale), Ok(StrengthLabel::Strong));
    }

    #[test]
    fn test_buckets_use_strict_upper_bound() {
        let scale = StrengthScale::default();
        assert_eq!(get_strength(0, &scale), Ok(StrengthLabel::VeryWeak));
        assert_eq!(get_strength(39, &scale), Ok(StrengthLabel::VeryWeak));
        assert_eq!(get_strength(40, &scale), Ok(StrengthLabel::Weak));
        assert_eq!(get_strength(95, &scale), Ok(StrengthLabel::Good));
        assert_eq!(get_strength(177, &scale), Ok(StrengthLabel::VeryStrong));
        assert_eq!(get_strength(239, &scale), Ok(StrengthLabel::Perfect));
    }

    #[test]
    fn test_score_above_all_thresholds_gets_fallback() {
        let scale = StrengthScale::default();
        assert_eq!(get_strength(240, &scale), Ok(StrengthLabel::Invalid));
    }

    #[test]
    fn test_negative_score_is_invalid() {
        let scale = StrengthScale::default();
        assert_eq!(get_strength(-5, &scale), Ok(StrengthLabel::Invalid));
        assert_eq!(get_strength(-1, &scale), Ok(StrengthLabel::Invalid));
    }

    #[test]
    fn test_too_few_thresholds() {
        let scale = StrengthScale::new(
            [10, 20, 30, 40, 50].into_iter().zip(StrengthLabel::GRADED),
            StrengthLabel::Invalid,
        );
        assert_eq!(
            get_strength(15, &scale),
            Err(ScoreError::ThresholdCount { found: 5 })
        );
    }

    #[test]
    fn test_duplicate_thresholds_collapse() {
        let scale = StrengthScale::new(
            [10, 10, 30, 40, 50, 60].into_iter().zip(StrengthLabel::GRADED),
            StrengthLabel::Invalid,
        );
        assert!(matches!(
            scale.validate(),
            Err(ScoreError::ThresholdCount { found: 5 })
        ));
    }

    #[test]
    fn test_labels_out_of_order() {
        let mut labels = StrengthLabel::GRADED;
        labels.swap(0, 1);
        let scale = StrengthScale::new(
            [10, 20, 30, 40, 50, 60].into_iter().zip(labels),
            StrengthLabel::Invalid,
        );
        assert_eq!(
            scale.validate(),
            Err(ScoreError::ThresholdLabel {
                threshold: 10,
                expected: StrengthLabel::VeryWeak,
                found: StrengthLabel::Weak,
            })
        );
    }

    #[test]
    fn test_fallback_must_be_invalid() {
        let scale = StrengthScale {
            fallback: StrengthLabel::Perfect,
            ..StrengthScale::default()
        };
        assert_eq!(
            get_strength(-5, &scale),
            Err(ScoreError::FallbackLabel {
                found: StrengthLabel::Perfect
            })
        );
    }

    #[test]
    fn test_label_round_trip_through_str() {
        assert_eq!("Very Strong".parse::<StrengthLabel>(), Ok(StrengthLabel::VeryStrong));
        assert!(matches!(
            "Mediocre".parse::<StrengthLabel>(),
            Err(ScoreError::UnknownLabel(_))
        ));
        assert_eq!(StrengthLabel::VeryWeak.to_string(), "Very Weak");
    }
}
