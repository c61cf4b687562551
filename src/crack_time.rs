//! Brute-force crack time estimate.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ScoreError;
use crate::scan::char_len;

pub const DEFAULT_GUESSES_PER_SECOND: f64 = 5e11;
pub const DEFAULT_POSSIBLE_CHARACTERS: u32 = 95;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const MONTH: f64 = 30.44 * DAY;
const YEAR: f64 = 365.25 * DAY;
const DECADE: f64 = 10.0 * YEAR;
const CENTURY: f64 = 100.0 * YEAR;
const MILLENNIUM: f64 = 1000.0 * YEAR;

/// (length in seconds, singular, plural), largest first.
const UNITS: &[(f64, &str, &str)] = &[
    (MILLENNIUM, "millennium", "millennia"),
    (CENTURY, "century", "centuries"),
    (DECADE, "decade", "decades"),
    (YEAR, "year", "years"),
    (MONTH, "month", "months"),
    (DAY, "day", "days"),
    (HOUR, "hour", "hours"),
    (MINUTE, "minute", "minutes"),
    (1.0, "second", "seconds"),
];

/// Attacker model for [`calculate_crack_time`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackTimeOptions {
    pub guesses_per_second: f64,
    /// Assumed alphabet size.
    pub possible_characters: u32,
}

impl Default for CrackTimeOptions {
    fn default() -> Self {
        Self {
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
            possible_characters: DEFAULT_POSSIBLE_CHARACTERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrackTimeResult {
    pub seconds: f64,
    pub description: String,
}

/// Estimates the time to exhaust `possible_characters ^ length` guesses.
///
/// # Errors
/// Returns [`ScoreError::InvalidGuessRate`] if the guess rate is not a
/// positive finite number.
pub fn calculate_crack_time(
    password: &SecretString,
    options: Option<CrackTimeOptions>,
) -> Result<CrackTimeResult, ScoreError> {
    let options = options.unwrap_or_default();
    let rate = options.guesses_per_second;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ScoreError::InvalidGuessRate(rate));
    }

    let length = i32::try_from(char_len(password.expose_secret())).unwrap_or(i32::MAX);
    let combinations = f64::from(options.possible_characters).powi(length);
    let seconds = combinations / rate;

    Ok(CrackTimeResult {
        seconds,
        description: format_duration(seconds),
    })
}

/// Renders `seconds` as a comma-separated breakdown, largest unit first,
/// e.g. `"1 day, 2 hours"`. Durations under a second render as `"1 second"`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "Infinity millennia".to_string();
    }

    let mut remaining = seconds.max(0.0);
    let mut parts = Vec::new();
    for &(unit, singular, plural) in UNITS {
        let value = (remaining / unit).floor();
        remaining %= unit;
        if value > 0.0 {
            let name = if value == 1.0 { singular } else { plural };
            parts.push(format!("{:.0} {}", value, name));
        }
    }

    if parts.is_empty() {
        return "1 second".to_string();
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_empty_password_is_sub_second() {
        let result = calculate_crack_time(&secret(""), None).unwrap();
        assert_eq!(result.seconds, 1.0 / 5e11);
        assert_eq!(result.description, "1 second");
    }

    #[test]
    fn test_custom_options() {
        let options = CrackTimeOptions {
            guesses_per_second: 1.0,
            possible_characters: 10,
        };
        let result = calculate_crack_time(&secret("1234"), Some(options)).unwrap();
        assert_eq!(result.seconds, 10_000.0);
        assert_eq!(result.description, "2 hours, 46 minutes, 40 seconds");
    }

    #[test]
    fn test_default_options_grow_with_length() {
        let short = calculate_crack_time(&secret("abc"), None).unwrap();
        let long = calculate_crack_time(&secret("Tr0ub4dor&3"), None).unwrap();
        assert!(long.seconds > short.seconds);
        assert!(long.description.starts_with("3 centuries, 6 decades"));
    }

    #[test]
    fn test_invalid_guess_rate() {
        let options = CrackTimeOptions {
            guesses_per_second: 0.0,
            ..CrackTimeOptions::default()
        };
        assert_eq!(
            calculate_crack_time(&secret("abc"), Some(options)),
            Err(ScoreError::InvalidGuessRate(0.0))
        );
    }

    #[test]
    fn test_format_duration_singular_units() {
        assert_eq!(format_duration(DAY + HOUR + MINUTE + 1.0), "1 day, 1 hour, 1 minute, 1 second");
        assert_eq!(format_duration(YEAR), "1 year");
        assert_eq!(format_duration(2.0 * MILLENNIUM + CENTURY), "2 millennia, 1 century");
    }

    #[test]
    fn test_format_duration_zero_units() {
        assert_eq!(format_duration(0.0), "1 second");
        assert_eq!(format_duration(0.999), "1 second");
        assert_eq!(format_duration(f64::INFINITY), "Infinity millennia");
    }
}
