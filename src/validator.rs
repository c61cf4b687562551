//! Policy validator - checks a password against optional constraints
//! before it is scored.

use std::collections::HashMap;

use crate::scan::{char_len, count_where, is_digit, is_lower, is_symbol, is_upper};

/// Kind of policy check, used to key message overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    Empty,
    MinLength,
    MaxLength,
    MinUppercase,
    MinLowercase,
    MinDigits,
    MinSymbols,
    Include,
    Exclude,
    StartsWith,
    EndsWith,
    IncludeOne,
}

/// Constraints a password must satisfy before it is scored.
///
/// Every field is optional; an unset field disables its check.
///
/// ```rust
/// use pwd_score::{PolicyOptions, Violation};
///
/// let policy = PolicyOptions::default()
///     .with_min_length(10)
///     .with_min_digits(1)
///     .with_message(Violation::MinLength, "Too short");
/// assert_eq!(policy.min_length, Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyOptions {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_uppercase: Option<usize>,
    pub min_lowercase: Option<usize>,
    pub min_digits: Option<usize>,
    pub min_symbols: Option<usize>,
    /// Every entry must occur in the password.
    pub include: Vec<String>,
    /// No entry may occur in the password.
    pub exclude: Vec<String>,
    pub starts_with: Option<String>,
    pub ends_with: Option<String>,
    /// At least one entry must occur in the password.
    pub include_one: Vec<String>,
    /// Literal replacements for the default messages.
    pub messages: HashMap<Violation, String>,
}

impl PolicyOptions {
    pub fn with_min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn with_max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn with_min_uppercase(mut self, n: usize) -> Self {
        self.min_uppercase = Some(n);
        self
    }

    pub fn with_min_lowercase(mut self, n: usize) -> Self {
        self.min_lowercase = Some(n);
        self
    }

    pub fn with_min_digits(mut self, n: usize) -> Self {
        self.min_digits = Some(n);
        self
    }

    pub fn with_min_symbols(mut self, n: usize) -> Self {
        self.min_symbols = Some(n);
        self
    }

    pub fn with_include<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclude<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    pub fn with_ends_with(mut self, suffix: impl Into<String>) -> Self {
        self.ends_with = Some(suffix.into());
        self
    }

    pub fn with_include_one<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_one = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_message(mut self, kind: Violation, message: impl Into<String>) -> Self {
        self.messages.insert(kind, message.into());
        self
    }

    /// Override for `kind` if present, otherwise the default built lazily.
    fn message(&self, kind: Violation, default: impl FnOnce() -> String) -> String {
        self.messages.get(&kind).cloned().unwrap_or_else(default)
    }
}

/// Validates `password` against `policy`.
///
/// All checks run, in a fixed order, and each failing check contributes one
/// message. The empty-password check is always active, even without a
/// policy. An empty result means the password may be scored.
pub fn validate_password(password: &str, policy: Option<&PolicyOptions>) -> Vec<String> {
    let default_policy = PolicyOptions::default();
    let policy = policy.unwrap_or(&default_policy);
    let mut errors = Vec::new();
    let len = char_len(password);

    if len == 0 {
        errors.push(policy.message(Violation::Empty, || {
            "Password must not be empty".to_string()
        }));
    }

    if let Some(min) = policy.min_length {
        if len < min {
            errors.push(policy.message(Violation::MinLength, || {
                format!("Password must be at least {} characters long", min)
            }));
        }
    }

    if let Some(max) = policy.max_length {
        if len > max {
            errors.push(policy.message(Violation::MaxLength, || {
                format!("Password must be at most {} characters long", max)
            }));
        }
    }

    let class_checks: [(Option<usize>, fn(char) -> bool, Violation, &str); 4] = [
        (policy.min_uppercase, is_upper, Violation::MinUppercase, "uppercase letter"),
        (policy.min_lowercase, is_lower, Violation::MinLowercase, "lowercase letter"),
        (policy.min_digits, is_digit, Violation::MinDigits, "digit"),
        (policy.min_symbols, is_symbol, Violation::MinSymbols, "symbol"),
    ];
    for (min, pred, kind, noun) in class_checks {
        let Some(min) = min else { continue };
        if count_where(password, pred) < min {
            errors.push(policy.message(kind, || {
                format!(
                    "Password must contain at least {} {}{}",
                    min,
                    noun,
                    if min == 1 { "" } else { "s" }
                )
            }));
        }
    }

    let missing: Vec<&str> = policy
        .include
        .iter()
        .map(String::as_str)
        .filter(|item| !password.contains(*item))
        .collect();
    if !missing.is_empty() {
        errors.push(policy.message(Violation::Include, || {
            format!("Password must include: {}", missing.join(", "))
        }));
    }

    let present: Vec<&str> = policy
        .exclude
        .iter()
        .map(String::as_str)
        .filter(|item| !item.is_empty() && password.contains(*item))
        .collect();
    if !present.is_empty() {
        errors.push(policy.message(Violation::Exclude, || {
            format!("Password must not include: {}", present.join(", "))
        }));
    }

    if let Some(prefix) = &policy.starts_with {
        if !password.starts_with(prefix.as_str()) {
            errors.push(policy.message(Violation::StartsWith, || {
                format!("Password must start with \"{}\"", prefix)
            }));
        }
    }

    if let Some(suffix) = &policy.ends_with {
        if !password.ends_with(suffix.as_str()) {
            errors.push(policy.message(Violation::EndsWith, || {
                format!("Password must end with \"{}\"", suffix)
            }));
        }
    }

    if !policy.include_one.is_empty()
        && !policy.include_one.iter().any(|item| password.contains(item.as_str()))
    {
        errors.push(policy.message(Violation::IncludeOne, || {
            format!(
                "Password must include at least one of: {}",
                policy.include_one.join(", ")
            )
        }));
    }

    errors
}
