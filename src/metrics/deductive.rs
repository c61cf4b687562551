//! Deductive metrics - penalize uniform classes, runs, repeats and
//! well-known keyboard shapes. Every function returns a value `<= 0`.

use std::collections::HashMap;

use super::dates::count_dates;
use super::patterns::{
    DIGIT_RUNS, KEYBOARD_PATTERNS, KEYBOARD_PATTERNS_REVERSED, LETTER_RUNS, SYMBOL_RUNS,
};
use crate::scan::{
    char_len, count_adjacent_pairs, count_occurrences, is_digit, is_letter, is_lower, is_upper,
};

pub fn letters_only(password: &str) -> i64 {
    if !password.is_empty() && password.chars().all(is_letter) {
        -(char_len(password) as i64)
    } else {
        0
    }
}

pub fn digits_only(password: &str) -> i64 {
    if !password.is_empty() && password.chars().all(is_digit) {
        -(char_len(password) as i64)
    } else {
        0
    }
}

pub fn consecutive_uppercase(password: &str) -> i64 {
    -2 * count_adjacent_pairs(password, is_upper) as i64
}

pub fn consecutive_lowercase(password: &str) -> i64 {
    -2 * count_adjacent_pairs(password, is_lower) as i64
}

pub fn consecutive_digits(password: &str) -> i64 {
    -2 * count_adjacent_pairs(password, is_digit) as i64
}

pub fn sequential_letters(password: &str) -> i64 {
    let lowered = password.to_lowercase();
    -3 * count_all(&lowered, LETTER_RUNS.iter().map(String::as_str))
}

pub fn sequential_digits(password: &str) -> i64 {
    -3 * count_all(password, DIGIT_RUNS.iter().map(String::as_str))
}

pub fn sequential_symbols(password: &str) -> i64 {
    -3 * count_all(password, SYMBOL_RUNS.iter().copied())
}

/// `-n²` for every character (case-insensitive) seen `n > 1` times.
pub fn repeated_characters(password: &str) -> i64 {
    let mut seen: HashMap<char, i64> = HashMap::new();
    for c in password.to_lowercase().chars() {
        *seen.entry(c).or_default() += 1;
    }
    -seen.values().filter(|&&n| n > 1).map(|n| n * n).sum::<i64>()
}

pub fn date_patterns(password: &str) -> i64 {
    -5 * count_dates(password) as i64
}

/// Each table entry and each reversed entry is matched independently.
pub fn keyboard_patterns(password: &str) -> i64 {
    let lowered = password.to_lowercase();
    let forward = count_all(&lowered, KEYBOARD_PATTERNS.iter().copied());
    let reversed = count_all(&lowered, KEYBOARD_PATTERNS_REVERSED.iter().map(String::as_str));
    -5 * (forward + reversed)
}

fn count_all<'a>(haystack: &str, needles: impl Iterator<Item = &'a str>) -> i64 {
    needles
        .map(|needle| count_occurrences(haystack, needle) as i64)
        .sum()
}
