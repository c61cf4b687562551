//! Additive metrics - reward length and character variety.

use std::collections::HashSet;

use crate::scan::{char_len, count_where, is_digit, is_lower, is_symbol, is_upper};

const LENGTH_REQUIREMENT: usize = 8;
const MIN_REQUIREMENTS_MET: i64 = 3;

pub fn character_volume(password: &str) -> i64 {
    char_len(password) as i64 * 4
}

pub fn uppercase_contribution(password: &str) -> i64 {
    (char_len(password) - count_where(password, is_upper)) as i64 * 2
}

pub fn lowercase_contribution(password: &str) -> i64 {
    (char_len(password) - count_where(password, is_lower)) as i64 * 2
}

pub fn digit_contribution(password: &str) -> i64 {
    count_where(password, is_digit) as i64 * 4
}

pub fn symbol_contribution(password: &str) -> i64 {
    count_where(password, is_symbol) as i64 * 6
}

/// Digits and symbols strictly between the first and last character.
pub fn middle_bonus(password: &str) -> i64 {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() <= 2 {
        return 0;
    }
    let middle = &chars[1..chars.len() - 1];
    middle.iter().filter(|&&c| is_digit(c) || is_symbol(c)).count() as i64 * 2
}

/// Two points per satisfied requirement, once at least three are satisfied.
pub fn requirements_bonus(password: &str) -> i64 {
    let met = [
        char_len(password) >= LENGTH_REQUIREMENT,
        password.chars().any(is_upper),
        password.chars().any(is_lower),
        password.chars().any(is_digit),
        password.chars().any(is_symbol),
    ]
    .iter()
    .filter(|&&b| b)
    .count() as i64;

    if met >= MIN_REQUIREMENTS_MET { met * 2 } else { 0 }
}

/// `round(length * log2(distinct characters))`.
pub fn entropy_bonus(password: &str) -> i64 {
    let distinct: HashSet<char> = password.chars().collect();
    if distinct.is_empty() {
        return 0;
    }
    let bits = char_len(password) as f64 * (distinct.len() as f64).log2();
    bits.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_contributions() {
        let pwd = "Passw0rd!";
        assert_eq!(character_volume(pwd), 36);
        assert_eq!(uppercase_contribution(pwd), 16);
        assert_eq!(lowercase_contribution(pwd), 6);
        assert_eq!(digit_contribution(pwd), 4);
        assert_eq!(symbol_contribution(pwd), 6);
    }

    #[test]
    fn test_middle_bonus() {
        assert_eq!(middle_bonus("Passw0rd!"), 2);
        assert_eq!(middle_bonus("1!"), 0);
        assert_eq!(middle_bonus("!@#$%"), 6);
        assert_eq!(middle_bonus("a1b"), 2);
    }

    #[test]
    fn test_requirements_bonus_threshold() {
        assert_eq!(requirements_bonus("Passw0rd!"), 10);
        assert_eq!(requirements_bonus("Password1"), 8);
        assert_eq!(requirements_bonus("Ab1"), 6);
        // length and lowercase only
        assert_eq!(requirements_bonus("abcdefghij"), 0);
    }

    #[test]
    fn test_entropy_bonus() {
        assert_eq!(entropy_bonus("Passw0rd!"), 27);
        assert_eq!(entropy_bonus("aaaa"), 0);
        assert_eq!(entropy_bonus("ab"), 2);
        assert_eq!(entropy_bonus(""), 0);
    }
}
