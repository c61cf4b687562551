//! Static lookup tables used by the deductive metrics.

use std::sync::LazyLock;

/// Three-character ascending alphabet runs (`abc` through `xyz`).
pub static LETTER_RUNS: LazyLock<Vec<String>> = LazyLock::new(|| runs("abcdefghijklmnopqrstuvwxyz"));

/// Three-character ascending digit runs (`012` through `789`).
pub static DIGIT_RUNS: LazyLock<Vec<String>> = LazyLock::new(|| runs("0123456789"));

/// Shifted number-row symbol triples, left to right.
pub const SYMBOL_RUNS: &[&str] = &[
    "!@#", "@#$", "#$%", "$%^", "%^&", "^&*", "&*(", "*()",
];

/// Common keyboard-row, diagonal and numeric-pad sequences, lowercase.
pub const KEYBOARD_PATTERNS: &[&str] = &[
    // top row
    "qwertyuiop", "qwertyuio", "qwertyui", "qwertyu", "qwerty", "qwert",
    "wertyu", "ertyui", "rtyuio", "tyuiop",
    // home row
    "asdfghjkl", "asdfghjk", "asdfghj", "asdfgh", "asdfg", "asdf",
    "sdfghj", "dfghjk", "fghjkl",
    // bottom row
    "zxcvbnm", "zxcvbn", "zxcvb", "zxcv", "xcvbnm", "cvbnm",
    // number row
    "1234567890", "123456789", "12345678", "1234567", "123456", "12345",
    "1234", "234567", "345678", "456789", "567890",
    // diagonals
    "1qaz", "2wsx", "3edc", "4rfv", "5tgb", "6yhn", "7ujm", "8ik,", "9ol.", "0p;/",
    "qaz", "wsx", "edc", "rfv", "tgb", "yhn", "ujm",
    "zaq1", "xsw2", "cde3", "vfr4", "bgt5", "nhy6", "mju7",
    "1qaz2wsx", "2wsx3edc", "3edc4rfv", "1qaz2wsx3edc", "zaq12wsx", "1qazxsw2",
    "qazwsx", "wsxedc", "edcrfv", "rfvtgb", "tgbyhn", "yhnujm", "qazwsxedc",
    "zaqxsw", "!qaz@wsx",
    // interleaved rows
    "q1w2e3r4", "1q2w3e4r", "1q2w3e", "q1w2e3", "1qa2ws3ed", "a1s2d3f4",
    "qweasd", "qweasdzxc", "asdzxc", "qwe123", "123qwe", "asd123",
    // other layouts
    "azerty", "azertyuiop", "qwertz", "qwertzuiop", "qsdfgh", "wxcvbn",
    // numeric pad
    "789456123", "147258369", "159753", "741852963", "963852741", "357159",
    "7894561230", "147852", "258963", "14789", "12369", "74123", "96321",
];

/// Reversed forms of [`KEYBOARD_PATTERNS`] that are not already in the table.
pub static KEYBOARD_PATTERNS_REVERSED: LazyLock<Vec<String>> = LazyLock::new(|| {
    KEYBOARD_PATTERNS
        .iter()
        .map(|p| p.chars().rev().collect::<String>())
        .filter(|r| !KEYBOARD_PATTERNS.contains(&r.as_str()))
        .collect()
});

fn runs(alphabet: &str) -> Vec<String> {
    let chars: Vec<char> = alphabet.chars().collect();
    chars.windows(3).map(|w| w.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_runs_cover_alphabet() {
        assert_eq!(LETTER_RUNS.len(), 24);
        assert_eq!(LETTER_RUNS.first().map(String::as_str), Some("abc"));
        assert_eq!(LETTER_RUNS.last().map(String::as_str), Some("xyz"));
    }

    #[test]
    fn test_digit_runs() {
        assert_eq!(DIGIT_RUNS.len(), 8);
        assert_eq!(DIGIT_RUNS[0], "012");
        assert_eq!(DIGIT_RUNS[7], "789");
    }

    #[test]
    fn test_keyboard_patterns_are_lowercase_and_unique() {
        for (i, p) in KEYBOARD_PATTERNS.iter().enumerate() {
            assert_eq!(*p, p.to_lowercase());
            assert!(!KEYBOARD_PATTERNS[i + 1..].contains(p), "duplicate pattern {p}");
        }
        assert!(KEYBOARD_PATTERNS.len() >= 100);
    }

    #[test]
    fn test_reversed_patterns() {
        assert!(KEYBOARD_PATTERNS_REVERSED.iter().any(|p| p == "ytrewq"));
        assert!(KEYBOARD_PATTERNS_REVERSED.iter().any(|p| p == "0987654321"));
    }
}
