//! Character-class predicates and counting helpers shared by the validator
//! and the metrics.
//!
//! Classes are ASCII: a word character is `[A-Za-z0-9_]` and anything else,
//! non-ASCII letters included, is a symbol.

pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_symbol(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_')
}

/// Length in characters, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of characters satisfying `pred`.
pub fn count_where(text: &str, pred: fn(char) -> bool) -> usize {
    text.chars().filter(|&c| pred(c)).count()
}

/// Number of adjacent index pairs where both characters satisfy `pred`.
/// A run of `k` matching characters yields `k - 1`.
pub fn count_adjacent_pairs(text: &str, pred: fn(char) -> bool) -> usize {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).filter(|w| pred(w[0]) && pred(w[1])).count()
}

/// Counts every starting position at which `needle` occurs, so overlapping
/// matches are all counted (`"aaa"` contains `"aa"` twice).
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .char_indices()
        .filter(|(i, _)| haystack[*i..].starts_with(needle))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_excludes_underscore() {
        assert!(is_symbol('!'));
        assert!(is_symbol(' '));
        assert!(is_symbol('é'));
        assert!(!is_symbol('_'));
        assert!(!is_symbol('a'));
        assert!(!is_symbol('7'));
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_count_adjacent_pairs_overlapping() {
        assert_eq!(count_adjacent_pairs("ABCd", is_upper), 2);
        assert_eq!(count_adjacent_pairs("AbC", is_upper), 0);
        assert_eq!(count_adjacent_pairs("", is_upper), 0);
    }

    #[test]
    fn test_count_occurrences_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 3);
        assert_eq!(count_occurrences("abcabc", "abc"), 2);
        assert_eq!(count_occurrences("xyz", "abc"), 0);
        assert_eq!(count_occurrences("abc", ""), 0);
        assert_eq!(count_occurrences("é123", "123"), 1);
    }
}
