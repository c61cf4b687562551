//! Date-shaped digit runs (`DDMMYYYY`, `MMDDYYYY`, `YYYYMMDD` and the
//! two-digit-year forms).

#[derive(Debug, Clone, Copy)]
enum Part {
    Day,
    Month,
    Year2,
    Year4,
}

impl Part {
    fn width(self) -> usize {
        match self {
            Part::Year4 => 4,
            _ => 2,
        }
    }

    /// `digits` must be ASCII digits.
    fn accepts(self, digits: &[char]) -> bool {
        let value = digits
            .iter()
            .fold(0u32, |acc, &c| acc * 10 + (c as u32 - '0' as u32));
        match self {
            Part::Day => (1..=31).contains(&value),
            Part::Month => (1..=12).contains(&value),
            Part::Year2 => true,
            Part::Year4 => (1900..=2099).contains(&value),
        }
    }
}

const SHAPES: &[&[Part]] = &[
    &[Part::Day, Part::Month, Part::Year4],
    &[Part::Month, Part::Day, Part::Year4],
    &[Part::Year4, Part::Month, Part::Day],
    &[Part::Day, Part::Month, Part::Year2],
    &[Part::Month, Part::Day, Part::Year2],
    &[Part::Year2, Part::Month, Part::Day],
];

fn fits(shape: &[Part], digits: &[char]) -> bool {
    let width: usize = shape.iter().map(|p| p.width()).sum();
    if digits.len() != width {
        return false;
    }
    let mut offset = 0;
    for part in shape {
        let end = offset + part.width();
        if !part.accepts(&digits[offset..end]) {
            return false;
        }
        offset = end;
    }
    true
}

/// Counts distinct (start, length) digit windows matching any date shape.
/// Overlapping windows are all counted.
pub fn count_dates(password: &str) -> usize {
    let chars: Vec<char> = password.chars().collect();
    let mut count = 0;
    for start in 0..chars.len() {
        for width in [6, 8] {
            let Some(window) = chars.get(start..start + width) else {
                continue;
            };
            if !window.iter().all(char::is_ascii_digit) {
                continue;
            }
            if SHAPES.iter().any(|shape| fits(shape, window)) {
                count += 1;
            }
        }
    }
    count
}
