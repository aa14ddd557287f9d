//! English number words and the word-to-number fold.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::trace;

/// Recognized number words as (word, scale, increment).
///
/// A token updates the running value as `current = current * scale +
/// increment`, so "twenty" contributes an increment of 20 while "thousand"
/// multiplies whatever was accumulated before it.
pub static NUMBER_WORDS: &[(&str, u64, u64)] = &[
    ("zero", 1, 0),
    ("one", 1, 1),
    ("two", 1, 2),
    ("three", 1, 3),
    ("four", 1, 4),
    ("five", 1, 5),
    ("six", 1, 6),
    ("seven", 1, 7),
    ("eight", 1, 8),
    ("nine", 1, 9),
    ("ten", 1, 10),
    ("eleven", 1, 11),
    ("twelve", 1, 12),
    ("thirteen", 1, 13),
    ("fourteen", 1, 14),
    ("fifteen", 1, 15),
    ("sixteen", 1, 16),
    ("seventeen", 1, 17),
    ("eighteen", 1, 18),
    ("nineteen", 1, 19),
    ("twenty", 1, 20),
    ("thirty", 1, 30),
    ("forty", 1, 40),
    ("fifty", 1, 50),
    ("sixty", 1, 60),
    ("seventy", 1, 70),
    ("eighty", 1, 80),
    ("ninety", 1, 90),
    ("hundred", 100, 0),
    ("thousand", 1_000, 0),
    ("million", 1_000_000, 0),
    ("billion", 1_000_000_000, 0),
    ("trillion", 1_000_000_000_000, 0),
];

/// Regex alternation over all recognized number words, case-insensitive.
pub(crate) fn word_pattern() -> String {
    let alternation = NUMBER_WORDS
        .iter()
        .map(|(word, _, _)| *word)
        .collect::<Vec<_>>()
        .join("|");
    format!("(?i:{alternation})")
}

fn lookup_word(token: &str) -> Option<(Decimal, Decimal)> {
    let token = token.to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(word, _, _)| *word == token)
        .map(|&(_, scale, increment)| (Decimal::from(scale), Decimal::from(increment)))
}

// A plain numeral acts like a word whose scale is 10^(integer digits), so
// "1 thousand 999" and "1 234.99" both accumulate correctly.
fn numeral_scale(token: &str) -> Option<Decimal> {
    let integer_digits = token
        .split('.')
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_digit())
        .count();

    let ten = Decimal::from(10u32);
    let mut scale = Decimal::ONE;
    for _ in 0..integer_digits {
        scale = scale.checked_mul(ten)?;
    }
    Some(scale)
}

/// Fold a whitespace-separated mix of numerals and number words into an
/// exact decimal. Returns `None` for empty input or any unrecognized token.
pub fn to_number(text: &str) -> Option<Decimal> {
    let hundred = Decimal::from(100u32);
    let mut result = Decimal::ZERO;
    let mut current = Decimal::ZERO;
    let mut seen_token = false;

    for token in text.split_whitespace() {
        let (scale, increment, large_order) = match lookup_word(token) {
            Some((scale, increment)) => (scale, increment, scale > hundred),
            None => {
                let value = Decimal::from_str(token).ok()?;
                (numeral_scale(token)?, value, false)
            }
        };

        current = current.checked_mul(scale)?.checked_add(increment)?;
        trace!(token, %current, %result, "folded number token");

        if large_order {
            result = result.checked_add(current)?;
            current = Decimal::ZERO;
        }
        seen_token = true;
    }

    if seen_token {
        result.checked_add(current)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_plain_numerals() {
        assert_eq!(to_number("1234"), Some(dec("1234")));
        assert_eq!(to_number("12.99"), Some(dec("12.99")));
        assert_eq!(to_number("4000000"), Some(dec("4000000")));
    }

    #[test]
    fn test_word_numbers() {
        assert_eq!(to_number("four million"), Some(dec("4000000")));
        assert_eq!(to_number("two hundred"), Some(dec("200")));
        assert_eq!(to_number("one thousand two hundred"), Some(dec("1200")));
        assert_eq!(to_number("seventy five"), Some(dec("75")));
    }

    #[test]
    fn test_mixed_digits_and_words() {
        assert_eq!(to_number("4 million"), Some(dec("4000000")));
        assert_eq!(to_number("400 thousand"), Some(dec("400000")));
        assert_eq!(to_number("1 thousand 999"), Some(dec("1999")));
        assert_eq!(to_number("1 thousand 999.99"), Some(dec("1999.99")));
    }

    #[test]
    fn test_numeral_scale_accumulation() {
        // space-grouped thousands resolve through the numeral scale rule
        assert_eq!(to_number("1 234.99"), Some(dec("1234.99")));
        assert_eq!(to_number("12 345 678.90"), Some(dec("12345678.90")));
    }

    #[test]
    fn test_case_insensitive_words() {
        assert_eq!(to_number("Four Million"), Some(dec("4000000")));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(to_number(""), None);
        assert_eq!(to_number("   "), None);
        assert_eq!(to_number("foo"), None);
        assert_eq!(to_number("4 million dollars"), None);
    }
}
