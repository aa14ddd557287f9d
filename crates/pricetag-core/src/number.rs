//! Decimal separator detection and numeric normalization.

use rust_decimal::Decimal;
use tracing::debug;

use crate::patterns::DECIMAL_SEPARATOR;
use crate::words;

/// Return the decimal separator of a numeric string, or `None` if there is
/// no decimal separator.
///
/// A separator followed by exactly three digits is assumed to be a
/// thousands mark: "12,999" is twelve thousand nine hundred ninety-nine,
/// while "12,99" and "3,0000" have a fractional part.
pub fn get_decimal_separator(num: &str) -> Option<char> {
    DECIMAL_SEPARATOR
        .captures(num)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
}

/// Parse a string with a number into a `Decimal`, guessing its decimal and
/// thousands separators when `decimal_separator` is not given. The string
/// may mix digits with English number words. Returns `None` if parsing
/// fails.
pub fn parse_number(num: &str, decimal_separator: Option<char>) -> Option<Decimal> {
    let num = collapse_numeric_whitespace(num);
    if num.is_empty() {
        return None;
    }

    let separator = decimal_separator.or_else(|| get_decimal_separator(&num));
    debug!(%num, ?separator, "normalizing number");

    let normalized = match separator {
        // no fractional part; dots and commas are thousands grouping
        None => num.replace(['.', ','], ""),
        Some('.') => num.replace(',', ""),
        Some(',') => {
            let stripped = num.replace('.', "");
            match stripped.rfind(',') {
                Some(idx) => format!(
                    "{}.{}",
                    stripped[..idx].replace(',', ""),
                    &stripped[idx + 1..]
                ),
                None => stripped,
            }
        }
        // a currency glyph acting as the decimal point, e.g. "1,235€99"
        Some(separator) => num.replace(['.', ','], "").replace(separator, "."),
    };

    words::to_number(&normalized)
}

/// Drop whitespace runs that merely pad digits and separators, keeping the
/// single spaces that delimit number words.
fn collapse_numeric_whitespace(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_whitespace() {
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            let prev = out.chars().last();
            let next = chars.get(i);
            if prev.is_some_and(is_word_char) && next.copied().is_some_and(is_word_char) {
                out.push(' ');
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_get_decimal_separator() {
        assert_eq!(get_decimal_separator("1000"), None);
        assert_eq!(get_decimal_separator("12.99"), Some('.'));
        assert_eq!(get_decimal_separator("12,99"), Some(','));
        assert_eq!(get_decimal_separator("12.999"), None);
        assert_eq!(get_decimal_separator("3,0000"), Some(','));
        assert_eq!(get_decimal_separator("1,235€99"), Some('€'));
    }

    #[test]
    fn test_rightmost_separator_wins() {
        assert_eq!(get_decimal_separator("1.234,56"), Some(','));
        assert_eq!(get_decimal_separator("1,234.56"), Some('.'));
    }

    #[test]
    fn test_thousands_vs_decimal() {
        assert_eq!(parse_number("1,234", None), Some(dec("1234")));
        assert_eq!(parse_number("12,34", None), Some(dec("12.34")));
        assert_eq!(parse_number("12,345", None), Some(dec("12345")));
        assert_eq!(parse_number("1,1", None), Some(dec("1.1")));
        assert_eq!(parse_number("1.1", None), Some(dec("1.1")));
        assert_eq!(parse_number("1234", None), Some(dec("1234")));
    }

    #[test]
    fn test_euro_separator() {
        assert_eq!(parse_number("12€34", None), Some(dec("12.34")));
        assert_eq!(parse_number("12€ 34", None), Some(dec("12.34")));
        assert_eq!(parse_number("1,235€99", None), Some(dec("1235.99")));
        assert_eq!(parse_number("1 235€99", None), Some(dec("1235.99")));
        assert_eq!(parse_number("1.235€99", None), Some(dec("1235.99")));
        assert_eq!(parse_number("35€ 99", None), Some(dec("35.99")));
    }

    #[test]
    fn test_space_grouped_thousands() {
        assert_eq!(parse_number("1 234.99", None), Some(dec("1234.99")));
        assert_eq!(parse_number("1 234 567", None), Some(dec("1234567")));
    }

    #[test]
    fn test_european_grouping_dots() {
        assert_eq!(parse_number("1.234.567", None), Some(dec("1234567")));
    }

    #[test]
    fn test_explicit_separator() {
        assert_eq!(parse_number("140.000", Some(',')), Some(dec("140000")));
        assert_eq!(parse_number("140.000", Some('.')), Some(dec("140.000")));
    }

    #[test]
    fn test_number_words() {
        assert_eq!(parse_number("four million", None), Some(dec("4000000")));
        assert_eq!(parse_number("1 thousand 999", None), Some(dec("1999")));
        assert_eq!(
            parse_number("1 thousand 999 € 99", None),
            Some(dec("1999.99"))
        );
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parse_number("", None), None);
        assert_eq!(parse_number("   ", None), None);
        assert_eq!(parse_number("foo", None), None);
        // a stray euro sign with three trailing digits never resolves
        assert_eq!(parse_number("35€999", None), None);
    }
}
