//! Compiled patterns for price and currency extraction.
//!
//! Every pattern is built once and reused across calls; nothing here is
//! mutated after initialization.

use lazy_static::lazy_static;
use regex::Regex;

use crate::symbols::{DOLLAR_CODES, OTHER_CURRENCY_SYMBOLS, SAFE_CURRENCY_SYMBOLS};
use crate::words;

/// Regex matching any of `symbols`, earlier entries taking precedence.
pub(crate) fn or_regex(symbols: &[&str]) -> Regex {
    let alternation = symbols
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).unwrap()
}

lazy_static! {
    /// Any run of whitespace, including non-breaking spaces.
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    /// Rightmost `.`, `,` or `€` followed by 1-2 or 4+ digits at the end of
    /// the string. A separator with exactly 3 trailing digits is taken to be
    /// a thousands mark, not a decimal point.
    pub static ref DECIMAL_SEPARATOR: Regex =
        Regex::new(r"\d([.,€])(?:\d{1,2}|\d{4}\d*)$").unwrap();

    /// First run of digits, grouping separators and number words, starting
    /// with a digit or a number word. The trailing guard rejects runs
    /// followed by a percent sign.
    pub static ref AMOUNT: Regex = {
        let word = words::word_pattern();
        Regex::new(&format!(
            r"((?:\d|\b{word}\b)(?:[\d\s.,]|\b{word}\b)*)(?:[^%\d]|$)",
            word = word,
        ))
        .unwrap()
    };

    /// A single `€` acting as the decimal separator, e.g. "35€ 99" or
    /// "1,235€ 99". One space after the euro sign means exactly one more
    /// digit follows the first; with no space, a lazy digit run ends at the
    /// first non-digit.
    pub static ref EURO_AMOUNT: Regex = {
        let word = words::word_pattern();
        Regex::new(&format!(
            r"(?x)
            ((?:\b{word}\b|[\d\s.,])*?\d\s*€\s\d\d)(?:[^\d]|$)
            |
            ((?:\b{word}\b|[\d\s.,])*?\d\s*€\d+?)(?:[^\d]|$)
            ",
            word = word,
        ))
        .unwrap()
    };

    /// Leading or trailing minus notation, guarded against percentages.
    pub static ref NEGATIVE_AMOUNT: Regex =
        Regex::new(r"(?:-\s*\d[\d.,]*|\d[\d.,]*\d-)(?:[^%\d]|$)").unwrap();

    /// Safe symbols, in list order so compound variants win over their
    /// prefixes (`HK$` before `$`).
    pub static ref SAFE_CURRENCY: Regex = or_regex(SAFE_CURRENCY_SYMBOLS);

    /// Everything else we know about, longest tokens first.
    pub static ref UNSAFE_CURRENCY: Regex = or_regex(&OTHER_CURRENCY_SYMBOLS);

    /// A three-letter "dollar" code such as NZD or SGD. The right-hand
    /// boundary (an optional `$`, then a non-letter or end) is checked by
    /// the caller.
    pub static ref DOLLAR_CODE: Regex = {
        let alternation = DOLLAR_CODES
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\b(?:{alternation})", alternation = alternation)).unwrap()
    };
}
