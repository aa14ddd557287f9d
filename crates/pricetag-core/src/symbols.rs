//! Currency symbol detection.
//!
//! Resolution is a priority cascade: dollar-code disambiguation first, then
//! the curated safe symbols, then everything else the reference table knows
//! about. The first match across the cascade wins.

use std::cmp::Reverse;
use std::collections::HashSet;

use lazy_static::lazy_static;
use tracing::debug;

use crate::currencies::{CURRENCY_CODES, CURRENCY_NATIONAL_SYMBOLS, CURRENCY_SYMBOLS};
use crate::patterns::{DOLLAR_CODE, SAFE_CURRENCY, UNSAFE_CURRENCY};

/// Symbols trusted as a currency marker wherever they appear in text.
///
/// Order matters: compound dollar variants must come before the bare `$`,
/// since the alternation is matched first-entry-first.
pub static SAFE_CURRENCY_SYMBOLS: &[&str] = &[
    // Variants of $, etc. They need to be before $.
    "Bds$", "CUC$", "MOP$",
    "AR$", "AU$", "BN$", "BZ$", "CA$", "CL$", "CO$", "CV$", "HK$", "MX$",
    "NT$", "NZ$", "TT$", "RD$", "WS$", "US$",
    "$U", "C$", "J$", "N$", "R$", "S$", "T$", "Z$", "A$",
    "SY£", "LB£", "CN¥", "GH₵",

    // unique currency symbols
    "$", "€", "£", "zł", "Zł", "Kč", "₽", "¥", "￥",
    "฿", "դր.", "դր", "₦", "₴", "₱", "৳", "₭", "₪", "﷼", "៛", "₩", "₫", "₡",
    "টকা", "ƒ", "₲", "؋", "₮", "नेरू", "₨",
    "₶", "₾", "֏", "ރ", "৲", "૱", "௹", "₠", "₢", "₣", "₤", "₧", "₯",
    "₰", "₳", "₷", "₸", "₹", "₺", "₼", "₿", "ℳ",
    "ر.ق.\u{200f}", "د.ك.\u{200f}", "د.ع.\u{200f}", "ر.ع.\u{200f}", "ر.ي.\u{200f}",
    "ر.س.\u{200f}", "د.ج.\u{200f}", "د.م.\u{200f}", "د.إ.\u{200f}", "د.ت.\u{200f}",
    "د.ل.\u{200f}", "ل.س.\u{200f}", "د.ب.\u{200f}", "د.أ.\u{200f}", "ج.م.\u{200f}",
    "ل.ل.\u{200f}",

    " تومان", "تومان",

    // other common symbols, which we consider unambiguous
    "EUR", "euro", "eur", "CHF", "DKK", "Rp", "lei",
    "руб.", "руб", "грн.", "грн", "дин.", "Dinara", "динар", "лв.", "лв",
    "р.", "тңг", "тңг.", "ман.",
];

lazy_static! {
    /// Three-letter codes ending in D, where the D stands for "dollar".
    /// "NZD $123" must resolve to NZD, not to the `$` that follows it.
    pub static ref DOLLAR_CODES: Vec<&'static str> = CURRENCY_CODES
        .iter()
        .copied()
        .filter(|code| code.ends_with('D'))
        .collect();

    /// Markers only trusted when no safe symbol matched: currency codes,
    /// primary symbols and native/alternate symbols, minus the safe set,
    /// placeholder values and bare uppercase Latin letters. Sorted longest
    /// first so a more specific token beats any of its substrings; ties are
    /// broken lexicographically to keep matching deterministic.
    pub static ref OTHER_CURRENCY_SYMBOLS: Vec<&'static str> = {
        let mut set: HashSet<&'static str> = CURRENCY_CODES
            .iter()
            .chain(CURRENCY_SYMBOLS.iter())
            .chain(CURRENCY_NATIONAL_SYMBOLS.iter())
            .copied()
            // even if they appear in text, currency is likely to be rouble
            .chain(["р", "Р"])
            .collect();

        for safe in SAFE_CURRENCY_SYMBOLS {
            set.remove(safe);
        }
        // placeholder values
        set.remove("-");
        set.remove("XXX");
        // single uppercase Latin letters are very unreliable on their own
        set.retain(|s| !(s.len() == 1 && s.as_bytes()[0].is_ascii_uppercase()));

        let mut symbols: Vec<_> = set.into_iter().collect();
        symbols.sort_unstable_by_key(|s| (Reverse(s.chars().count()), *s));
        symbols
    };
}

type SymbolMatcher = for<'t> fn(&'t str) -> Option<&'t str>;

fn search_safe_currency(text: &str) -> Option<&str> {
    SAFE_CURRENCY.find(text).map(|m| m.as_str())
}

fn search_unsafe_currency(text: &str) -> Option<&str> {
    UNSAFE_CURRENCY.find(text).map(|m| m.as_str())
}

/// Find a dollar code followed by an optional `$` and then a non-letter
/// boundary, so "SGD$123" and "NZD $123" both yield the code.
fn search_dollar_code(text: &str) -> Option<&str> {
    for m in DOLLAR_CODE.find_iter(text) {
        let rest = &text[m.end()..];
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        match rest.chars().next() {
            None => return Some(m.as_str()),
            Some(c) if !c.is_alphabetic() && c != '_' => return Some(m.as_str()),
            Some(_) => {}
        }
    }
    None
}

/// Guess the currency marker from a price string and an optional hint
/// string. Returns the marker exactly as it appears in the source text, or
/// `None` if nothing matched.
pub fn extract_currency_symbol<'t>(
    price: Option<&'t str>,
    currency_hint: Option<&'t str>,
) -> Option<&'t str> {
    let mut methods: Vec<(SymbolMatcher, Option<&'t str>)> = Vec::new();

    if currency_hint.is_some_and(|t| t.contains('$')) {
        methods.push((search_dollar_code, currency_hint));
    }
    if price.is_some_and(|t| t.contains('$')) {
        methods.push((search_dollar_code, price));
    }

    methods.extend([
        (search_safe_currency as SymbolMatcher, price),
        (search_safe_currency as SymbolMatcher, currency_hint),
        (search_unsafe_currency as SymbolMatcher, price),
        (search_unsafe_currency as SymbolMatcher, currency_hint),
    ]);

    for (matcher, text) in methods {
        if let Some(symbol) = text.and_then(matcher) {
            debug!(symbol, "matched currency symbol");
            return Some(symbol);
        }
    }

    None
}
