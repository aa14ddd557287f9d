//! Price text extraction from noisy strings.

use regex::Regex;
use tracing::debug;

use crate::patterns::{AMOUNT, EURO_AMOUNT, NEGATIVE_AMOUNT, WHITESPACE_RUN};

/// Raw amount substring pulled out of a price string, plus whether the
/// surrounding text marked it as negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExtractedAmount {
    pub text: Option<String>,
    pub negative: bool,
}

/// Extract the text of a price from a string which contains a price and
/// maybe some other text. If multiple price-looking substrings are present,
/// the first one is returned; proximity to a currency symbol is not
/// considered.
pub fn extract_price_text(price: &str) -> Option<String> {
    extract_amount(price, None).text
}

pub(crate) fn extract_amount(price: &str, currency: Option<&str>) -> ExtractedAmount {
    let price = WHITESPACE_RUN.replace_all(price, " ");
    let negative = is_negative_amount(&price, currency);

    // A lone euro sign may act as the decimal separator ("35€ 99").
    if price.matches('€').count() == 1 {
        if let Some(caps) = EURO_AMOUNT.captures(&price) {
            if let Some(m) = caps.get(1).or_else(|| caps.get(2)) {
                let text = trim_separator_noise(m.as_str());
                debug!(text, "extracted euro-separated amount");
                return ExtractedAmount {
                    text: Some(text.to_string()),
                    negative,
                };
            }
        }
    }

    if let Some(caps) = AMOUNT.captures(&price) {
        let text = trim_separator_noise(&caps[1]);
        debug!(text, "extracted amount");
        return ExtractedAmount {
            text: Some(text.to_string()),
            negative,
        };
    }

    if price.to_lowercase().contains("free") {
        return ExtractedAmount {
            text: Some("0".to_string()),
            negative,
        };
    }

    ExtractedAmount {
        text: None,
        negative,
    }
}

/// Strip surrounding whitespace and stray grouping separators. A value with
/// exactly one dot keeps its left edge, so a leading decimal point as in
/// ".75" survives.
fn trim_separator_noise(text: &str) -> &str {
    let text = text.trim();
    let is_separator = |c: char| c == ',' || c == '.';
    let trimmed = if text.matches('.').count() == 1 {
        text.trim_end_matches(is_separator)
    } else {
        text.trim_matches(is_separator)
    };
    trimmed.trim()
}

fn is_negative_amount(price: &str, currency: Option<&str>) -> bool {
    if NEGATIVE_AMOUNT.is_match(price) {
        return true;
    }

    // A minus attached to the currency marker, e.g. "-€5.00".
    if let Some(currency) = currency.filter(|c| !c.is_empty()) {
        let pattern = format!(
            r"-{currency}\d[\d.,]*(?:[^%\d]|$)",
            currency = regex::escape(currency),
        );
        return Regex::new(&pattern).map(|re| re.is_match(price)).unwrap_or(false);
    }

    false
}
