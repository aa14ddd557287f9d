//! Price data model and the parsing entry point.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::extract::{extract_amount, ExtractedAmount};
use crate::number::parse_number;
use crate::symbols::extract_currency_symbol;

/// A parsed price: exact amount, the currency marker as it appeared in the
/// source text, and the raw substring the amount was derived from.
///
/// `amount` and `amount_text` are present or absent together; `currency` is
/// resolved independently and does not correlate with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Price {
    /// Price numeric value, as an exact decimal.
    pub amount: Option<Decimal>,
    /// Currency symbol, as it appeared in the text.
    pub currency: Option<String>,
    /// Price value, as a raw string.
    pub amount_text: Option<String>,
}

impl Price {
    /// Given price and currency text extracted from HTML elements, return a
    /// `Price` with a clean currency symbol and the amount as a `Decimal`.
    ///
    /// `currency_hint` is optional; pass the content of some element which
    /// may contain a currency marker. A currency found in `price` itself is
    /// preferred over one extracted from `currency_hint`.
    pub fn fromstring(
        price: Option<&str>,
        currency_hint: Option<&str>,
        decimal_separator: Option<char>,
    ) -> Price {
        let currency =
            extract_currency_symbol(price, currency_hint).map(|s| s.trim().to_string());

        let extracted = match price {
            Some(price) => extract_amount(price, currency.as_deref()),
            None => ExtractedAmount::default(),
        };

        let amount = extracted
            .text
            .as_deref()
            .and_then(|text| parse_number(text, decimal_separator))
            .map(|value| if extracted.negative { -value } else { value });

        debug!(?amount, ?currency, "parsed price");

        Price {
            amount,
            currency,
            amount_text: extracted.text,
        }
    }

    /// Price numeric value, as a float approximation. Computed on demand so
    /// the stored amount keeps its full precision.
    pub fn amount_float(&self) -> Option<f64> {
        self.amount.and_then(|amount| amount.to_f64())
    }
}

/// Parse a price string into a [`Price`]. Never fails: anything that cannot
/// be extracted is simply absent from the result.
pub fn parse_price(
    price: Option<&str>,
    currency_hint: Option<&str>,
    decimal_separator: Option<char>,
) -> Price {
    Price::fromstring(price, currency_hint, decimal_separator)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn parsed(price: &str) -> Price {
        parse_price(Some(price), None, None)
    }

    #[test]
    fn test_dollar_price() {
        let price = parsed("price: $12.99");
        assert_eq!(price.amount, Some(dec("12.99")));
        assert_eq!(price.currency.as_deref(), Some("$"));
        assert_eq!(price.amount_text.as_deref(), Some("12.99"));
    }

    #[test]
    fn test_code_after_amount() {
        let price = parsed("1,235 USD");
        assert_eq!(price.amount, Some(dec("1235")));
        assert_eq!(price.currency.as_deref(), Some("USD"));
        assert_eq!(price.amount_text.as_deref(), Some("1,235"));
    }

    #[test]
    fn test_negative_price() {
        let price = parsed("-5.00 EUR");
        assert_eq!(price.amount, Some(dec("-5.00")));
        assert_eq!(price.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_absent_price_string() {
        let price = parse_price(None, Some("USD"), None);
        assert_eq!(price.amount, None);
        assert_eq!(price.amount_text, None);
        assert_eq!(price.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_nothing_extractable() {
        let price = parsed("hello world");
        assert_eq!(
            price,
            Price {
                amount: None,
                currency: None,
                amount_text: None,
            }
        );
    }

    #[test]
    fn test_free_is_zero() {
        let price = parsed("Free");
        assert_eq!(price.amount, Some(dec("0")));
        assert_eq!(price.amount_text.as_deref(), Some("0"));
        assert_eq!(price.currency, None);
    }

    #[test]
    fn test_dollar_code_precedence() {
        let price = parsed("NZD $123");
        assert_eq!(price.currency.as_deref(), Some("NZD"));
        assert_eq!(price.amount, Some(dec("123")));
    }

    #[test]
    fn test_euro_as_decimal_separator() {
        let price = parsed("35€ 99");
        assert_eq!(price.amount, Some(dec("35.99")));
        assert_eq!(price.currency.as_deref(), Some("€"));
        assert_eq!(price.amount_text.as_deref(), Some("35€ 99"));
    }

    #[test]
    fn test_natural_language_amounts() {
        let price = parsed("$ 4 million");
        assert_eq!(price.amount, Some(dec("4000000")));
        assert_eq!(price.amount_text.as_deref(), Some("4 million"));

        let price = parsed("$ four million dollars");
        assert_eq!(price.amount, Some(dec("4000000")));
        assert_eq!(price.amount_text.as_deref(), Some("four million"));

        let price = parsed("$ 400 thousand");
        assert_eq!(price.amount, Some(dec("400000")));

        let price = parsed("$ 1 thousand 999 € 99");
        assert_eq!(price.amount, Some(dec("1999.99")));
        assert_eq!(price.amount_text.as_deref(), Some("1 thousand 999 € 99"));
    }

    #[test]
    fn test_percent_yields_no_amount() {
        let price = parsed("50% OFF");
        assert_eq!(price.amount, None);
        assert_eq!(price.amount_text, None);
    }

    #[test]
    fn test_explicit_decimal_separator() {
        let price = parse_price(Some("140.000 zł"), None, Some(','));
        assert_eq!(price.amount, Some(dec("140000")));
        assert_eq!(price.currency.as_deref(), Some("zł"));

        let price = parse_price(Some("140.000 zł"), None, Some('.'));
        assert_eq!(price.amount, Some(dec("140.000")));
    }

    #[test]
    fn test_currency_hint_used_when_price_has_none() {
        let price = parse_price(Some("12.99"), Some("GBP"), None);
        assert_eq!(price.currency.as_deref(), Some("GBP"));
        assert_eq!(price.amount, Some(dec("12.99")));
    }

    #[test]
    fn test_currency_marker_is_trimmed() {
        // the safe list matches " تومان" with its leading space
        let price = parsed("12000 تومان");
        assert_eq!(price.currency.as_deref(), Some("تومان"));
    }

    #[test]
    fn test_amount_float() {
        let price = parsed("price: $12.99");
        assert_eq!(price.amount_float(), Some(12.99));

        let price = parsed("Foo");
        assert_eq!(price.amount_float(), None);
    }

    #[test]
    fn test_amount_text_reparses_to_same_amount() {
        for input in ["price: $12.99", "1,235 USD", "35€ 99", "$ 4 million"] {
            let first = parsed(input);
            let text = first.amount_text.as_deref().unwrap();
            let again = parse_price(Some(text), None, None);
            assert_eq!(again.amount, first.amount, "input: {input}");
        }
    }
}
