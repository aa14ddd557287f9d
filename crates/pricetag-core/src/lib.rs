//! Core library for price extraction from noisy text.
//!
//! This crate provides:
//! - Currency marker detection (symbols, codes, native glyphs)
//! - Price substring extraction from free text
//! - Decimal separator inference and exact numeric normalization
//! - Natural-language number support ("four million")
//!
//! The entry point is [`parse_price`]. Every operation is a pure function
//! over its input and the immutable reference tables; failures degrade to
//! absent fields rather than errors.

pub mod currencies;
pub mod extract;
pub mod number;
mod patterns;
pub mod price;
pub mod symbols;
pub mod words;

pub use currencies::{CurrencyRecord, CURRENCIES};
pub use extract::extract_price_text;
pub use number::{get_decimal_separator, parse_number};
pub use price::{parse_price, Price};
pub use symbols::extract_currency_symbol;

// Re-export the amount type.
pub use rust_decimal::Decimal;
