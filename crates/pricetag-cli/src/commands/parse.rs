//! Parse command for one or more price strings.

use std::io::{self, BufRead};

use clap::{Args, ValueEnum};
use pricetag_core::{parse_price, Decimal};
use serde::Serialize;
use tracing::debug;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Price strings to parse (reads stdin, one per line, if omitted)
    input: Vec<String>,

    /// Text of an element that may contain the currency, used as a hint
    #[arg(short = 'c', long)]
    currency_hint: Option<String>,

    /// Decimal separator to assume instead of guessing one
    #[arg(short = 'd', long)]
    decimal_separator: Option<char>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Csv,
    Text,
}

/// One parsed input line.
#[derive(Serialize)]
struct ParsedRecord {
    input: String,
    amount: Option<Decimal>,
    currency: Option<String>,
    amount_text: Option<String>,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let inputs: Vec<String> = if args.input.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        args.input.clone()
    };

    debug!("parsing {} price strings", inputs.len());

    let records: Vec<ParsedRecord> = inputs
        .into_iter()
        .map(|input| {
            let price = parse_price(
                Some(&input),
                args.currency_hint.as_deref(),
                args.decimal_separator,
            );
            ParsedRecord {
                input,
                amount: price.amount,
                currency: price.currency,
                amount_text: price.amount_text,
            }
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            for record in &records {
                println!("{}", serde_json::to_string(record)?);
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(io::stdout());
            wtr.write_record(["input", "amount", "currency", "amount_text"])?;
            for record in &records {
                wtr.write_record([
                    record.input.as_str(),
                    &record.amount.map(|a| a.to_string()).unwrap_or_default(),
                    record.currency.as_deref().unwrap_or(""),
                    record.amount_text.as_deref().unwrap_or(""),
                ])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Text => {
            for record in &records {
                println!("{}", record.input);
                println!(
                    "  amount:   {}",
                    record
                        .amount
                        .map(|a| a.to_string())
                        .unwrap_or_else(|| "-".to_string())
                );
                println!("  currency: {}", record.currency.as_deref().unwrap_or("-"));
            }
        }
    }

    Ok(())
}
