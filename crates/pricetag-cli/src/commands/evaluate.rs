//! Evaluation command: currency detection accuracy over a labeled dataset.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use tracing::debug;

use pricetag_core::parse_price;

/// Arguments for the evaluate command.
#[derive(Args)]
pub struct EvaluateArgs {
    /// Labeled dataset: a JSON array of {"string": ..., "currency": ...}
    dataset: PathBuf,

    /// Write the per-symbol accuracy table to a CSV file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

/// One labeled dataset row. A null currency means no marker is expected.
#[derive(Deserialize)]
struct DatasetRow {
    string: String,
    currency: Option<String>,
}

/// Accuracy bucket for one expected symbol.
#[derive(Default)]
struct SymbolStats {
    correct: usize,
    support: usize,
}

pub fn run(args: EvaluateArgs) -> anyhow::Result<()> {
    let data = fs::read_to_string(&args.dataset)?;
    let rows: Vec<DatasetRow> = serde_json::from_str(&data)?;

    if rows.is_empty() {
        anyhow::bail!("Dataset is empty: {}", args.dataset.display());
    }

    println!(
        "{} Evaluating {} labeled samples",
        style("ℹ").blue(),
        rows.len()
    );

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(rows.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} samples")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb
    };

    let start = Instant::now();
    let predictions: Vec<Option<String>> = rows
        .iter()
        .map(|row| {
            let currency = parse_price(Some(&row.string), None, None).currency;
            pb.inc(1);
            currency
        })
        .collect();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    pb.finish_and_clear();

    // Accuracy per expected symbol; BTreeMap puts the no-currency bucket
    // first and sorts the rest.
    let mut per_symbol: BTreeMap<Option<String>, SymbolStats> = BTreeMap::new();
    let mut correct_total = 0usize;

    for (row, prediction) in rows.iter().zip(&predictions) {
        let stats = per_symbol.entry(row.currency.clone()).or_default();
        stats.support += 1;
        if *prediction == row.currency {
            stats.correct += 1;
            correct_total += 1;
        } else {
            debug!(
                input = %row.string,
                expected = row.currency.as_deref().unwrap_or("<none>"),
                predicted = prediction.as_deref().unwrap_or("<none>"),
                "mismatch"
            );
        }
    }

    print_symbol_table(&per_symbol);

    let global_accuracy = correct_total as f64 / rows.len() as f64;
    println!();
    println!(
        "{} Global accuracy: {}",
        style("✓").green(),
        style(format!("{:.4}", global_accuracy)).bold()
    );
    println!();
    println!("Total processing time:   {:.2} ms", elapsed_ms);
    println!(
        "Time per sample:         {:.6} ms",
        elapsed_ms / rows.len() as f64
    );

    if let Some(report) = &args.report {
        write_report(report, &per_symbol)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            report.display()
        );
    }

    Ok(())
}

fn print_symbol_table(per_symbol: &BTreeMap<Option<String>, SymbolStats>) {
    let sep = "-".repeat(40);
    println!("{sep}");
    println!("{:>15}{:^15}{:<10}", "symbol (target)", "acc", "support");
    println!("{sep}");

    for (symbol, stats) in per_symbol {
        let accuracy = stats.correct as f64 / stats.support as f64;
        let label = symbol.as_deref().unwrap_or("<none>");
        // \u{200e} is a left-to-right mark, keeping Arabic symbols aligned
        println!(
            "{:>15}{:^15}{:<10}",
            format!("\u{200e}{label}"),
            format!("{accuracy:.4}"),
            stats.support
        );
    }
}

fn write_report(
    path: &PathBuf,
    per_symbol: &BTreeMap<Option<String>, SymbolStats>,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["symbol", "accuracy", "support"])?;

    for (symbol, stats) in per_symbol {
        let accuracy = stats.correct as f64 / stats.support as f64;
        wtr.write_record([
            symbol.as_deref().unwrap_or(""),
            &format!("{accuracy:.4}"),
            &stats.support.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
