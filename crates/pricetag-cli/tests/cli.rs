use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn pricetag() -> Command {
    Command::cargo_bin("pricetag").unwrap()
}

#[test]
fn parse_outputs_json() {
    pricetag()
        .args(["parse", "price: $12.99"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""amount":"12.99""#)
                .and(predicate::str::contains(r#""currency":"$""#)),
        );
}

#[test]
fn parse_unmatched_input_yields_nulls() {
    pricetag()
        .args(["parse", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""amount":null"#));
}

#[test]
fn parse_with_currency_hint() {
    pricetag()
        .args(["parse", "--currency-hint", "GBP", "12.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""currency":"GBP""#));
}

#[test]
fn parse_csv_output() {
    pricetag()
        .args(["parse", "--format", "csv", "1,235 USD"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("input,amount,currency,amount_text")
                .and(predicate::str::contains("1235,USD")),
        );
}

#[test]
fn parse_reads_stdin() {
    pricetag()
        .arg("parse")
        .write_stdin("24,00 €\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""amount":"24.00""#));
}

#[test]
fn evaluate_reports_accuracy() {
    let mut dataset = tempfile::NamedTempFile::new().unwrap();
    write!(
        dataset,
        r#"[
            {{"string": "price: $12.99", "currency": "$"}},
            {{"string": "1,235 USD", "currency": "USD"}},
            {{"string": "hello world", "currency": null}}
        ]"#
    )
    .unwrap();

    pricetag()
        .args(["evaluate", "--quiet"])
        .arg(dataset.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Global accuracy")
                .and(predicate::str::contains("1.0000")),
        );
}

#[test]
fn evaluate_rejects_empty_dataset() {
    let mut dataset = tempfile::NamedTempFile::new().unwrap();
    write!(dataset, "[]").unwrap();

    pricetag()
        .args(["evaluate", "--quiet"])
        .arg(dataset.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset is empty"));
}
