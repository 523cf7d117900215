use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::{card, cash, payments_csv};

#[test]
fn test_invalid_rows_are_skipped() {
    let csv = payments_csv(&[
        cash("20", "3.5"),
        // 19 digits, over the 16 character limit
        card("0000000000000000000", "000"),
        // Unknown kind
        ["cheque", "", "", "1.0", "0"],
        // Cash without change
        ["cash", "", "", "5", ""],
        card("4111111111111", "42"),
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("smart-ctor"));
    cmd.env_remove("RUST_LOG").arg("payments").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment"))
        .stderr(predicate::str::contains("expected at most 16 characters, got 19"))
        .stderr(predicate::str::contains("cash record requires amount and change"))
        .stdout("Cash 20 change 3.5\nCard No. 4111111111111 pin 42\n");
}

#[test]
fn test_invalid_data_types() {
    let csv = payments_csv(&[cash("not_a_number", "0"), cash("5", "0")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("smart-ctor"));
    cmd.env_remove("RUST_LOG").arg("payments").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment"))
        .stdout("Cash 5 change 0\n");
}

#[test]
fn test_summary_logged() {
    let csv = payments_csv(&[cash("1", "0"), card("1", "1")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("smart-ctor"));
    cmd.env_remove("RUST_LOG").arg("payments").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("processing finished"))
        .stderr(predicate::str::contains("accepted=1"))
        .stderr(predicate::str::contains("rejected=1"));
}

#[test]
fn test_rejected_rows_in_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let csv = payments_csv(&[
        card("0000000000000000000", "000"),
        ["cash", "", "", "5", ""],
        cash("20", "3.5"),
    ])?;

    let output = Command::new(cargo_bin!("smart-ctor"))
        .env_remove("RUST_LOG")
        .args(["--format", "json", "payments"])
        .arg(csv.path())
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0]["kind"], "rejected");
    assert_eq!(lines[0]["violations"][0]["kind"], "too_long");
    assert_eq!(lines[0]["violations"][0]["max"], 16);
    assert_eq!(lines[0]["violations"][0]["actual"], 19);

    assert_eq!(lines[1]["kind"], "rejected");
    assert_eq!(lines[1]["violations"].as_array().map(Vec::len), Some(0));

    assert_eq!(lines[2]["kind"], "cash");

    Ok(())
}

#[test]
fn test_credit_card_kind_accepted_in_csv() {
    let csv = payments_csv(&[["credit_card", "4111111111111", "42", "", ""]]).unwrap();

    Command::new(cargo_bin!("smart-ctor"))
        .env_remove("RUST_LOG")
        .arg("payments")
        .arg(csv.path())
        .assert()
        .success()
        .stdout("Card No. 4111111111111 pin 42\n");
}
