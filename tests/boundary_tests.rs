mod common;

use assert_cmd::prelude::*;
use common::Session;
use predicates::prelude::*;

#[test]
fn test_out_of_range_edits_are_clamped() {
    let session = Session::signed_in();

    session
        .command()
        .args([
            "quote",
            "home",
            "--loan-amount",
            "999999999",
            "--tenure",
            "0",
            "--interest-rate",
            "40",
            "--annual-income",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan Amount     $20,000,000"))
        .stdout(predicate::str::contains("Tenure          6 Months"))
        .stdout(predicate::str::contains("Interest rate   25.0%"))
        .stdout(predicate::str::contains("Annual Income   $100,000"));
}

#[test]
fn test_personal_tenure_ceiling() {
    let session = Session::signed_in();

    session
        .command()
        .args(["quote", "personal", "--tenure", "360"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tenure          60 Months"));
}

#[test]
fn test_bounds_listing() {
    let session = Session::signed_out();

    session
        .command()
        .args(["bounds", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Home      Loan Amount     $50,000 - $20,000,000 (step $10,000)",
        ))
        .stdout(predicate::str::contains("Tenure          6 Months - 360 Months (step 1)"))
        .stdout(predicate::str::contains("Personal").not());
}

#[test]
fn test_bounds_override_file() {
    let session = Session::signed_in();
    let overrides = common::write_file(
        r#"[{"category": "personal", "field": "tenure_months", "min": 12, "max": 48, "step": 6}]"#,
    );

    session
        .command()
        .env("LOAN_O_METER_BOUNDS", overrides.path())
        .args(["bounds", "personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tenure          12 Months - 48 Months (step 6)"));

    session
        .command()
        .env("LOAN_O_METER_BOUNDS", overrides.path())
        .args(["quote", "personal", "--tenure", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tenure          48 Months"));
}

#[test]
fn test_invalid_bounds_file_fails() {
    let session = Session::signed_in();
    let overrides = common::write_file(
        r#"[{"field": "interest_rate", "min": 30, "max": 10, "step": 1}]"#,
    );

    session
        .command()
        .env("LOAN_O_METER_BOUNDS", overrides.path())
        .args(["quote", "home"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
