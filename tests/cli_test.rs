mod common;

use assert_cmd::prelude::*;
use common::Session;
use predicates::prelude::*;

#[test]
fn test_login_status_logout_flow() {
    let session = Session::signed_out();

    session
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));

    session
        .command()
        .args(["login", "--username", "admin", "--password", "admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as admin"));
    assert_eq!(
        std::fs::read_to_string(session.path()).unwrap(),
        "authenticated"
    );

    session
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in"));

    session
        .command()
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));
    assert!(!session.path().exists());
}

#[test]
fn test_wrong_credentials_fail() {
    let session = Session::signed_out();

    session
        .command()
        .args(["login", "--username", "admin", "--password", "hunter2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
    assert!(!session.path().exists());
}

#[test]
fn test_quote_requires_session() {
    let session = Session::signed_out();

    session
        .command()
        .args(["quote", "vehicle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_quote_default_vehicle() {
    let session = Session::signed_in();

    session
        .command()
        .arg("quote")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicle Loan (For cars & bikes)"))
        .stdout(predicate::str::contains("Monthly EMI     $16,413"))
        .stdout(predicate::str::contains("Total payable   $984,794"))
        .stdout(predicate::str::contains("Principal 81.2% | Interest 18.8%"));
}

#[test]
fn test_quote_reclamps_down_payment() {
    let session = Session::signed_in();

    session
        .command()
        .args(["quote", "vehicle", "--loan-amount", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan Amount     $100,000"))
        .stdout(predicate::str::contains("Down payment    $80,000"))
        .stdout(predicate::str::contains("Principal       $20,000"));
}

#[test]
fn test_replay_fixture() {
    let session = Session::signed_in();

    session
        .command()
        .arg("replay")
        .arg(common::fixture("edits.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal Loan"))
        .stdout(predicate::str::contains("Business Loan"))
        .stdout(predicate::str::contains("Down payment    $80,000"))
        .stdout(predicate::str::contains("Tenure          180 Months"))
        .stdout(predicate::str::contains("Interest rate   8.3%"))
        // 0.8 x 2,000,000
        .stdout(predicate::str::contains("Down payment    $1,600,000"))
        .stdout(predicate::str::contains("Interest rate   1.0%"));
}

#[test]
fn test_unknown_category_rejected() {
    let session = Session::signed_in();

    session
        .command()
        .args(["quote", "boat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown loan category"));
}
