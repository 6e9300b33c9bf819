use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("rent_quote_cli").unwrap()
}

#[test]
fn quote_command_prints_summary() {
    cli()
        .args(["quote", "apartment", "rooms=2", "parking", "installments=5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Property: Apartment"))
        .stdout(predicate::str::contains("Monthly rent: R$ 1140,00"))
        .stdout(predicate::str::contains("Contract installment: R$ 400,00"))
        .stdout(predicate::str::contains(
            "Monthly total (first 5 months): R$ 1540,00",
        ));
}

#[test]
fn quote_command_writes_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("studio.csv");
    cli()
        .args(["quote", "studio", "spots=2", "installments=2"])
        .arg(format!("csv={}", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV written to"));

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 13);
    assert!(text.lines().nth(1).unwrap().ends_with(";1450,00;1000,00;2450,00"));
}

#[test]
fn quote_command_emits_json_projection() {
    cli()
        .args(["quote", "house", "parking", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"year_month\""))
        .stdout(predicate::str::contains("\"rent_amount\": \"1200"));
}

#[test]
fn invalid_installments_fail() {
    cli()
        .args(["quote", "house", "installments=6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "installment count must be between 1 and 5, got 6",
        ));
}

#[test]
fn rates_command_prints_config() {
    cli()
        .arg("rates")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_installments\": 5"))
        .stdout(predicate::str::contains("orcamento_parcelas.csv"));
}

#[test]
fn unknown_command_prints_usage() {
    cli()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: rent_quote_cli"));
}
