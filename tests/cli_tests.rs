//! CLI integration tests
//!
//! Each test runs the binary against an isolated data directory via the
//! `DIVVY_CLI_DATA_DIR` override.

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn divvy(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("divvy").expect("binary exists");
    cmd.env("DIVVY_CLI_DATA_DIR", data_dir.path());
    cmd
}

fn seed_group(data_dir: &TempDir) {
    divvy(data_dir)
        .args(["group", "create", "Trip"])
        .assert()
        .success();
    for name in ["Alice", "Bob", "Carol"] {
        divvy(data_dir)
            .args(["participant", "add", "Trip", name])
            .assert()
            .success();
    }
}

#[test]
fn group_create_and_list() {
    let data_dir = TempDir::new().unwrap();

    divvy(&data_dir)
        .args(["group", "create", "Trip", "--currency", "eur"])
        .assert()
        .success()
        .stdout(contains("Created group: Trip").and(contains("Currency: EUR")));

    divvy(&data_dir)
        .args(["group", "list"])
        .assert()
        .success()
        .stdout(contains("Trip").and(contains("EUR")));
}

#[test]
fn duplicate_group_fails() {
    let data_dir = TempDir::new().unwrap();

    divvy(&data_dir)
        .args(["group", "create", "Trip"])
        .assert()
        .success();

    divvy(&data_dir)
        .args(["group", "create", "Trip"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn expense_and_balance_flow() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args([
            "expense", "add", "Trip", "Dinner", "30.00", "--payer", "Alice",
            "--category", "food",
        ])
        .assert()
        .success()
        .stdout(contains("Added expense: Dinner for $30.00"));

    divvy(&data_dir)
        .args(["balance", "Trip"])
        .assert()
        .success()
        .stdout(
            contains("Alice")
                .and(contains("$20.00"))
                .and(contains("is owed"))
                .and(contains("$10.00")),
        );
}

#[test]
fn custom_split_mismatch_rejected() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args([
            "expense", "add", "Trip", "Taxi", "20.00", "--payer", "Bob", "--split",
            "custom", "Alice=10.00", "Bob=5.00",
        ])
        .assert()
        .failure()
        .stderr(contains("must equal the total expense amount"));
}

#[test]
fn percentage_split_balances() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args([
            "expense", "add", "Trip", "Hotel", "100.00", "--payer", "Carol", "--split",
            "percentage", "Alice=50", "Bob=25", "Carol=25",
        ])
        .assert()
        .success()
        .stdout(contains("Split (percentage):").and(contains("Alice: $50.00")));
}

#[test]
fn settlement_settles_up() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args([
            "expense", "add", "Trip", "Gas", "30.00", "--payer", "Alice",
        ])
        .assert()
        .success();

    // The settlement's `from` side is debited, so Alice -> debtor zeroes
    // out each pair
    for debtor in ["Bob", "Carol"] {
        divvy(&data_dir)
            .args(["settlement", "record", "Trip", "Alice", debtor, "10.00"])
            .assert()
            .success()
            .stdout(contains(format!("Alice paid {} $10.00", debtor)));
    }

    divvy(&data_dir)
        .args(["balance", "Trip"])
        .assert()
        .success()
        .stdout(contains("settled up"));
}

#[test]
fn perspective_balance_output() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args([
            "expense", "add", "Trip", "Brunch", "30.00", "--payer", "Alice",
        ])
        .assert()
        .success();

    divvy(&data_dir)
        .args(["balance", "Trip", "--perspective", "Alice"])
        .assert()
        .success()
        .stdout(contains("from Alice's perspective").and(contains("Alice owes")));

    divvy(&data_dir)
        .args(["balance", "Trip", "--perspective", "Mallory"])
        .assert()
        .failure()
        .stderr(contains("Unknown participant: Mallory"));
}

#[test]
fn referenced_participant_cannot_be_removed() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args([
            "expense", "add", "Trip", "Snacks", "9.00", "--payer", "Bob",
        ])
        .assert()
        .success();

    divvy(&data_dir)
        .args(["participant", "remove", "Trip", "Bob"])
        .assert()
        .failure()
        .stderr(contains("referenced by expenses or settlements"));
}

#[test]
fn invalid_amount_rejected() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args([
            "expense", "add", "Trip", "Oops", "12.345", "--payer", "Alice",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn export_text_summary() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args([
            "expense", "add", "Trip", "Tickets", "45.00", "--payer", "Alice",
        ])
        .assert()
        .success();

    divvy(&data_dir)
        .args(["export", "text", "Trip"])
        .assert()
        .success()
        .stdout(
            contains("EXPENSE SUMMARY - TRIP")
                .and(contains("PARTICIPANTS:"))
                .and(contains("TOTAL EXPENSES: $45.00")),
        );
}

#[test]
fn export_csv_to_file() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args([
            "expense", "add", "Trip", "Ferry", "12.00", "--payer", "Carol",
        ])
        .assert()
        .success();

    let out_path = data_dir.path().join("summary.csv");
    divvy(&data_dir)
        .args(["export", "csv", "Trip", "--output"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("Exported summary to"));

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.contains("Category,Description,Amount,Currency,Payer,Date"));
    assert!(contents.contains("Ferry"));
    assert!(contents.contains("Total Expenses,12.00"));
}

#[test]
fn data_persists_between_invocations() {
    let data_dir = TempDir::new().unwrap();
    seed_group(&data_dir);

    divvy(&data_dir)
        .args(["group", "show", "Trip"])
        .assert()
        .success()
        .stdout(contains("Participants:       3"));
}
