use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cashflow(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashflow").expect("binary");
    cmd.env("CASHFLOW_CLI_DATA_DIR", home.path())
        .env_remove("RUST_LOG")
        .env_remove("CASHFLOW_SCENARIO");
    cmd
}

fn init_sample(home: &TempDir) {
    cashflow(home)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planning file created"));
}

#[test]
fn init_creates_planning_file_once() {
    let home = TempDir::new().unwrap();
    init_sample(&home);
    assert!(home.path().join("data").join("cashflow.json").exists());
    assert!(home.path().join("config.json").exists());

    cashflow(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn forecast_prints_table_insights_and_metrics() {
    let home = TempDir::new().unwrap();
    init_sample(&home);

    cashflow(&home)
        .arg("forecast")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash-Flow Forecast: Realistic"))
        .stdout(predicate::str::contains("Dec"))
        .stdout(predicate::str::contains("Seasonal Pattern"))
        .stdout(predicate::str::contains("Financial Metrics"));
}

#[test]
fn forecast_unknown_scenario_fails() {
    let home = TempDir::new().unwrap();
    init_sample(&home);

    cashflow(&home)
        .args(["forecast", "--scenario", "boom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scenario not found: boom"));
}

#[test]
fn hand_edited_invalid_plan_is_rejected() {
    let home = TempDir::new().unwrap();
    init_sample(&home);
    std::fs::write(
        home.path().join("data").join("cashflow.json"),
        r#"{"vatQuarter": 0, "incomeStreams": []}"#,
    )
    .unwrap();

    cashflow(&home)
        .arg("forecast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid planning file"));
}

#[test]
fn scenario_from_environment() {
    let home = TempDir::new().unwrap();
    init_sample(&home);

    cashflow(&home)
        .arg("forecast")
        .env("CASHFLOW_SCENARIO", "optimistic")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash-Flow Forecast: Optimistic"));
}

#[test]
fn income_add_then_list() {
    let home = TempDir::new().unwrap();
    cashflow(&home).arg("init").assert().success();

    cashflow(&home)
        .args(["income", "add", "Callouts", "800", "--growth", "5%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income stream: Callouts"));

    cashflow(&home)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Callouts"))
        .stdout(predicate::str::contains("£800.00"));
}

#[test]
fn seasonal_income_requires_curve() {
    let home = TempDir::new().unwrap();
    cashflow(&home).arg("init").assert().success();

    cashflow(&home)
        .args(["income", "add", "Inspections", "1200", "--frequency", "seasonal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    cashflow(&home)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No income streams configured."));
}

#[test]
fn expense_edit_and_remove() {
    let home = TempDir::new().unwrap();
    init_sample(&home);

    cashflow(&home)
        .args(["expense", "edit", "Fuel", "--amount", "400", "--fixed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("£400.00"))
        .stdout(predicate::str::contains("Variable:  no"));

    cashflow(&home)
        .args(["expense", "remove", "Fuel"])
        .assert()
        .success();

    cashflow(&home)
        .args(["expense", "show", "Fuel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense category not found"));
}

#[test]
fn settings_set_changes_forecast_start() {
    let home = TempDir::new().unwrap();
    init_sample(&home);

    cashflow(&home)
        .args(["settings", "set", "--starting-balance", "12000", "--vat-quarter", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("£12,000.00"));

    cashflow(&home)
        .args(["settings", "set", "--vat-quarter", "4"])
        .assert()
        .failure();
}

#[test]
fn export_json_to_stdout() {
    let home = TempDir::new().unwrap();
    init_sample(&home);

    let output = cashflow(&home)
        .args(["export", "json"])
        .output()
        .expect("run export");
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(payload["projections"].as_array().unwrap().len(), 12);
    assert!(payload["metrics"]["totalIncome"].as_f64().unwrap() > 0.0);
}

#[test]
fn export_csv_to_file() {
    let home = TempDir::new().unwrap();
    init_sample(&home);
    let out = home.path().join("forecast.csv");

    cashflow(&home)
        .args(["export", "csv", "--output"])
        .arg(&out)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Month,Month Name,Income,Expenses,Net Flow,Cumulative Balance"));
    assert_eq!(contents.lines().count(), 13);
}

#[test]
fn compare_lists_every_scenario() {
    let home = TempDir::new().unwrap();
    init_sample(&home);

    cashflow(&home)
        .arg("compare")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pessimistic"))
        .stdout(predicate::str::contains("Realistic"))
        .stdout(predicate::str::contains("Optimistic"));
}
