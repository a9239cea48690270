use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "budgetlens";

const TRANSACTIONS: &str = r#"{
  "page": 1,
  "data": [
    {"id": 1, "montant": 100, "type": "revenu", "date": "2024-01-05", "libelle": "Salaire"},
    {"id": 2, "montant": -40, "type": "depense", "date": "2024-01-12", "categorie": "Courses", "libelle": "Marche"},
    {"id": 3, "montant": -10, "type": "virement", "date": "2024-01-20"},
    {"id": 4, "montant": "-25.50", "date_depense": "2024-02-03T10:15:00Z", "categorie": {"nom": "Courses"}},
    {"id": 5, "montant": 30, "type_transaction": "contribution", "date": "2024-02-10"},
    {"id": 6, "montant": 7, "date": "not a date"}
  ]
}"#;

const BUDGETS: &str = r#"[
  {"categorie": "Courses", "mois": "2024-01", "montant_max": 50, "montant_depense": 12},
  {"categorie": "Courses", "mois": "2024-02", "montant_max": 20},
  {"categorie": "Orphan"}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("tx.json"), TRANSACTIONS).expect("write tx");
        std::fs::write(dir.path().join("budgets.json"), BUDGETS).expect("write budgets");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.env("BUDGETLENS_DATA_DIR", self.path("config"));
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn classify_uses_type_hint_then_sign() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["classify", "Virement interne", "500"])
        .assert()
        .success()
        .stdout("transfer\n");

    fx.cmd()
        .args(["classify", "", "-12.30"])
        .assert()
        .success()
        .stdout("expense\n");

    fx.cmd()
        .args(["classify", "", "0"])
        .assert()
        .success()
        .stdout("income\n");
}

#[test]
fn classify_rejects_bad_amount() {
    Fixture::new()
        .cmd()
        .args(["classify", "revenu", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid money format"));
}

#[test]
fn totals_over_sample() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("totals")
        .arg("--file")
        .arg(fx.path("tx.json"))
        .assert()
        .success()
        .stdout(contains("€107.00"))
        .stdout(contains("€65.50"))
        .stdout(contains("€30.00"))
        .stdout(contains("€41.50"));
}

#[test]
fn totals_with_kind_filter() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("totals")
        .arg("--file")
        .arg(fx.path("tx.json"))
        .args(["--kind", "expense"])
        .assert()
        .success()
        .stdout(contains("-€65.50"));
}

#[test]
fn inverted_range_is_rejected() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("totals")
        .arg("--file")
        .arg(fx.path("tx.json"))
        .args(["--from", "2024-03-01", "--to", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn list_shows_classified_rows() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("list")
        .arg("--file")
        .arg(fx.path("tx.json"))
        .args(["--search", "courses"])
        .assert()
        .success()
        .stdout(contains("Marche"))
        .stdout(contains("2024-02-03"))
        .stdout(contains("Salaire").not());
}

#[test]
fn list_limit_reports_truncation() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("list")
        .arg("--file")
        .arg(fx.path("tx.json"))
        .args(["--limit", "2"])
        .assert()
        .success()
        .stdout(contains("Showing 2 of 6 transactions"));
}

#[test]
fn monthly_exports_csv() {
    let fx = Fixture::new();
    let out = fx.path("monthly.csv");

    fx.cmd()
        .arg("monthly")
        .arg("--file")
        .arg(fx.path("tx.json"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Monthly report exported to"));

    let csv = std::fs::read_to_string(out).expect("csv written");
    assert!(csv.contains("2024-01,Jan 24,100,40,0,60,60"));
    assert!(csv.contains("2024-02,Feb 24,0,25.50,30,-25.50,34.50"));
}

#[test]
fn monthly_window_keeps_latest_months() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("monthly")
        .arg("--file")
        .arg(fx.path("tx.json"))
        .args(["--window", "1"])
        .assert()
        .success()
        .stdout(contains("Feb 24"))
        .stdout(contains("Jan 24").not());
}

#[test]
fn budgets_from_reported_spending() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("budgets")
        .arg("--budgets")
        .arg(fx.path("budgets.json"))
        .assert()
        .success()
        .stdout(contains("2 envelope(s)"))
        .stdout(contains("healthy"));
}

#[test]
fn budgets_recomputed_from_records() {
    let fx = Fixture::new();
    let out = fx.path("budgets.csv");

    fx.cmd()
        .arg("budgets")
        .arg("--budgets")
        .arg(fx.path("budgets.json"))
        .arg("--file")
        .arg(fx.path("tx.json"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(out).expect("csv written");
    assert!(csv.contains("Courses,2024-01,50,40,10,80,warning"));
    assert!(csv.contains("Courses,2024-02,20,25.50,-5.50,127.5,exceeded"));
}

#[test]
fn budgets_unknown_month_fails() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("budgets")
        .arg("--budgets")
        .arg(fx.path("budgets.json"))
        .args(["--month", "2023-12"])
        .assert()
        .failure()
        .stderr(contains("Envelope not found"));
}

#[test]
fn envelope_form_validation() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["envelope", "Courses", "2024-01", "0"])
        .assert()
        .failure()
        .stderr(contains("greater than zero"));

    fx.cmd()
        .args(["envelope", "Courses", "2024-13", "100"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));

    fx.cmd()
        .args(["envelope", "Courses", "2024-01", "100"])
        .arg("--file")
        .arg(fx.path("tx.json"))
        .assert()
        .success()
        .stdout(contains("€100.00"))
        .stdout(contains("€40.00"))
        .stdout(contains("40%"));
}

#[test]
fn dashboard_combines_sections() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("dashboard")
        .arg("--file")
        .arg(fx.path("tx.json"))
        .arg("--budgets")
        .arg(fx.path("budgets.json"))
        .assert()
        .success()
        .stdout(contains("Dashboard"))
        .stdout(contains("Transactions: 6 (1 undated)"))
        .stdout(contains("Monthly Overview"))
        .stdout(contains("Budget Status"));
}

#[test]
fn missing_file_is_reported() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("totals")
        .arg("--file")
        .arg(fx.path("nope.json"))
        .assert()
        .failure()
        .stderr(contains("File not found"));
}

#[test]
fn guard_redirects_to_localized_login() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["guard", "--path", "/en/transactions"])
        .assert()
        .success()
        .stdout("redirect /en/login\n");

    fx.cmd()
        .args(["guard", "--path", "/fr/login", "--token", "abc"])
        .assert()
        .success()
        .stdout("redirect /fr/dashboard\n");

    fx.cmd()
        .args(["guard", "--path", "/fr/budgets", "--checking"])
        .assert()
        .success()
        .stdout("wait\n");
}

#[test]
fn guard_json_output() {
    Fixture::new()
        .cmd()
        .args(["guard", "--path", "/budgets", "--json"])
        .assert()
        .success()
        .stdout(contains(r#"{"action":"redirect","target":"/fr/login"}"#));
}

#[test]
fn init_then_config() {
    let fx = Fixture::new();
    fx.cmd().arg("init").assert().success();
    assert!(fx.path("config").join("config.json").exists());

    fx.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Initialized:      true"))
        .stdout(contains("Currency:          EUR"));
}
