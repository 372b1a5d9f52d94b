// Integration tests for the salesrank binary: stdout contract and exit codes.
//
// Run with: cargo test -p salesrank-cli --test cli_tests -- --nocapture

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const DATASET: &str = r#"{
  "sellers": [
    { "id": "seller_1", "first_name": "Alexey", "last_name": "Petrov" },
    { "id": "seller_2", "first_name": "Ivan", "last_name": "Sidorov" }
  ],
  "products": [
    { "sku": "SKU_001", "purchase_price": 10 },
    { "sku": "SKU_002", "purchase_price": 5 }
  ],
  "purchase_records": [
    {
      "seller_id": "seller_2",
      "items": [{ "sku": "SKU_001", "quantity": 3, "sale_price": 20, "discount": 0 }],
      "total_amount": 60,
      "total_discount": 0
    },
    {
      "seller_id": "seller_1",
      "items": [{ "sku": "SKU_002", "quantity": 2, "sale_price": 10, "discount": 0 }],
      "total_amount": 20,
      "total_discount": 0
    },
    {
      "seller_id": "seller_404",
      "items": [{ "sku": "SKU_001", "quantity": 9, "sale_price": 99 }],
      "total_amount": 891
    }
  ]
}"#;

fn salesrank() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_salesrank"));
    cmd.env_remove("SALESRANK_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    salesrank().args(args).output().expect("run salesrank")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "exit code: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

// ===========================================================================
// salesrank report
// ===========================================================================

#[test]
fn report_json_is_single_ranked_array() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data.json", DATASET);

    let output = run(&["report", data.to_str().unwrap(), "--format", "json"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let val: serde_json::Value = serde_json::from_str(stdout.trim()).expect("stdout must be JSON");
    let rows = val.as_array().expect("report must be a JSON array");
    assert_eq!(rows.len(), 2);

    // seller_2: 60 revenue - 30 cost = 30 profit, leader bonus 4.5
    assert_eq!(rows[0]["seller_id"], "seller_2");
    assert_eq!(rows[0]["name"], "Ivan Sidorov");
    assert_eq!(rows[0]["profit"], serde_json::json!(30.0));
    assert_eq!(rows[0]["bonus"], serde_json::json!(4.5));
    assert_eq!(rows[0]["sales_count"], 1);
    assert_eq!(rows[0]["top_products"][0]["sku"], "SKU_001");
    assert_eq!(rows[0]["top_products"][0]["quantity"], 3);

    // seller_1 is rank 1 of 2: podium rate applies before the last-rank rule
    assert_eq!(rows[1]["seller_id"], "seller_1");
    assert_eq!(rows[1]["profit"], serde_json::json!(10.0));
    assert_eq!(rows[1]["bonus"], serde_json::json!(1.0));
}

#[test]
fn report_csv_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data.json", DATASET);
    let out = dir.path().join("report.csv");

    let output = run(&[
        "report",
        data.to_str().unwrap(),
        "--format",
        "csv",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert_success(&output);
    assert!(output.stdout.is_empty(), "report goes to the file, not stdout");

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "seller_2,Ivan Sidorov,60.00,30.00,1,4.50,SKU_001:3");
}

#[test]
fn report_with_config_changes_bonus() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data.json", DATASET);
    let config = write_file(dir.path(), "bonus.salesrank.toml", "[bonus]\nleader = 0.5\n");

    let output = run(&[
        "report",
        data.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert_success(&output);

    let val: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(val[0]["bonus"], serde_json::json!(15.0));
}

#[test]
fn report_table_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data.json", DATASET);

    let output = run(&["report", data.to_str().unwrap()]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("rank"));
    assert!(lines[1].contains("Ivan Sidorov"));
    assert!(lines[2].contains("Alexey Petrov"));
}

// ===========================================================================
// Failures
// ===========================================================================

#[test]
fn empty_products_exits_invalid_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(
        dir.path(),
        "data.json",
        r#"{"sellers": [{"id": "s"}], "products": [], "purchase_records": [{"seller_id": "s"}]}"#,
    );

    let output = run(&["report", data.to_str().unwrap(), "--format", "json"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("products"), "stderr: {stderr}");
}

#[test]
fn bad_config_exits_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data.json", DATASET);
    let config = write_file(dir.path(), "bad.toml", "[report]\ntop_products = 0\n");

    let output = run(&["report", data.to_str().unwrap(), "--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn missing_dataset_file_exits_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let output = run(&["report", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(5));
}

// ===========================================================================
// salesrank validate
// ===========================================================================

#[test]
fn validate_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data.json", DATASET);

    let output = run(&["validate", data.to_str().unwrap()]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 sellers, 2 products, 3 purchase records (3 line items)"), "{stdout}");
}

#[test]
fn validate_rejects_non_list_collection() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(
        dir.path(),
        "data.json",
        r#"{"sellers": "nobody", "products": [], "purchase_records": []}"#,
    );

    let output = run(&["validate", data.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(4));
}
