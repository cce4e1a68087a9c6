//! Integration tests for the csv-report CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PEOPLE: &str = r#"[
    { "Name": "John", "Age": 28, "City": "New \n\n York" },
    { "Name": "Jane", "Age": 32, "City": "London" },
    { "Name": "Peter", "Age": 22, "City": "Berlin" }
]"#;

fn csv_report(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("csv-report").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("CSV_REPORT_CSV__DELIMITER")
        .env_remove("CSV_REPORT_CSV__QUOTE_VALUES");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("csv-report").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("csv-report").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("csv-report"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("csv-report").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_generate_heterogeneous_report() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("reports")).unwrap();
    fs::write(
        temp.path().join("rows.json"),
        r#"[{"Name":"John","Age":28},{"Name":"Jane","City":"London"}]"#,
    )
    .unwrap();

    csv_report(&temp)
        .args(["generate", "rows.json", "-o", "test-report.csv", "-d", "reports"])
        .args(["--delimiter", "|", "--quote"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test-report.csv"));

    let content = fs::read_to_string(temp.path().join("reports/test-report.csv")).unwrap();
    assert_eq!(
        content,
        "\"Name\"|\"Age\"|\"City\"\n\"John\"|\"28\"|\"\"\n\"Jane\"|\"\"|\"London\"\n"
    );
}

#[test]
fn test_generate_empty_rows_writes_placeholder() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rows.json"), "[]").unwrap();

    csv_report(&temp)
        .args(["generate", "rows.json", "-o", "empty.csv"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("empty.csv")).unwrap();
    assert_eq!(content, "No Results Found");
}

#[test]
fn test_generate_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rows.json"), PEOPLE).unwrap();

    csv_report(&temp)
        .args(["generate", "rows.json", "-o", "r.csv", "-d", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write report"));
}

#[test]
fn test_generate_rejects_invalid_rows() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rows.json"), r#"{"Name":"John"}"#).unwrap();

    csv_report(&temp)
        .args(["generate", "rows.json", "-o", "r.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON array"));
    assert!(!temp.path().join("r.csv").exists());
}

#[test]
fn test_preview_from_stdin() {
    let temp = TempDir::new().unwrap();

    csv_report(&temp)
        .args(["preview", "-", "--delimiter", "|", "--quote"])
        .write_stdin(PEOPLE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\"Name\"|\"Age\"|\"City\"\n\"John\"|\"28\"|\"New \n\n York\"\n",
        ))
        .stdout(predicate::str::ends_with("\"Peter\"|\"22\"|\"Berlin\"\n"));
}

#[test]
fn test_preview_rejects_multi_char_delimiter() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rows.json"), PEOPLE).unwrap();

    csv_report(&temp)
        .args(["preview", "rows.json", "--delimiter", "||"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid delimiter"));
}

#[test]
fn test_repository_config_is_applied() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rows.json"), r#"[{"a":"1","b":"2"}]"#).unwrap();
    fs::write(
        temp.path().join("csv-report.toml"),
        "[csv]\ndelimiter = \";\"\nquote_values = true\n",
    )
    .unwrap();

    csv_report(&temp)
        .args(["preview", "rows.json"])
        .assert()
        .success()
        .stdout("\"a\";\"b\"\n\"1\";\"2\"\n");

    // Flags beat the config file
    csv_report(&temp)
        .args(["preview", "rows.json", "--quote", "false"])
        .assert()
        .success()
        .stdout("a;b\n1;2\n");
}

#[test]
fn test_environment_beats_repository_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rows.json"), r#"[{"a":"1","b":"2"}]"#).unwrap();
    fs::write(temp.path().join("csv-report.toml"), "[csv]\ndelimiter = \"|\"\n").unwrap();

    csv_report(&temp)
        .args(["preview", "rows.json"])
        .env("CSV_REPORT_CSV__DELIMITER", ";")
        .assert()
        .success()
        .stdout("a;b\n1;2\n");

    // Flags beat the environment
    csv_report(&temp)
        .args(["preview", "rows.json", "--delimiter", ","])
        .env("CSV_REPORT_CSV__DELIMITER", ";")
        .assert()
        .success()
        .stdout("a,b\n1,2\n");
}

#[test]
fn test_numeric_environment_delimiter() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rows.json"), r#"[{"a":"x","b":"y"}]"#).unwrap();

    csv_report(&temp)
        .args(["preview", "rows.json"])
        .env("CSV_REPORT_CSV__DELIMITER", "1")
        .assert()
        .success()
        .stdout("a1b\nx1y\n");
}

#[test]
fn test_user_config_is_applied() {
    let temp = TempDir::new().unwrap();
    let user_dir = temp.path().join(".config/csv-report");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("config.toml"), "[csv]\nquote_values = true\n").unwrap();
    fs::write(temp.path().join("rows.json"), r#"[{"a":"1"}]"#).unwrap();

    csv_report(&temp)
        .args(["preview", "rows.json"])
        .assert()
        .success()
        .stdout("\"a\"\n\"1\"\n");

    // Repository config sits above the user config
    fs::write(temp.path().join("csv-report.toml"), "[csv]\nquote_values = false\n").unwrap();
    csv_report(&temp)
        .args(["preview", "rows.json"])
        .assert()
        .success()
        .stdout("a\n1\n");
}

#[test]
fn test_null_cells_render_as_text() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rows.json"), r#"[{"a":null,"b":"x"},{"b":"y"}]"#).unwrap();

    csv_report(&temp)
        .args(["preview", "rows.json"])
        .assert()
        .success()
        .stdout("a,b\nnull,x\n,y\n");
}

#[test]
fn test_missing_custom_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rows.json"), PEOPLE).unwrap();

    csv_report(&temp)
        .args(["preview", "rows.json", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_sample_writes_fixed_schema() {
    let temp = TempDir::new().unwrap();

    csv_report(&temp)
        .args(["sample", "--delimiter", "|", "--quote"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV file created successfully!"));

    let content = fs::read_to_string(temp.path().join("output.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "\"Name\"|\"Age\"|\"City\"");
    assert_eq!(lines[1], "\"John\"|\"28\"|\"2025-03-01T00:06:29.683Z\"");
}

#[test]
fn test_config_show_missing_custom_config_fails() {
    let temp = TempDir::new().unwrap();

    csv_report(&temp)
        .args(["config", "show", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_show_prints_json() {
    let temp = TempDir::new().unwrap();

    csv_report(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"delimiter\": \",\""))
        .stdout(predicate::str::contains("text/csv"));
}
