use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn originsense() -> Command {
    let mut cmd = Command::cargo_bin("originsense").unwrap();
    // Keep runs independent of the developer's own config and terminal.
    cmd.env("ORIGINSENSE_CONFIG", "")
        .env("XDG_CONFIG_HOME", "/nonexistent-originsense-test")
        .env_remove("ORIGINSENSE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn detect_reads_stdin() {
    originsense()
        .arg("detect")
        .write_stdin("Country of Origin: India\nManufacturer: Tata Consumer Products, Mumbai, Maharashtra")
        .assert()
        .success()
        .stdout(contains("MADE IN INDIA (100%)"));
}

#[test]
fn detect_foreign_origin() {
    originsense()
        .arg("detect")
        .write_stdin("Country of Origin: China Importer: XYZ India Pvt Ltd, Delhi")
        .assert()
        .success()
        .stdout(contains("NOT MADE IN INDIA"));
}

#[test]
fn detect_without_evidence_is_unknown() {
    originsense()
        .arg("detect")
        .write_stdin("A lovely ceramic mug")
        .assert()
        .success()
        .stdout(contains("ORIGIN UNKNOWN"));
}

#[test]
fn detect_explain_lists_fields() {
    originsense()
        .args(["detect", "--explain"])
        .write_stdin("Manufactured by: Company Ltd, Plot 123, MIDC Area, Pune, Maharashtra")
        .assert()
        .success()
        .stdout(contains("Explanation:"))
        .stdout(contains("signal = manufacturer_address"))
        .stdout(contains("manufacturer = Company Ltd, Plot 123, MIDC Area, Pune, Maharashtra"))
        .stdout(contains("country_of_origin = none"));
}

#[test]
fn detect_json_has_version_and_badge() {
    let output = originsense()
        .args(["detect", "--json"])
        .write_stdin("Address: 123 Main Road, Bangalore 560001")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "0.1.0");
    assert_eq!(json["is_indian"], true);
    assert_eq!(json["indicator"], "City: bangalore");
    assert_eq!(json["signal"], "geography");
    assert_eq!(json["badge"], "made_in_india");
    assert!((json["confidence"].as_f64().unwrap() - 0.88).abs() < 1e-6);
    assert!(json.get("fields").is_none());
}

#[test]
fn detect_html_file_by_extension() {
    let file = write_temp(
        ".html",
        r#"<html><body><table>
            <tr><th>Country of Origin</th><td>India</td></tr>
            <tr><th>Manufacturer</th><td>Stovekraft Limited, Harohalli Industrial Area, Kanakapura Taluk, Karnataka</td></tr>
        </table></body></html>"#,
    );
    originsense()
        .arg("detect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("MADE IN INDIA (100%)"));
}

#[test]
fn threshold_flag_changes_the_badge() {
    originsense()
        .args(["detect", "--threshold", "0.9"])
        .write_stdin("Country of Origin: India")
        .assert()
        .success()
        .stdout(contains("ORIGIN UNKNOWN"));
}

#[test]
fn invalid_threshold_is_a_usage_error() {
    originsense()
        .args(["detect", "--threshold", "2"])
        .write_stdin("Made in India")
        .assert()
        .code(2)
        .stderr(contains("threshold"));
}

#[test]
fn missing_input_file_exits_2() {
    originsense()
        .args(["detect", "/definitely/not/here.txt"])
        .assert()
        .code(2)
        .stderr(contains("failed to read"));
}

#[test]
fn check_exit_codes() {
    originsense()
        .args(["check", "--quiet"])
        .write_stdin("Made in India")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    originsense()
        .arg("check")
        .write_stdin("Country of Origin: Vietnam")
        .assert()
        .code(1)
        .stdout(contains("NOT MADE IN INDIA"));

    originsense()
        .args(["check", "-q"])
        .write_stdin("nothing useful here")
        .assert()
        .code(1);
}

#[test]
fn config_file_controls_no_evidence_display() {
    let config = write_temp(".toml", "[display]\nno_evidence = \"not_made_in_india\"\n");
    originsense()
        .arg("--config")
        .arg(config.path())
        .arg("detect")
        .write_stdin("A lovely ceramic mug")
        .assert()
        .success()
        .stdout(contains("NOT MADE IN INDIA"));
}

#[test]
fn config_from_environment() {
    let config = write_temp(".toml", "[geography]\nextra_cities = [\"Kundli\"]\n");
    originsense()
        .env("ORIGINSENSE_CONFIG", config.path())
        .args(["classify", "Unit 4, Kundli"])
        .assert()
        .success()
        .stdout(contains("match_value = kundli"));
}

#[test]
fn broken_config_exits_2() {
    let config = write_temp(".toml", "[display\nthreshold = ");
    originsense()
        .arg("--config")
        .arg(config.path())
        .arg("detect")
        .write_stdin("Made in India")
        .assert()
        .code(2)
        .stderr(contains("invalid config"));
}

#[test]
fn classify_prints_match() {
    originsense()
        .args(["classify", "Plot", "12,", "SIPCOT", "Hosur"])
        .assert()
        .success()
        .stdout(contains("is_indian = true"))
        .stdout(contains("match_type = Industrial Area"))
        .stdout(contains("match_value = sipcot"));
}

#[test]
fn classify_requires_text() {
    originsense().arg("classify").assert().failure();
}

#[test]
fn schema_describes_the_report() {
    originsense()
        .arg("schema")
        .assert()
        .success()
        .stdout(contains("\"DetectionReport\""))
        .stdout(contains("\"is_indian\""))
        .stdout(contains("\"badge\""));
}

#[test]
fn no_subcommand_prints_help() {
    originsense()
        .assert()
        .failure()
        .stderr(contains("Usage"));
}
