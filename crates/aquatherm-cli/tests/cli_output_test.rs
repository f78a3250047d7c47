//! Integration tests for the aquatherm binary
//!
//! These tests verify JSON output, configuration layering, dry-run mode and
//! failure exit codes without a running analysis service.

use std::io::Write;
use std::net::TcpListener;
use std::process::{Command, Output};

const ENV_VARS: [&str; 5] = [
    "AQUATHERM_API_URL",
    "AQUATHERM_TIMEOUT_SECS",
    "AQUATHERM_LAT",
    "AQUATHERM_LNG",
    "AQUATHERM_ZOOM",
];

fn aquatherm(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_aquatherm"));
    for var in ENV_VARS {
        command.env_remove(var);
    }
    command.env("RUST_LOG", "error");
    command.args(args).output().expect("Failed to execute command")
}

fn json_stdout(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

/// A local URL with nothing listening behind it
fn closed_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

#[test]
fn test_config_json_defaults() {
    let output = aquatherm(&["config", "--json"]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["api_base_url"]["value"], "http://localhost:8000/api");
    assert_eq!(parsed["data"]["api_base_url"]["source"], "Default");
    assert_eq!(parsed["data"]["timeout"]["value"], "30s");
    assert_eq!(parsed["data"]["zoom"]["value"], "12");
}

#[test]
fn test_config_precedence_file_then_flag() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_base_url = \"http://analysis.internal:9000/api\"").unwrap();
    writeln!(file, "timeout_secs = 45").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = aquatherm(&["config", "--json", "--config", &path, "--timeout", "5"]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    assert_eq!(parsed["data"]["api_base_url"]["value"], "http://analysis.internal:9000/api");
    assert_eq!(parsed["data"]["api_base_url"]["source"], "File");
    assert_eq!(parsed["data"]["timeout"]["value"], "5s");
    assert_eq!(parsed["data"]["timeout"]["source"], "Cli");
}

#[test]
fn test_invalid_api_url_flag_fails() {
    let output = aquatherm(&["config", "--api-url", "localhost:8000"]);
    assert!(!output.status.success());
}

#[test]
fn test_route_json() {
    let output = aquatherm(&["route", "/console/", "--json"]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    assert_eq!(parsed["data"]["screen"], "console");
    assert_eq!(parsed["data"]["canonical_path"], "/console");
}

#[test]
fn test_unknown_route_fails() {
    let output = aquatherm(&["route", "/admin"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown route"));
}

#[test]
fn test_dry_run_sends_nothing() {
    // The URL is unreachable, so success proves no request was made
    let api_url = closed_api_url();
    let output = aquatherm(&["simulate", "--percent", "40", "--dry-run", "--json", "--api-url", &api_url]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let planned = parsed["data"]["planned_requests"].as_array().unwrap();
    assert_eq!(planned.len(), 2);

    let fields = planned[1]["fields"].as_array().unwrap();
    let factor = fields.iter().find(|f| f["name"] == "simulation_factor").unwrap();
    assert_eq!(factor["value"], "0.6");
    assert!(planned[0]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .all(|f| f["name"] != "simulation_mode"));
}

#[test]
fn test_dry_run_upload_plans_file_part() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(b"\x89PNG fake").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = aquatherm(&["analyze", "--file", &path, "--dry-run", "--json"]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let planned = &parsed["data"]["planned_requests"][0];
    assert_eq!(planned["file"]["size_bytes"], 9);
    assert_eq!(planned["fields"][0]["value"], "false");
}

#[test]
fn test_missing_upload_file_fails() {
    let output = aquatherm(&["analyze", "--file", "/nonexistent/drone.png", "--dry-run"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Upload file could not be read"));
}

#[test]
fn test_unreachable_service_exits_nonzero() {
    let api_url = closed_api_url();
    let output = aquatherm(&["analyze", "--api-url", &api_url, "--timeout", "5"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Analysis service unreachable"));
}

#[test]
fn test_out_of_range_percent_is_rejected() {
    let output = aquatherm(&["simulate", "--percent", "101"]);
    assert!(!output.status.success());
}
