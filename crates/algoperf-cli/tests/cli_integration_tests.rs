// algoperf - Algorithm Performance Analysis
//
// Copyright (c) 2025 algoperf contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests of the `algoperf` binary.

use algoperf_test::fixtures::{write_sample_dir, GREEDY2_CSV};
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{NamedTempFile, TempDir};

fn algoperf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("algoperf").expect("Failed to find algoperf binary");
    cmd.env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("RUST_LOG")
        .env_remove("ALGOPERF_MAX_FILE_SIZE");
    cmd
}

fn sample_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_sample_dir(dir.path()).expect("Failed to write sample sources");
    dir
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help_output() {
    algoperf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm performance analysis"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("parse"));
}

#[test]
fn test_version_output() {
    algoperf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("algoperf"));
}

#[test]
fn test_no_subcommand_fails() {
    algoperf_cmd().assert().failure();
}

// ============================================================================
// Analyze
// ============================================================================

#[test]
fn test_analyze_writes_report() {
    let dir = sample_dir();
    let out = TempDir::new().unwrap();
    let report = out.path().join("report.json");

    algoperf_cmd()
        .arg("analyze")
        .arg(dir.path())
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("6 read, 0 failed, 0 empty"))
        .stdout(predicate::str::contains("8 parsed, 1 skipped"))
        .stdout(predicate::str::contains("76.92%"))
        .stdout(predicate::str::contains("Report written to"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    let datasets = json["datasets"].as_array().unwrap();
    assert_eq!(datasets.len(), 6);
    assert_eq!(datasets[0]["axis"], "time_vs_size");
}

#[test]
fn test_analyze_json_to_stdout() {
    let dir = sample_dir();

    let output = algoperf_cmd()
        .arg("analyze")
        .arg(dir.path())
        .arg("--json")
        .arg("--serial")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let axes: Vec<&str> = json["datasets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["axis"].as_str().unwrap())
        .collect();
    assert!(axes.contains(&"quality_vs_size"));
    assert!(axes.contains(&"memory_vs_size"));
}

#[test]
fn test_analyze_optimal_override() {
    let dir = sample_dir();

    algoperf_cmd()
        .args(["analyze", "--optimal", "brute-force"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("76.92%"));
}

#[test]
fn test_analyze_config_file() {
    let dir = sample_dir();
    let config = create_temp_file(r#"{"parallel": false, "optimal": ["brute-force"]}"#, ".json");

    algoperf_cmd()
        .arg("analyze")
        .arg(dir.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success();
}

#[test]
fn test_analyze_bad_config_fails() {
    let dir = sample_dir();
    let config = create_temp_file("{not json", ".json");

    algoperf_cmd()
        .arg("analyze")
        .arg(dir.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_analyze_empty_dir_fails() {
    let dir = TempDir::new().unwrap();

    algoperf_cmd()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: no valid measurements"));
}

#[test]
fn test_analyze_missing_dir_fails() {
    algoperf_cmd()
        .args(["analyze", "/no/such/algoperf/dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot list"));
}

#[test]
fn test_max_file_size_env_fails_sources() {
    let dir = sample_dir();

    algoperf_cmd()
        .env("ALGOPERF_MAX_FILE_SIZE", "1")
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("0 read, 6 failed"))
        .stderr(predicate::str::contains("no valid measurements"));
}

#[test]
fn test_config_size_limit_applies_without_env() {
    let dir = sample_dir();
    let config = create_temp_file(r#"{"parse": {"max_source_bytes": 1}}"#, ".json");

    algoperf_cmd()
        .arg("analyze")
        .arg(dir.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("0 read, 6 failed"));
}

#[test]
fn test_invalid_format_rejected() {
    let dir = sample_dir();

    algoperf_cmd()
        .args(["analyze", "--format", "yaml"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

// ============================================================================
// Parse
// ============================================================================

#[test]
fn test_parse_table_output() {
    let file = create_temp_file(GREEDY2_CSV, "_greedy2.csv");

    algoperf_cmd()
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 measurements, 1 skipped"));
}

#[test]
fn test_parse_json_output() {
    let file = create_temp_file(GREEDY2_CSV, "_greedy2.csv");

    let output = algoperf_cmd()
        .args(["parse", "--json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["format"], "csv");
    assert_eq!(json["measurements"].as_array().unwrap().len(), 2);
    assert_eq!(json["skipped"].as_array().unwrap().len(), 1);
    assert_eq!(json["truncated"], false);
}

#[test]
fn test_parse_missing_file_fails() {
    algoperf_cmd()
        .args(["parse", "/no/such/greedy1.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable"));
}
