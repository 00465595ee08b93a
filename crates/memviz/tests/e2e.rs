//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn memviz() -> Command {
    let mut cmd = Command::cargo_bin("memviz").expect("binary not found");
    cmd.env_remove("MEMVIZ_PANEL").env_remove("MEMVIZ_SCALE");
    cmd
}

#[test]
fn help_flag() {
    memviz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--panel"))
        .stdout(predicate::str::contains("--dump"));
}

#[test]
fn version_flag() {
    memviz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("memviz"));
}

#[test]
fn dump_lists_every_chart() {
    memviz()
        .arg("--dump")
        .assert()
        .success()
        .stdout(predicate::str::contains("hierarchy-speed (Inverse scale)"))
        .stdout(predicate::str::contains("latency (Logarithmic scale)"))
        .stdout(predicate::str::contains("Cache Hits"))
        .stdout(predicate::str::contains("Free Space"));
}

#[test]
fn dump_linear_scale() {
    memviz()
        .args(["--dump", "--scale", "linear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("latency (Linear scale)"));
}

#[test]
fn dump_scale_from_env() {
    memviz()
        .arg("--dump")
        .env("MEMVIZ_SCALE", "linear")
        .assert()
        .success()
        .stdout(predicate::str::contains("latency (Linear scale)"));
}

#[test]
fn json_dump_is_valid() {
    let output = memviz()
        .args(["--dump", "--json", "--scenario", "random"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let charts = reports.as_array().unwrap();
    assert_eq!(charts.len(), 5);

    let cache = charts.iter().find(|c| c["chart"] == "cache").unwrap();
    assert_eq!(cache["scale"], "partition");
    let hits = &cache["records"][0];
    assert_eq!(hits["label"], "Cache Hits");
    assert!((hits["percent"].as_f64().unwrap() - 45.0).abs() < 1e-9);
    assert_eq!(hits["value_text"], "45%");

    let latency = charts.iter().find(|c| c["chart"] == "latency").unwrap();
    let register = &latency["records"][0];
    assert_eq!(register["percent"].as_f64(), Some(0.0));
    assert_eq!(register["extent"].as_f64(), Some(2.0));
}

#[test]
fn unknown_panel_is_config_error() {
    memviz()
        .args(["--dump", "--panel", "graphs"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown panel"));
}

#[test]
fn invalid_duration_is_config_error() {
    memviz()
        .args(["--dump", "--delay", "soon"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn oversized_delay_is_config_error() {
    memviz()
        .args(["--dump", "--delay", "18446744073709551615"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn zero_tick_is_config_error() {
    memviz()
        .args(["--dump", "--tick", "0"])
        .assert()
        .code(4);
}

#[test]
fn json_without_dump_is_rejected() {
    memviz().arg("--json").assert().failure();
}

#[test]
fn bash_completion() {
    memviz()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("memviz"));
}

#[test]
fn log_file_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memviz.log");
    memviz()
        .args(["--dump", "--log-file"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());
}
