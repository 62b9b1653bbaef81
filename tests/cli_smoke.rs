use assert_cmd::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/commits.json")
}

fn commitviz() -> Command {
    let mut cmd = Command::cargo_bin("commitviz").unwrap();
    cmd.env_remove("COMMITVIZ_USER")
        .env_remove("COMMITVIZ_REPO")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn matrix_json_outputs_dense_series() {
    let out = commitviz()
        .arg("--input")
        .arg(fixture())
        .args(["--user", "octo", "--repo", "demo", "matrix", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(v["repository"], "octo/demo");
    assert_eq!(v["commit_count"], 3);
    assert_eq!(v["day_count"], 3);
    assert_eq!(v["authors"], serde_json::json!(["A", "B"]));
    assert_eq!(
        v["series"],
        serde_json::json!([
            [{"x": 0, "y": 1, "date": "0/1", "user": "A"}, {"x": 1, "y": 0}, {"x": 2, "y": 1, "date": "0/3"}],
            [{"x": 0, "y": 0, "user": "B"}, {"x": 1, "y": 0}, {"x": 2, "y": 1, "date": "0/3"}]
        ])
    );
}

#[test]
fn matrix_ndjson_emits_one_line_per_author() {
    let out = commitviz()
        .arg("--input")
        .arg(fixture())
        .args(["matrix", "--ndjson"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["author"], "A");
    assert_eq!(lines[0]["total"], 2);
    assert_eq!(lines[1]["days"].as_array().unwrap().len(), 3);
}

#[test]
fn matrix_summary_is_human_readable() {
    let out = commitviz()
        .arg("--input")
        .arg(fixture())
        .arg("matrix")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("3 commits by 2 authors over 3 days"));
}

#[test]
fn chart_writes_svg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commits.svg");
    commitviz()
        .arg("--input")
        .arg(fixture())
        .args(["chart", "--grouped", "--output"])
        .arg(&path)
        .assert()
        .success();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("0/3"));
}

#[test]
fn export_json_sorts_by_author_date() {
    let out = commitviz()
        .arg("--input")
        .arg(fixture())
        .args(["export", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let entries = v["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["sha"], "c1");
    assert_eq!(entries[2]["message"], "Second change");
}

#[test]
fn empty_commit_list_reports_no_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();

    let out = commitviz()
        .arg("--input")
        .arg(&path)
        .args(["matrix", "--json"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("No commit data to display"));
}

#[test]
fn malformed_repo_is_rejected() {
    let out = commitviz()
        .arg("--input")
        .arg(fixture())
        .args(["--user", "a/b", "matrix", "--json"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("Invalid repository"));
}
