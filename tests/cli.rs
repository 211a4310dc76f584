//! Integration tests for the `ddd-audit` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn ddd_audit() -> Command {
    let mut cmd = Command::cargo_bin("ddd-audit").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn audit_exits_zero_without_findings() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.css", "  gap: var(--ddd-spacing-4);\n");

    ddd_audit()
        .current_dir(dir.path())
        .args(["audit", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes needed"));
}

#[test]
fn audit_exits_one_with_findings() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.css", ".x {\n  margin: 16px;\n}\n");

    ddd_audit()
        .current_dir(dir.path())
        .args(["audit", "--no-color"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("Line Number")
                .and(predicate::str::contains("--ddd-spacing-4"))
                .and(predicate::str::contains(
                    "https://haxtheweb.org/documentation/ddd",
                )),
        );
}

#[test]
fn audit_missing_root_is_fatal() {
    let dir = tempdir().unwrap();

    ddd_audit()
        .current_dir(dir.path())
        .args(["audit", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn audit_debug_prints_rules() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".dddignore", "/vendor\n");

    ddd_audit()
        .current_dir(dir.path())
        .args(["audit", "--debug", "--no-color"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("directory")
                .and(predicate::str::contains("vendor")),
        );
}

#[test]
fn audit_json_format() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.css", ".x {\n  color: navy;\n}\n");

    let output = ddd_audit()
        .current_dir(dir.path())
        .args(["audit", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let finding = &json["files"][0]["findings"][0];
    assert_eq!(finding["suggestion"], "--ddd-theme-default-nittanyNavy");
}

#[test]
fn suggest_prints_token() {
    ddd_audit()
        .args(["suggest", "border-radius", "100%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--ddd-radius-circle"));

    ddd_audit()
        .args(["suggest", "z-index", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not an audited property"));
}

#[test]
fn properties_lists_families() {
    ddd_audit()
        .arg("properties")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("box-shadow")
                .and(predicate::str::contains("letter-spacing")),
        );
}

#[test]
fn validate_config_reports_errors() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.yaml");
    let bad = dir.path().join("bad.yaml");
    fs::write(&good, "version: \"1.0\"\nextra_skip_dirs: [coverage]\n").unwrap();
    fs::write(&bad, "version: \"1.0\"\nignore_file: \"\"\n").unwrap();

    ddd_audit()
        .args(["validate-config"])
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("coverage"));

    ddd_audit()
        .args(["validate-config"])
        .arg(&bad)
        .assert()
        .code(1);
}

#[test]
fn invalid_config_aborts_audit() {
    let dir = tempdir().unwrap();
    write(dir.path(), "ddd_audit.yaml", "version: \"3\"\n");

    ddd_audit()
        .current_dir(dir.path())
        .arg("audit")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Unsupported configuration version",
        ));
}
