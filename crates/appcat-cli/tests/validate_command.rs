//! Integration test: run the batch runner and the `appcat` binary against
//! catalogs built in temporary directories.

use std::path::{Path, PathBuf};
use std::process::Command;

use appcat_check::AppValidator;
use appcat_cli::runner::{discover_entries, run_entries};
use appcat_core::PNG_SIGNATURE;
use appcat_schema::AppSchema;

const VALID_APP: &str = r#"
name: Bar
description: "A minimal but complete catalog entry."
url: https://bar.example.com
category: utilities
"#;

fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn schema_path() -> PathBuf {
    repo_root().join("schema/app.schema.json")
}

fn write_entry(apps: &Path, name: &str, yaml: &str, logo: &[u8]) {
    let dir = apps.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("app.yaml"), yaml).unwrap();
    std::fs::write(dir.join("logo.png"), logo).unwrap();
}

fn run(apps: &Path, names: &[&str]) -> (u8, String, String) {
    let schema = AppSchema::load(schema_path()).unwrap();
    let validator = AppValidator::new(apps, &schema);
    let names: Vec<String> = if names.is_empty() {
        discover_entries(apps).unwrap()
    } else {
        names.iter().map(|n| n.to_string()).collect()
    };
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = run_entries(&validator, &names, &mut out, &mut err).unwrap();
    (
        summary.exit_code(),
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn missing_entry_fails_run() {
    let apps = tempfile::tempdir().unwrap();
    let (code, out, err) = run(apps.path(), &["foo"]);
    assert_eq!(code, 1);
    assert!(out.contains("Validating foo..."));
    assert!(err.contains("  ✗ Directory does not exist: foo"));
    assert!(err.contains("Validation failed"));
    assert!(!out.contains("All validations passed"));
}

#[test]
fn valid_entry_passes_run() {
    let apps = tempfile::tempdir().unwrap();
    write_entry(apps.path(), "bar", VALID_APP, &PNG_SIGNATURE);
    let (code, out, err) = run(apps.path(), &["bar"]);
    assert_eq!(code, 0);
    assert_eq!(out, "Validating bar...\n  ✓ Valid\n\nAll validations passed\n");
    assert!(err.is_empty());
}

#[test]
fn bad_date_fails_run() {
    let apps = tempfile::tempdir().unwrap();
    let yaml = format!("{VALID_APP}date_added: \"not-a-real-date\"\n");
    write_entry(apps.path(), "baz", &yaml, &PNG_SIGNATURE);
    let (code, _out, err) = run(apps.path(), &["baz"]);
    assert_eq!(code, 1);
    assert_eq!(err, "  ✗ baz: Invalid date_added format\n\nValidation failed\n");
}

#[test]
fn explicit_names_are_validated_in_given_order() {
    let apps = tempfile::tempdir().unwrap();
    write_entry(apps.path(), "alpha", VALID_APP, &PNG_SIGNATURE);
    write_entry(apps.path(), "beta", VALID_APP, &PNG_SIGNATURE);
    let (code, out, _err) = run(apps.path(), &["beta", "ghost", "alpha"]);
    assert_eq!(code, 1);
    let order: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("Validating "))
        .collect();
    assert_eq!(
        order,
        vec!["Validating beta...", "Validating ghost...", "Validating alpha..."]
    );
}

#[test]
fn zero_names_scans_every_subdirectory() {
    let apps = tempfile::tempdir().unwrap();
    write_entry(apps.path(), "good", VALID_APP, &PNG_SIGNATURE);
    write_entry(apps.path(), "badlogo", VALID_APP, b"nope");
    std::fs::create_dir(apps.path().join("empty")).unwrap();
    std::fs::write(apps.path().join("README.md"), "not an entry").unwrap();

    let (code, out, err) = run(apps.path(), &[]);
    assert_eq!(code, 1);
    for name in ["good", "badlogo", "empty"] {
        assert!(out.contains(&format!("Validating {name}...")), "{out}");
    }
    assert!(!out.contains("README.md"));
    assert!(err.contains("  ✗ Invalid PNG file in badlogo: logo.png is not a valid PNG"));
    assert!(err.contains("  ✗ Missing app.yaml in empty"));
    assert_eq!(out.matches("  ✓ Valid").count(), 1);
}

#[test]
fn empty_catalog_passes() {
    let apps = tempfile::tempdir().unwrap();
    let (code, out, _err) = run(apps.path(), &[]);
    assert_eq!(code, 0);
    assert!(out.contains("All validations passed"));
}

#[test]
fn binary_exit_codes() {
    let apps = tempfile::tempdir().unwrap();
    write_entry(apps.path(), "bar", VALID_APP, &PNG_SIGNATURE);

    let pass = Command::new(env!("CARGO_BIN_EXE_appcat"))
        .arg("validate")
        .arg("--apps-dir")
        .arg(apps.path())
        .arg("--schema")
        .arg(schema_path())
        .arg("bar")
        .output()
        .unwrap();
    assert_eq!(pass.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&pass.stdout).contains("All validations passed"));

    let fail = Command::new(env!("CARGO_BIN_EXE_appcat"))
        .arg("validate")
        .arg("--apps-dir")
        .arg(apps.path())
        .arg("--schema")
        .arg(schema_path())
        .arg("bar")
        .arg("foo")
        .output()
        .unwrap();
    assert_eq!(fail.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&fail.stderr).contains("Directory does not exist: foo"));
}

#[test]
fn binary_missing_schema_is_fatal() {
    let apps = tempfile::tempdir().unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_appcat"))
        .arg("validate")
        .arg("--apps-dir")
        .arg(apps.path())
        .arg("--schema")
        .arg(apps.path().join("missing.schema.json"))
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn shipped_catalog_is_valid() {
    let (code, out, err) = run(&repo_root().join("apps"), &[]);
    assert_eq!(code, 0, "stdout:\n{out}\nstderr:\n{err}");
    assert!(out.contains("Validating hello-catalog..."));
}
