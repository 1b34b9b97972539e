use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const DUMP_PATH: &str = "docs/api/raw/api_dump.txt";
const INDEX_MODULES: &str = "docs/api/index/index_modules.md";
const INDEX_FUNCTIONS: &str = "docs/api/index/index_functions.md";

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn stage_dump(root: &Path, content: &str) {
    write_file(&root.join(DUMP_PATH), content);
}

fn index_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("apidex-index"))
}

fn lookup_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("apidex-lookup"))
}

const SAMPLE: &str = "\
vehicle: table
  pos: vec3
  functions:
    getPosition
    setVelocity
_G: table
  functions:
    print
";

#[test]
fn index_writes_both_documents() {
    let temp = tempdir().unwrap();
    stage_dump(temp.path(), SAMPLE);

    index_cmd()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Indexed 2 modules"));

    let modules_doc = fs::read_to_string(temp.path().join(INDEX_MODULES)).unwrap();
    assert!(modules_doc.starts_with("# Module Index\n"));
    assert!(modules_doc.contains("## vehicle"));
    assert!(modules_doc.contains("Functions: 2\nFields: 1"));

    let functions_doc = fs::read_to_string(temp.path().join(INDEX_FUNCTIONS)).unwrap();
    assert!(functions_doc.contains("\nprint\n"));
    assert!(functions_doc.contains("\nvehicle.getPosition\n"));
}

#[test]
fn index_quiet_suppresses_summary() {
    let temp = tempdir().unwrap();
    stage_dump(temp.path(), SAMPLE);

    index_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn index_missing_dump_aborts_without_output() {
    let temp = tempdir().unwrap();

    index_cmd()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing dump"));

    assert!(!temp.path().join(INDEX_MODULES).exists());
    assert!(!temp.path().join(INDEX_FUNCTIONS).exists());
}

#[test]
fn index_runs_are_byte_identical() {
    let temp = tempdir().unwrap();
    stage_dump(temp.path(), SAMPLE);

    index_cmd()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success();
    let modules_first = fs::read(temp.path().join(INDEX_MODULES)).unwrap();
    let functions_first = fs::read(temp.path().join(INDEX_FUNCTIONS)).unwrap();

    index_cmd()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success();
    assert_eq!(
        modules_first,
        fs::read(temp.path().join(INDEX_MODULES)).unwrap()
    );
    assert_eq!(
        functions_first,
        fs::read(temp.path().join(INDEX_FUNCTIONS)).unwrap()
    );
}

#[test]
fn lookup_zero_matches_prints_only_header() {
    let temp = tempdir().unwrap();
    stage_dump(temp.path(), SAMPLE);

    let assert = lookup_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("nosuchthing")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout, "Query: nosuchthing\nTotal matches: 0\n");
}

#[test]
fn lookup_reports_candidates_and_context() {
    let temp = tempdir().unwrap();
    stage_dump(temp.path(), SAMPLE);

    let assert = lookup_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("getposition")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.starts_with("Query: getposition\nTotal matches: 1\n"));
    assert!(stdout.contains("Matching functions:\n- getPosition\n"));
    assert!(stdout.contains("Context matches:\n-\n"));
    assert!(stdout.contains(">      4:     getPosition\n"));
}

#[test]
fn lookup_limit_caps_context_blocks() {
    let temp = tempdir().unwrap();
    let dump: String = (0..30)
        .map(|i| format!("hit{i}: table\n"))
        .collect();
    stage_dump(temp.path(), &dump);

    let assert = lookup_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("hit")
        .arg("--limit")
        .arg("10")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Total matches: 30\n"));
    assert_eq!(stdout.matches("\n-\n").count(), 10);
    assert!(stdout.ends_with("... 20 more matches not shown (refine search).\n"));
}

#[test]
fn lookup_context_window_flags() {
    let temp = tempdir().unwrap();
    stage_dump(temp.path(), SAMPLE);

    let assert = lookup_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("setVelocity")
        .arg("--context-before")
        .arg("1")
        .arg("--context-after")
        .arg("0")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("       4:     getPosition\n"));
    assert!(stdout.contains(">      5:     setVelocity\n"));
    assert!(!stdout.contains("       6:"));
}

#[test]
fn lookup_missing_dump_aborts() {
    let temp = tempdir().unwrap();

    lookup_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("anything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing dump"));
}

#[test]
fn lookup_json_format_emits_valid_report() {
    let temp = tempdir().unwrap();
    stage_dump(temp.path(), SAMPLE);

    let assert = lookup_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("vehicle")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: Value = serde_json::from_str(&stdout).expect("valid JSON report");

    assert_eq!(value["query"], "vehicle");
    assert_eq!(value["total_matches"], 1);
    assert_eq!(value["modules"][0], "vehicle");
    assert_eq!(value["blocks"][0]["matched_line"], 1);
}

#[test]
fn lookup_unknown_format_falls_back_to_text() {
    let temp = tempdir().unwrap();
    stage_dump(temp.path(), SAMPLE);

    let assert = lookup_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("vehicle")
        .arg("--format")
        .arg("yaml")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.starts_with("Query: vehicle\n"));
}
