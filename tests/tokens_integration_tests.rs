//! Integration tests for the `tokens` command.

mod common;

use common::{BROKEN_SOURCE, TestFixture};

fn tokens_json(fixture: &TestFixture, file: &str) -> (Option<i32>, serde_json::Value) {
    let output = bslint!()
        .current_dir(fixture.path())
        .args(["--no-config", "tokens", file])
        .output()
        .unwrap();
    let parsed = serde_json::from_slice(&output.stdout).unwrap();
    (output.status.code(), parsed)
}

#[test]
fn tokens_prints_scan_result() {
    let fixture = TestFixture::new();
    fixture.create_file("main.brs", "name$ = \"Roku\"\n");

    let (code, parsed) = tokens_json(&fixture, "main.brs");

    assert_eq!(code, Some(0));
    assert_eq!(parsed["Status"], "Success");
    let tokens = parsed["Tokens"].as_array().unwrap();
    assert_eq!(tokens[0]["value"], "name");
    assert_eq!(tokens[0]["subtype"], "$");
    assert_eq!(tokens[0]["line"], 1);
    assert_eq!(tokens[2]["value"], "Roku");
    assert!(parsed["Warnings"].as_array().unwrap().is_empty());
}

#[test]
fn tokens_reports_unmatched_quote() {
    let fixture = TestFixture::new();
    fixture.create_file("broken.brs", BROKEN_SOURCE);

    let (code, parsed) = tokens_json(&fixture, "broken.brs");

    assert_eq!(code, Some(1));
    assert_eq!(parsed["Status"], "Error");
    assert_eq!(parsed["Tokens"].as_array().unwrap().len(), 1);
}

#[test]
fn tokens_missing_file_exits_two() {
    let fixture = TestFixture::new();

    bslint!()
        .current_dir(fixture.path())
        .args(["--no-config", "tokens", "missing.brs"])
        .assert()
        .code(2);
}
