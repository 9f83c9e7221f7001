use std::collections::BTreeMap;

use tempfile::TempDir;

use super::*;
use crate::config::DictionaryLanguage;

#[test]
fn default_linter_lints_clean_source() {
    let linter = Linter::with_defaults();
    let result = linter.lint("sub main()\n    print \"hi\"\nend sub\n");

    assert!(result.is_success());
    assert_eq!(result.warnings, vec!["Debug print statement found on line 2"]);
}

#[test]
fn config_drives_rules() {
    let mut config = Config::default();
    config.rules.trace_free.active = false;
    config.rules.spell_check.dictionary = DictionaryLanguage::EnGb;
    let linter = Linter::new(config).unwrap();

    let result = linter.lint("colour = 1\nprint colour\n");

    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn config_messages_override_templates() {
    let mut messages = BTreeMap::new();
    messages.insert("TRACE_FREE".to_string(), "no print ({0})".to_string());
    let config = Config {
        messages,
        ..Config::default()
    };
    let linter = Linter::new(config).unwrap();

    assert_eq!(linter.lint("? 1\n").warnings, vec!["no print (1)"]);
}

#[test]
fn unknown_message_key_fails_construction() {
    let mut config = Config::default();
    config
        .messages
        .insert("NOPE".to_string(), "x".to_string());
    assert!(Linter::new(config).is_err());
}

#[test]
fn lint_file_reports_status() {
    let dir = TempDir::new().unwrap();
    let clean = dir.path().join("clean.brs");
    let noisy = dir.path().join("noisy.brs");
    let broken = dir.path().join("broken.brs");
    std::fs::write(&clean, "x = 1\n").unwrap();
    std::fs::write(&noisy, "x=1\n").unwrap();
    std::fs::write(&broken, "x = \"open\n").unwrap();

    let linter = Linter::with_defaults();

    let report = linter.lint_file(&clean).unwrap();
    assert_eq!(report.status(), FileStatus::Passed);
    assert!(report.is_passed());
    assert_eq!(report.path(), clean.as_path());

    let report = linter.lint_file(&noisy).unwrap();
    assert_eq!(report.status(), FileStatus::Warning);
    assert_eq!(report.warnings().len(), 1);

    let report = linter.lint_file(&broken).unwrap();
    assert_eq!(report.status(), FileStatus::Error);
    assert_eq!(report.errors().len(), 1);
}

#[test]
fn lint_file_missing_is_read_error() {
    let linter = Linter::with_defaults();
    let err = linter
        .lint_file(Path::new("/definitely/not/here.brs"))
        .unwrap_err();
    assert!(matches!(err, BslintError::FileRead { .. }));
}

#[test]
fn linter_is_shareable_across_threads() {
    fn assert_sync<T: Sync + Send>() {}
    assert_sync::<Linter>();
}
