//! Parsing and semantic validation of single config files.

use std::path::Path;

use crate::config::{CommentFormat, ConfigLoader, DictionaryLanguage, FileConfigLoader};
use crate::error::BslintError;

use super::mock_fs::MockFileSystem;

#[test]
fn parses_full_config() {
    let content = r#"
version = "1"

[scanner]
extensions = ["brs", "bs"]
exclude = ["**/generated/**"]
gitignore = false

[rules.comment_format]
format = "rem"

[rules.spell_check]
dictionary = "en_GB"
words = ["roku"]

[rules.trace_free]
active = false

[messages]
TRACE_FREE = "No print on line {0}"
"#;
    let fs = MockFileSystem::new().with_file("/cfg/bslint.toml", content);

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg/bslint.toml"))
        .unwrap()
        .config;

    assert_eq!(config.scanner.extensions, vec!["brs", "bs"]);
    assert!(!config.scanner.gitignore);
    assert_eq!(config.rules.comment_format.format, CommentFormat::Rem);
    assert_eq!(config.rules.spell_check.dictionary, DictionaryLanguage::EnGb);
    assert!(!config.rules.trace_free.active);
    assert_eq!(config.messages.len(), 1);
}

#[test]
fn reports_toml_syntax_errors() {
    let fs = MockFileSystem::new().with_file("/cfg/bad.toml", "[rules\nmax = ");

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg/bad.toml"))
        .unwrap_err();

    assert!(matches!(err, BslintError::TomlParse(_)));
}

#[test]
fn reports_wrong_value_types() {
    let fs = MockFileSystem::new().with_file(
        "/cfg/bad.toml",
        "[rules.max_line_length]\nmax = \"long\"\n",
    );

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg/bad.toml"))
        .unwrap_err();

    assert!(matches!(err, BslintError::TomlParse(_)));
}

#[test]
fn reports_semantic_errors() {
    let fs = MockFileSystem::new().with_file(
        "/cfg/bad.toml",
        "[rules.indentation]\nindent_size = 0\n",
    );

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg/bad.toml"))
        .unwrap_err();

    assert!(matches!(err, BslintError::Config(_)));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = FileConfigLoader::with_fs(MockFileSystem::new())
        .load_from_path(Path::new("/nowhere.toml"))
        .unwrap_err();

    assert!(matches!(err, BslintError::FileRead { .. }));
}
