use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn current_version_is_accepted() {
    let config = Config {
        version: Some("1".to_string()),
        ..Config::default()
    };
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn unknown_version_is_rejected() {
    let config = Config {
        version: Some("2".to_string()),
        ..Config::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '2'"));
}

#[test]
fn zero_line_length_is_rejected() {
    let mut config = Config::default();
    config.rules.max_line_length.max = 0;
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("rules.max_line_length.max"));
}

#[test]
fn zero_indent_size_is_rejected() {
    let mut config = Config::default();
    config.rules.indentation.indent_size = 0;
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn zero_min_word_length_is_rejected() {
    let mut config = Config::default();
    config.rules.spell_check.min_word_length = 0;
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn invalid_exclude_glob_is_rejected() {
    let mut config = Config::default();
    config.scanner.exclude.push("src/[".to_string());
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(matches!(err, BslintError::InvalidPattern { .. }));
}

#[test]
fn unknown_message_key_is_rejected() {
    let mut config = Config::default();
    config
        .messages
        .insert("NO_SUCH_RULE".to_string(), "x".to_string());
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("NO_SUCH_RULE"));
}

#[test]
fn message_keys_are_case_insensitive() {
    let mut config = Config::default();
    config
        .messages
        .insert("trace_free".to_string(), "x {0}".to_string());
    assert!(validate_config_semantics(&config).is_ok());
}
