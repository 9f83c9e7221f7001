use super::*;

#[test]
fn config_default_values() {
    let config = Config::default();
    assert_eq!(config.scanner.extensions, vec!["brs"]);
    assert!(config.scanner.gitignore);
    assert_eq!(config.rules.max_line_length.max, 120);
    assert_eq!(config.rules.consecutive_empty_lines.max, 1);
    assert_eq!(config.rules.indentation.indent_size, 4);
    assert_eq!(config.rules.spaces_around_operators.spaces, 1);
    assert_eq!(config.rules.comment_format.format, CommentFormat::Apostrophe);
    assert_eq!(config.rules.spell_check.dictionary, DictionaryLanguage::EnUs);
    assert!(config.rules.trace_free.active);
    assert!(config.commands.skip_line.active);
    assert!(config.commands.skip_file.active);
}

#[test]
fn empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_rule_table_keeps_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[rules.max_line_length]
max = 80

[rules.spell_check]
dictionary = "en_GB"
words = ["roku"]

[commands.skip_file]
active = false
"#,
    )
    .unwrap();

    assert_eq!(config.rules.max_line_length.max, 80);
    assert!(config.rules.max_line_length.active);
    assert_eq!(config.rules.spell_check.dictionary, DictionaryLanguage::EnGb);
    assert_eq!(config.rules.spell_check.min_word_length, 3);
    assert!(!config.commands.skip_file.active);
    assert!(config.commands.skip_line.active);
}

#[test]
fn comment_format_parses_lowercase() {
    let config: Config = toml::from_str("[rules.comment_format]\nformat = \"either\"").unwrap();
    assert_eq!(config.rules.comment_format.format, CommentFormat::Either);
    assert!(toml::from_str::<Config>("[rules.comment_format]\nformat = \"hash\"").is_err());
}

#[test]
fn messages_table_is_kept_verbatim() {
    let config: Config =
        toml::from_str("[messages]\nTYPO_IN_CODE = \"Typo on {0}\"").unwrap();
    assert_eq!(
        config.messages.get("TYPO_IN_CODE").map(String::as_str),
        Some("Typo on {0}")
    );
}

#[test]
fn dictionary_language_from_str() {
    assert_eq!("en_US".parse(), Ok(DictionaryLanguage::EnUs));
    assert_eq!("en-gb".parse(), Ok(DictionaryLanguage::EnGb));
    assert!("fr_FR".parse::<DictionaryLanguage>().is_err());
    assert_eq!(DictionaryLanguage::EnGb.to_string(), "en_GB");
}

#[test]
fn config_serializes_back_to_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, Config::default());
}
