use super::*;

#[test]
fn string_token_strips_delimiting_quotes() {
    let lexeme = Classified::new("\"hello world\"", TokenKind::String);
    let token = build_token(&lexeme, 3).unwrap();

    assert_eq!(token.value, "hello world");
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.line, 3);
    assert!(token.subtype.is_none());
}

#[test]
fn empty_string_token_has_empty_value() {
    let lexeme = Classified::new("\"\"", TokenKind::String);
    let token = build_token(&lexeme, 1).unwrap();
    assert_eq!(token.value, "");
}

#[test]
fn string_token_keeps_doubled_inner_quotes() {
    let lexeme = Classified::new("\"say \"\"hi\"\"\"", TokenKind::String);
    let token = build_token(&lexeme, 1).unwrap();
    assert_eq!(token.value, "say \"\"hi\"\"");
}

#[test]
fn identifier_with_type_suffix_has_subtype() {
    let lexeme = Classified::new("name$", TokenKind::Identifier).with_captures("name", "$");
    let token = build_token(&lexeme, 7).unwrap();

    assert_eq!(token.value, "name");
    assert_eq!(token.subtype.as_deref(), Some("$"));
    assert_eq!(token.line, 7);
}

#[test]
fn identifier_without_suffix_has_no_subtype() {
    let lexeme = Classified::new("count", TokenKind::Identifier).with_captures("count", "");
    let token = build_token(&lexeme, 1).unwrap();

    assert_eq!(token.value, "count");
    assert!(token.subtype.is_none());
}

#[test]
fn other_kinds_keep_raw_lexeme() {
    for (text, kind) in [
        ("<>", TokenKind::Operator),
        ("&hFF", TokenKind::Number),
        ("End Function", TokenKind::Keyword),
        ("?", TokenKind::PrintKeyword),
        ("(", TokenKind::Punctuation),
    ] {
        let token = build_token(&Classified::new(text, kind), 2).unwrap();
        assert_eq!(token.value, text);
        assert_eq!(token.kind, kind);
    }
}

#[test]
fn side_effect_kinds_are_not_emitted() {
    for kind in [
        TokenKind::Comment,
        TokenKind::Newline,
        TokenKind::Directive,
        TokenKind::Whitespace,
    ] {
        assert!(build_token(&Classified::new("x", kind), 1).is_none());
    }
}

#[test]
fn only_whitespace_is_insignificant() {
    assert!(!TokenKind::Whitespace.is_significant());
    assert!(TokenKind::Newline.is_significant());
    assert!(TokenKind::Comment.is_significant());
    assert!(TokenKind::Directive.is_significant());
}

#[test]
fn token_serializes_without_absent_subtype() {
    let token = Token::new("x", TokenKind::Identifier, 1);
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, r#"{"value":"x","kind":"identifier","line":1}"#);
}
