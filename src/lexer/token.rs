use serde::Serialize;

use super::Classified;

/// Classification tag assigned to a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    Keyword,
    /// `print` and its `?` shorthand.
    PrintKeyword,
    Operator,
    Number,
    String,
    Punctuation,
    Comment,
    Newline,
    /// In-source `'BSLint_<command>` suppression marker.
    Directive,
    Whitespace,
    Unknown,
}

impl TokenKind {
    /// Whitespace is the only kind the scanner skips entirely.
    #[must_use]
    pub const fn is_significant(self) -> bool {
        !matches!(self, Self::Whitespace)
    }

    /// Kinds consumed for side effects only never reach the token stream.
    #[must_use]
    pub const fn is_emitted(self) -> bool {
        !matches!(
            self,
            Self::Comment | Self::Newline | Self::Directive | Self::Whitespace
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    /// Declared type suffix of an identifier (`$`, `%`, `!`, `#`, `&`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(value: impl Into<String>, kind: TokenKind, line: usize) -> Self {
        Self {
            value: value.into(),
            kind,
            subtype: None,
            line,
        }
    }

    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }
}

/// Shape a classified lexeme into a token stamped with `line`.
///
/// Returns `None` for kinds that are never emitted.
#[must_use]
pub fn build_token(lexeme: &Classified<'_>, line: usize) -> Option<Token> {
    if !lexeme.kind.is_emitted() {
        return None;
    }

    let token = match lexeme.kind {
        TokenKind::String => Token::new(strip_quotes(lexeme.text), TokenKind::String, line),
        TokenKind::Identifier => {
            let token = Token::new(lexeme.value.unwrap_or(lexeme.text), lexeme.kind, line);
            match lexeme.type_suffix {
                Some(suffix) if !suffix.is_empty() => token.with_subtype(suffix),
                _ => token,
            }
        }
        kind => Token::new(lexeme.text, kind, line),
    };

    Some(token)
}

fn strip_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
