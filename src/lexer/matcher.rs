use regex::Regex;
use thiserror::Error;

use super::TokenKind;

/// Raised when no lexeme pattern matches the start of the remaining input.
///
/// With the BrightScript pattern table this only happens at a `"` that is
/// never closed on its line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no lexeme pattern matches the remaining input")]
pub struct Unmatched;

/// One classified lexeme borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'src> {
    pub text: &'src str,
    pub kind: TokenKind,
    /// Block-depth delta for the line this lexeme sits on, `None` when the
    /// lexeme says nothing about indentation.
    pub indentation: Option<i32>,
    /// Named `value` capture of an identifier.
    pub value: Option<&'src str>,
    /// Named `type` capture of an identifier; may be empty.
    pub type_suffix: Option<&'src str>,
    /// Named `command` capture of a suppression directive.
    pub command: Option<&'src str>,
}

impl<'src> Classified<'src> {
    #[must_use]
    pub const fn new(text: &'src str, kind: TokenKind) -> Self {
        Self {
            text,
            kind,
            indentation: None,
            value: None,
            type_suffix: None,
            command: None,
        }
    }

    #[must_use]
    pub const fn with_indentation(mut self, level: i32) -> Self {
        self.indentation = Some(level);
        self
    }

    #[must_use]
    pub const fn with_captures(mut self, value: &'src str, type_suffix: &'src str) -> Self {
        self.value = Some(value);
        self.type_suffix = Some(type_suffix);
        self
    }

    #[must_use]
    pub const fn with_command(mut self, command: &'src str) -> Self {
        self.command = Some(command);
        self
    }
}

/// Maps the remaining input to its next lexeme.
pub trait MatchProvider: Send + Sync {
    /// Classify the lexeme at the start of `rest`.
    ///
    /// # Errors
    /// Returns [`Unmatched`] when no lexeme pattern applies.
    fn classify<'src>(&self, rest: &'src str) -> Result<Classified<'src>, Unmatched>;
}

struct LexemePattern {
    regex: Regex,
    kind: TokenKind,
}

impl LexemePattern {
    fn new(pattern: &str, kind: TokenKind) -> Self {
        Self {
            regex: Regex::new(pattern).expect("Invalid regex"),
            kind,
        }
    }
}

const KEYWORDS: &str = r"(?i)^(?:end[ \t]*(?:function|sub|if|while|for|try)|exit[ \t]+(?:while|for)|else[ \t]*if|function|sub|if|then|else|for|each|in|to|step|next|while|try|catch|throw|return|goto|stop|end|exit|dim|as|and|or|not|mod|true|false|invalid|print|boolean|integer|longinteger|float|double|string|object|dynamic|void|interface|library)\b";

/// Regex-table classifier for BrightScript source.
pub struct BrightScriptMatcher {
    patterns: Vec<LexemePattern>,
    then_word: Regex,
}

impl Default for BrightScriptMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BrightScriptMatcher {
    #[must_use]
    pub fn new() -> Self {
        // Order matters: the first pattern that matches wins.
        let patterns = vec![
            LexemePattern::new(
                r"^'[ \t]*BSLint_(?P<command>\w+)[^\r\n]*",
                TokenKind::Directive,
            ),
            LexemePattern::new(r"^'[^\r\n]*", TokenKind::Comment),
            LexemePattern::new(r"(?i)^rem\b[^\r\n]*", TokenKind::Comment),
            LexemePattern::new(r"^\r?\n", TokenKind::Newline),
            LexemePattern::new(r"^[ \t]+", TokenKind::Whitespace),
            LexemePattern::new(r#"^"(?:[^"\r\n]|"")*""#, TokenKind::String),
            LexemePattern::new(KEYWORDS, TokenKind::Keyword),
            LexemePattern::new(r"^\?", TokenKind::PrintKeyword),
            LexemePattern::new(
                r"(?i)^(?:&h[0-9a-f]+&?|(?:\d+\.\d*|\.\d+)(?:e[+-]?\d+)?[!#]?|\d+e[+-]?\d+[!#]?|\d+[%!#&]?)",
                TokenKind::Number,
            ),
            LexemePattern::new(
                r"^(?P<value>[A-Za-z_][A-Za-z0-9_]*)(?P<type>[$%!#&]?)",
                TokenKind::Identifier,
            ),
            LexemePattern::new(
                r"^(?:<<=|>>=|<>|<=|>=|<<|>>|\+=|-=|\*=|/=|\\=|\+\+|--|[=<>+\-*/\\^])",
                TokenKind::Operator,
            ),
            LexemePattern::new(r"^[()\[\]{},.:;@]", TokenKind::Punctuation),
            LexemePattern::new(r#"(?s)^[^"]"#, TokenKind::Unknown),
        ];

        Self {
            patterns,
            then_word: Regex::new(r"(?i)\bthen\b").expect("Invalid regex"),
        }
    }

    fn keyword<'src>(&self, text: &'src str, rest: &'src str) -> Classified<'src> {
        let normalized: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        let kind = if normalized == "print" {
            TokenKind::PrintKeyword
        } else {
            TokenKind::Keyword
        };
        let lexeme = Classified::new(text, kind);

        match normalized.as_str() {
            "function" | "sub" | "for" | "while" | "try" => lexeme.with_indentation(1),
            "endfunction" | "endsub" | "endif" | "endwhile" | "endfor" | "endtry" | "next" => {
                lexeme.with_indentation(-1)
            }
            "if" if self.opens_block(&rest[text.len()..]) => lexeme.with_indentation(1),
            _ => lexeme,
        }
    }

    /// An `if` opens a block unless a statement follows its `then` on the same line.
    fn opens_block(&self, after_if: &str) -> bool {
        let line = after_if.split(['\n', '\r']).next().unwrap_or_default();
        let code = code_portion(line);
        self.then_word
            .find(&code)
            .is_none_or(|then| code[then.end()..].trim().is_empty())
    }
}

impl MatchProvider for BrightScriptMatcher {
    fn classify<'src>(&self, rest: &'src str) -> Result<Classified<'src>, Unmatched> {
        for pattern in &self.patterns {
            let Some(caps) = pattern.regex.captures(rest) else {
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let text = whole.as_str();
            if text.is_empty() {
                continue;
            }

            let lexeme = match pattern.kind {
                TokenKind::Keyword => self.keyword(text, rest),
                TokenKind::Identifier => Classified::new(text, TokenKind::Identifier).with_captures(
                    caps.name("value").map_or(text, |m| m.as_str()),
                    caps.name("type").map_or("", |m| m.as_str()),
                ),
                TokenKind::Directive => {
                    let lexeme = Classified::new(text, TokenKind::Directive);
                    match caps.name("command") {
                        Some(command) => lexeme.with_command(command.as_str()),
                        None => lexeme,
                    }
                }
                kind => Classified::new(text, kind),
            };
            return Ok(lexeme);
        }

        Err(Unmatched)
    }
}

/// The code part of a line: string contents blanked, trailing comment removed.
fn code_portion(line: &str) -> String {
    let mut code = String::with_capacity(line.len());
    let mut in_string = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_string = !in_string;
                code.push(c);
            }
            '\'' if !in_string => break,
            _ if in_string => code.push(' '),
            _ => code.push(c),
        }
    }

    code
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
