use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies the kind of finding and selects its message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKey {
    UnmatchedQuotationMark,
    TypoInCode,
    CommentFormat,
    SpacesAroundOperators,
    LineTooLong,
    ConsecutiveEmptyLines,
    IncorrectIndentation,
    MethodDeclarationSpacing,
    TraceFree,
}

impl ErrorKey {
    pub const ALL: [Self; 9] = [
        Self::UnmatchedQuotationMark,
        Self::TypoInCode,
        Self::CommentFormat,
        Self::SpacesAroundOperators,
        Self::LineTooLong,
        Self::ConsecutiveEmptyLines,
        Self::IncorrectIndentation,
        Self::MethodDeclarationSpacing,
        Self::TraceFree,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnmatchedQuotationMark => "UNMATCHED_QUOTATION_MARK",
            Self::TypoInCode => "TYPO_IN_CODE",
            Self::CommentFormat => "COMMENT_FORMAT",
            Self::SpacesAroundOperators => "SPACES_AROUND_OPERATORS",
            Self::LineTooLong => "LINE_TOO_LONG",
            Self::ConsecutiveEmptyLines => "CONSECUTIVE_EMPTY_LINES",
            Self::IncorrectIndentation => "INCORRECT_INDENTATION",
            Self::MethodDeclarationSpacing => "METHOD_DECLARATION_SPACING",
            Self::TraceFree => "TRACE_FREE",
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown error key: {s}"))
    }
}

/// An unrendered rule finding. The line number is appended when it is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub key: ErrorKey,
    pub params: Vec<String>,
}

impl Diagnostic {
    #[must_use]
    pub const fn new(key: ErrorKey) -> Self {
        Self {
            key,
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, param: impl ToString) -> Self {
        self.params.push(param.to_string());
        self
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
