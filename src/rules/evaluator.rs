use crate::config::RulesConfig;
use crate::lexer::{Classified, LineState, TokenKind};
use crate::spelling::SpellChecker;

use super::checks::{
    check_comment_format, check_consecutive_empty_lines, check_indentation,
    check_max_line_length, check_method_declaration_spacing, check_operator_spacing,
    check_trace_free,
};
use super::Diagnostic;

/// A check run once per finished line, in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfLineCheck {
    BlankLines,
    LineLength,
    Indentation,
    MethodDeclarationSpacing,
}

impl EndOfLineCheck {
    pub const DEFAULT_ORDER: [Self; 4] = [
        Self::BlankLines,
        Self::LineLength,
        Self::Indentation,
        Self::MethodDeclarationSpacing,
    ];
}

/// A line whose terminator has just been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishedLine<'src> {
    /// Line text without its terminator.
    pub text: &'src str,
    /// Accumulated character count, terminator excluded.
    pub length: usize,
}

/// Dispatches lexemes and finished lines to the configured style checks.
///
/// The evaluator is stateless; per-line counters live in [`LineState`] and
/// are owned by the caller.
pub struct StyleEvaluator<'a> {
    rules: &'a RulesConfig,
    spelling: &'a dyn SpellChecker,
    end_of_line: Vec<EndOfLineCheck>,
}

impl<'a> StyleEvaluator<'a> {
    #[must_use]
    pub fn new(rules: &'a RulesConfig, spelling: &'a dyn SpellChecker) -> Self {
        Self {
            rules,
            spelling,
            end_of_line: EndOfLineCheck::DEFAULT_ORDER.to_vec(),
        }
    }

    #[must_use]
    pub fn with_end_of_line_checks(mut self, checks: Vec<EndOfLineCheck>) -> Self {
        self.end_of_line = checks;
        self
    }

    /// Run the per-token checks for a lexeme starting at byte `start` of `source`.
    #[must_use]
    pub fn check_token(
        &self,
        source: &str,
        lexeme: &Classified<'_>,
        start: usize,
    ) -> Vec<Diagnostic> {
        let mut found = Vec::new();

        match lexeme.kind {
            TokenKind::Comment => {
                found.extend(check_comment_format(lexeme.text, &self.rules.comment_format));
                found.extend(self.spell(lexeme.text, TokenKind::Comment));
            }
            TokenKind::Operator => {
                found.extend(check_operator_spacing(
                    source,
                    start,
                    start + lexeme.text.len(),
                    &self.rules.spaces_around_operators,
                ));
            }
            TokenKind::Identifier => {
                found.extend(self.spell(lexeme.text, TokenKind::Identifier));
            }
            TokenKind::PrintKeyword => {
                found.extend(check_trace_free(&self.rules.trace_free));
            }
            TokenKind::Keyword
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Punctuation
            | TokenKind::Newline
            | TokenKind::Directive
            | TokenKind::Whitespace
            | TokenKind::Unknown => {}
        }

        found
    }

    /// Run the end-of-line checks for `line`.
    ///
    /// The blank run must already include `line`. Indentation state in
    /// `state` advances only when the indentation check runs.
    pub fn check_line_end(
        &self,
        line: &FinishedLine<'_>,
        state: &mut LineState,
    ) -> Vec<Diagnostic> {
        let mut found = Vec::new();

        for check in &self.end_of_line {
            match check {
                EndOfLineCheck::BlankLines => found.extend(check_consecutive_empty_lines(
                    state.blank_run,
                    &self.rules.consecutive_empty_lines,
                )),
                EndOfLineCheck::LineLength => found.extend(check_max_line_length(
                    line.length,
                    &self.rules.max_line_length,
                )),
                EndOfLineCheck::Indentation => {
                    if let Some(outcome) = check_indentation(
                        state.current_indentation,
                        line.text,
                        state.indentation_hint,
                        &self.rules.indentation,
                    ) {
                        found.extend(outcome.diagnostic);
                        state.current_indentation = outcome.depth;
                        state.indentation_hint = 0;
                    }
                }
                EndOfLineCheck::MethodDeclarationSpacing => found.extend(
                    check_method_declaration_spacing(
                        line.text,
                        &self.rules.method_declaration_spacing,
                    ),
                ),
            }
        }

        found
    }

    /// Advance the indentation state for a suppressed `line` without
    /// reporting anything, so block depth stays in step for later lines.
    pub fn track_line_end(&self, line: &FinishedLine<'_>, state: &mut LineState) {
        if !self.end_of_line.contains(&EndOfLineCheck::Indentation) {
            return;
        }
        if let Some(outcome) = check_indentation(
            state.current_indentation,
            line.text,
            state.indentation_hint,
            &self.rules.indentation,
        ) {
            state.current_indentation = outcome.depth;
            state.indentation_hint = 0;
        }
    }

    fn spell(&self, text: &str, kind: TokenKind) -> Option<Diagnostic> {
        if !self.rules.spell_check.active {
            return None;
        }
        self.spelling.check(text, kind)
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
