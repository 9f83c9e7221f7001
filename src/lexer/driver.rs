use crate::config::CommandsConfig;
use crate::messages::{MessageRenderer, WarningAccumulator, render_diagnostic};
use crate::rules::{Diagnostic, ErrorKey, FinishedLine, StyleEvaluator, apply_directive};

use super::{
    Classified, MatchProvider, ScanOutcome, ScanResult, ScanState, Token, TokenKind, build_token,
};

/// Single-pass scanner producing tokens and style warnings together.
///
/// A `Lexer` holds only read-only collaborators; all mutable state lives in a
/// per-call [`ScanState`], so one instance can scan any number of sources,
/// including from several threads at once.
pub struct Lexer<'a> {
    matcher: &'a dyn MatchProvider,
    evaluator: StyleEvaluator<'a>,
    commands: &'a CommandsConfig,
    renderer: &'a dyn MessageRenderer,
}

/// Everything one call to [`Lexer::lex`] accumulates.
struct Scan<'src, 'r> {
    source: &'src str,
    state: ScanState,
    tokens: Vec<Token>,
    errors: Vec<String>,
    warnings: WarningAccumulator<'r>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(
        matcher: &'a dyn MatchProvider,
        evaluator: StyleEvaluator<'a>,
        commands: &'a CommandsConfig,
        renderer: &'a dyn MessageRenderer,
    ) -> Self {
        Self {
            matcher,
            evaluator,
            commands,
            renderer,
        }
    }

    /// Scan `source` to completion.
    ///
    /// Never fails: an unterminated string is recorded as an error for its
    /// line and scanning resumes on the next line.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn lex(&self, source: &str) -> ScanResult {
        let mut scan = Scan {
            source,
            state: ScanState::new(),
            tokens: Vec::new(),
            errors: Vec::new(),
            warnings: WarningAccumulator::new(self.renderer),
        };

        while scan.state.cursor.position < source.len() {
            let rest = &source[scan.state.cursor.position..];
            match self.matcher.classify(rest) {
                Ok(lexeme) if !lexeme.text.is_empty() => self.consume(&mut scan, &lexeme),
                _ => self.recover(&mut scan),
            }
        }

        self.flush_last_line(&mut scan);

        let Scan {
            state,
            tokens,
            errors,
            warnings,
            ..
        } = scan;
        let warnings = warnings.into_warnings();
        tracing::debug!(
            lines = state.cursor.line,
            tokens = tokens.len(),
            errors = errors.len(),
            warnings = warnings.len(),
            "scan finished"
        );

        let outcome = if errors.is_empty() {
            ScanOutcome::Tokens(tokens)
        } else {
            ScanOutcome::Errors(errors)
        };
        ScanResult { outcome, warnings }
    }

    fn consume(&self, scan: &mut Scan<'_, '_>, lexeme: &Classified<'_>) {
        let start = scan.state.cursor.position;
        let line = &mut scan.state.line;

        if let Some(level) = lexeme.indentation {
            line.indentation_hint = level;
        }
        line.length += lexeme.text.chars().count();
        scan.state.cursor.advance(lexeme.text.len());

        if lexeme.kind.is_significant() {
            self.handle(scan, lexeme, start);
        }
    }

    fn handle(&self, scan: &mut Scan<'_, '_>, lexeme: &Classified<'_>, start: usize) {
        match lexeme.kind {
            TokenKind::Newline => self.end_line(scan, lexeme, start),
            TokenKind::Directive => {
                let trails_code = !scan.state.line.line_is_blank;
                scan.state.line.mark_non_blank();
                apply_directive(lexeme.command, self.commands, &mut scan.state, trails_code);
            }
            _ => {
                let line = scan.state.cursor.line;
                scan.state.line.mark_non_blank();
                if scan.state.styling_active() {
                    let found = self.evaluator.check_token(scan.source, lexeme, start);
                    scan.warnings.extend(found, line);
                }
                scan.tokens.extend(build_token(lexeme, line));
            }
        }
    }

    /// Finalize the line whose terminator starts at byte `newline_start`.
    fn end_line(&self, scan: &mut Scan<'_, '_>, newline: &Classified<'_>, newline_start: usize) {
        let source = scan.source;
        let finished = FinishedLine {
            text: &source[scan.state.line.line_start..newline_start],
            length: scan.state.line.length - newline.text.chars().count(),
        };
        self.check_line(scan, &finished);

        scan.state.cursor.next_line();
        let next_start = scan.state.cursor.position;
        scan.state.line.start_line(next_start);
    }

    fn check_line(&self, scan: &mut Scan<'_, '_>, finished: &FinishedLine<'_>) {
        let line = scan.state.cursor.line;
        scan.state.line.record_blank_run();
        if scan.state.styling_active() {
            let found = self.evaluator.check_line_end(finished, &mut scan.state.line);
            scan.warnings.extend(found, line);
        } else {
            self.evaluator.track_line_end(finished, &mut scan.state.line);
        }
    }

    /// Run the end-of-line checks once more for the final line, which may be
    /// empty when the source ends with a newline.
    fn flush_last_line(&self, scan: &mut Scan<'_, '_>) {
        let source = scan.source;
        let line_start = scan.state.line.line_start.min(source.len());

        let finished = FinishedLine {
            text: &source[line_start..],
            length: scan.state.line.length,
        };
        self.check_line(scan, &finished);
    }

    /// Skip the rest of a line holding an unterminated string; the error
    /// quotes the line from the opening quote on.
    fn recover(&self, scan: &mut Scan<'_, '_>) {
        let source = scan.source;
        let line = scan.state.cursor.line;
        let position = scan.state.cursor.position;
        let line_end = source[position..]
            .find('\n')
            .map_or(source.len(), |i| position + i);
        let text = source[position..line_end].trim_end_matches('\r');

        tracing::debug!(line, "unmatched quotation mark, skipping rest of line");
        let diagnostic = Diagnostic::new(ErrorKey::UnmatchedQuotationMark).with_param(text);
        scan.errors
            .push(render_diagnostic(self.renderer, diagnostic, line));

        let next_start = (line_end + 1).min(source.len());
        scan.state.cursor.advance(next_start - position);
        scan.state.cursor.next_line();

        let line_state = &mut scan.state.line;
        line_state.start_line(next_start);
        line_state.mark_non_blank();
        line_state.record_blank_run();
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
