//! Individual style checks.
//!
//! Every check is total over its inputs: it returns `None` when the rule is
//! inactive or the input is clean, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    CommentFormat, CommentFormatRule, ConsecutiveEmptyLinesRule, IndentationRule,
    MaxLineLengthRule, OperatorSpacingRule, ToggleRule,
};

use super::{Diagnostic, ErrorKey};

/// Keywords after which `+`/`-` can only be a sign.
const UNARY_KEYWORDS: &[&str] = &[
    "and", "else", "if", "in", "mod", "not", "or", "print", "return", "step", "then", "to",
    "while",
];

/// Line prefixes that close one block and open the next on the same depth.
const REINDENT_WORDS: &[&str] = &["else", "elseif", "catch"];

static METHOD_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[ \t]*(?:function|sub)\b(?P<gap>[ \t]*)(?P<name>[A-Za-z_]\w*)(?P<pre>[ \t]*)\((?P<params>[^)]*)\)",
    )
    .expect("Invalid regex")
});

static PARAMETER_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+,|,(?:[^ ]|[ ]{2,})").expect("Invalid regex"));

#[must_use]
pub fn check_comment_format(comment: &str, rule: &CommentFormatRule) -> Option<Diagnostic> {
    if !rule.active {
        return None;
    }

    let uses_apostrophe = comment.starts_with('\'');
    let matches = match rule.format {
        CommentFormat::Either => true,
        CommentFormat::Apostrophe => uses_apostrophe,
        CommentFormat::Rem => !uses_apostrophe,
    };

    (!matches).then(|| Diagnostic::new(ErrorKey::CommentFormat).with_param(rule.format.as_str()))
}

/// Check the whitespace around the operator occupying `source[start..end]`.
#[must_use]
pub fn check_operator_spacing(
    source: &str,
    start: usize,
    end: usize,
    rule: &OperatorSpacingRule,
) -> Option<Diagnostic> {
    if !rule.active {
        return None;
    }

    let operator = &source[start..end];
    if matches!(operator, "++" | "--") {
        return None;
    }

    let before = source[..start].rsplit('\n').next().unwrap_or_default();
    let after = source[end..].split(['\n', '\r']).next().unwrap_or_default();

    let preceding = before.trim_end_matches([' ', '\t']);
    let following = after.trim_start_matches([' ', '\t']);

    if matches!(operator, "+" | "-") && is_unary_context(preceding) {
        return None;
    }

    let spaces_before = before.len() - preceding.len();
    let spaces_after = after.len() - following.len();
    let bad_before = !preceding.trim().is_empty() && spaces_before != rule.spaces;
    let bad_after = !following.is_empty() && spaces_after != rule.spaces;

    (bad_before || bad_after)
        .then(|| Diagnostic::new(ErrorKey::SpacesAroundOperators).with_param(rule.spaces))
}

fn is_unary_context(preceding: &str) -> bool {
    let Some(last) = preceding.chars().next_back() else {
        return true;
    };
    if "([{,=<>+-*/\\^:;".contains(last) {
        return true;
    }

    let word_start = preceding
        .rfind(|c: char| !(c.is_alphanumeric() || c == '_'))
        .map_or(0, |i| i + 1);
    let word = preceding[word_start..].to_lowercase();
    UNARY_KEYWORDS.contains(&word.as_str())
}

#[must_use]
pub fn check_max_line_length(length: usize, rule: &MaxLineLengthRule) -> Option<Diagnostic> {
    (rule.active && length > rule.max).then(|| {
        Diagnostic::new(ErrorKey::LineTooLong)
            .with_param(length)
            .with_param(rule.max)
    })
}

#[must_use]
pub fn check_consecutive_empty_lines(
    blank_run: usize,
    rule: &ConsecutiveEmptyLinesRule,
) -> Option<Diagnostic> {
    (rule.active && blank_run > rule.max)
        .then(|| Diagnostic::new(ErrorKey::ConsecutiveEmptyLines).with_param(rule.max))
}

/// Result of checking one finished line's indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentationOutcome {
    pub diagnostic: Option<Diagnostic>,
    /// Block depth for the next line, computed from the expected depth so a
    /// mis-indented line does not shift every line after it.
    pub depth: usize,
}

/// Check `line` against the block depth `current` adjusted by `hint`.
///
/// Returns `None` when the rule is inactive.
#[must_use]
pub fn check_indentation(
    current: usize,
    line: &str,
    hint: i32,
    rule: &IndentationRule,
) -> Option<IndentationOutcome> {
    if !rule.active {
        return None;
    }

    let content = line.trim_start_matches([' ', '\t']);
    if content.trim().is_empty() {
        return Some(IndentationOutcome {
            diagnostic: None,
            depth: current,
        });
    }

    let (line_depth, depth) = if starts_with_any_word(content, REINDENT_WORDS) {
        (current.saturating_sub(1), current)
    } else if hint < 0 {
        let closed = shift(current, hint);
        (closed, closed)
    } else {
        (current, shift(current, hint))
    };

    let actual: usize = line[..line.len() - content.len()]
        .chars()
        .map(|c| if c == '\t' { rule.indent_size } else { 1 })
        .sum();
    let expected = line_depth * rule.indent_size;

    let diagnostic = (actual != expected).then(|| {
        Diagnostic::new(ErrorKey::IncorrectIndentation)
            .with_param(expected)
            .with_param(actual)
    });

    Some(IndentationOutcome { diagnostic, depth })
}

fn shift(depth: usize, hint: i32) -> usize {
    let delta = hint.unsigned_abs() as usize;
    if hint < 0 {
        depth.saturating_sub(delta)
    } else {
        depth + delta
    }
}

fn starts_with_any_word(content: &str, words: &[&str]) -> bool {
    words.iter().any(|word| {
        content
            .get(..word.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word))
            && !content[word.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
    })
}

/// Check spacing in a `function`/`sub` declaration line.
#[must_use]
pub fn check_method_declaration_spacing(line: &str, rule: &ToggleRule) -> Option<Diagnostic> {
    if !rule.active {
        return None;
    }

    let caps = METHOD_DECLARATION.captures(line)?;
    let gap = caps.name("gap").map_or("", |m| m.as_str());
    let pre = caps.name("pre").map_or("", |m| m.as_str());
    let params = caps.name("params").map_or("", |m| m.as_str());

    let padded = !params.is_empty() && params.trim() != params;
    let bad_separator = PARAMETER_SEPARATOR.is_match(params);

    (gap != " " || !pre.is_empty() || padded || bad_separator)
        .then(|| Diagnostic::new(ErrorKey::MethodDeclarationSpacing))
}

#[must_use]
pub fn check_trace_free(rule: &ToggleRule) -> Option<Diagnostic> {
    rule.active.then(|| Diagnostic::new(ErrorKey::TraceFree))
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
