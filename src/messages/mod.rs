//! Rendering of diagnostics into user-facing text.

use std::collections::{BTreeMap, HashMap};

use crate::error::{BslintError, Result};
use crate::rules::{Diagnostic, ErrorKey};

/// Turns an error key and its parameters into display text.
pub trait MessageRenderer: Send + Sync {
    fn render(&self, key: ErrorKey, params: &[String]) -> String;
}

const fn default_template(key: ErrorKey) -> &'static str {
    match key {
        ErrorKey::UnmatchedQuotationMark => "Unmatched quotation mark in '{0}' on line {1}",
        ErrorKey::TypoInCode => "Possible spelling mistake on line {0}",
        ErrorKey::CommentFormat => "Comments should use the {0} format on line {1}",
        ErrorKey::SpacesAroundOperators => "Expected {0} space(s) around operator on line {1}",
        ErrorKey::LineTooLong => {
            "Line length {0} exceeds the maximum of {1} characters on line {2}"
        }
        ErrorKey::ConsecutiveEmptyLines => "More than {0} consecutive empty lines on line {1}",
        ErrorKey::IncorrectIndentation => "Expected indentation of {0} but found {1} on line {2}",
        ErrorKey::MethodDeclarationSpacing => {
            "Incorrect spacing in method declaration on line {0}"
        }
        ErrorKey::TraceFree => "Debug print statement found on line {0}",
    }
}

/// Built-in English templates with optional per-key overrides.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    overrides: HashMap<ErrorKey, String>,
}

impl MessageCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from the `[messages]` config table.
    ///
    /// # Errors
    /// Returns a config error if a table key is not a known error key.
    pub fn from_config(messages: &BTreeMap<String, String>) -> Result<Self> {
        let overrides = messages
            .iter()
            .map(|(name, template)| {
                name.parse::<ErrorKey>()
                    .map(|key| (key, template.clone()))
                    .map_err(|e| BslintError::Config(format!("[messages] {e}")))
            })
            .collect::<Result<_>>()?;
        Ok(Self { overrides })
    }

    #[must_use]
    pub fn with_template(mut self, key: ErrorKey, template: impl Into<String>) -> Self {
        self.overrides.insert(key, template.into());
        self
    }

    #[must_use]
    pub fn template(&self, key: ErrorKey) -> &str {
        self.overrides
            .get(&key)
            .map_or_else(|| default_template(key), String::as_str)
    }
}

impl MessageRenderer for MessageCatalog {
    fn render(&self, key: ErrorKey, params: &[String]) -> String {
        fill(self.template(key), params)
    }
}

/// Substitute `{N}` placeholders with `params[N]`. Anything else is copied as is.
#[must_use]
pub fn fill(template: &str, params: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let param = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|index| params.get(index))
                .map(|value| (value, close))
        });

        match param {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Append `line` to the diagnostic's parameters and render it.
#[must_use]
pub fn render_diagnostic(
    renderer: &dyn MessageRenderer,
    diagnostic: Diagnostic,
    line: usize,
) -> String {
    let Diagnostic { key, mut params } = diagnostic;
    params.push(line.to_string());
    renderer.render(key, &params)
}

/// Ordered list of rendered warnings for one scan.
pub struct WarningAccumulator<'a> {
    renderer: &'a dyn MessageRenderer,
    warnings: Vec<String>,
}

impl<'a> WarningAccumulator<'a> {
    #[must_use]
    pub fn new(renderer: &'a dyn MessageRenderer) -> Self {
        Self {
            renderer,
            warnings: Vec::new(),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic, line: usize) {
        self.warnings
            .push(render_diagnostic(self.renderer, diagnostic, line));
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>, line: usize) {
        for diagnostic in diagnostics {
            self.push(diagnostic, line);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
