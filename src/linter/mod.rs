//! Configured scanner pipeline for whole files.

mod report;

pub use report::{FileReport, FileStatus};

use std::path::Path;

use crate::config::Config;
use crate::error::{BslintError, Result};
use crate::lexer::{BrightScriptMatcher, Lexer, ScanResult};
use crate::messages::MessageCatalog;
use crate::rules::StyleEvaluator;
use crate::spelling::DictionarySpellChecker;

/// Owns the read-only collaborators built from one [`Config`].
///
/// A `Linter` is `Sync`: each [`Linter::lint`] call scans with fresh state, so
/// files can be linted in parallel against one instance.
pub struct Linter {
    config: Config,
    matcher: BrightScriptMatcher,
    spelling: DictionarySpellChecker,
    messages: MessageCatalog,
}

impl Linter {
    /// # Errors
    /// Returns an error if a spell-check word list cannot be read or a
    /// `[messages]` key is unknown.
    pub fn new(config: Config) -> Result<Self> {
        let spelling = DictionarySpellChecker::from_rule(&config.rules.spell_check)?;
        let messages = MessageCatalog::from_config(&config.messages)?;
        Ok(Self {
            config,
            matcher: BrightScriptMatcher::new(),
            spelling,
            messages,
        })
    }

    /// Linter with built-in defaults; needs no I/O.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: Config::default(),
            matcher: BrightScriptMatcher::new(),
            spelling: DictionarySpellChecker::default(),
            messages: MessageCatalog::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn lexer(&self) -> Lexer<'_> {
        Lexer::new(
            &self.matcher,
            StyleEvaluator::new(&self.config.rules, &self.spelling),
            &self.config.commands,
            &self.messages,
        )
    }

    #[must_use]
    pub fn lint(&self, source: &str) -> ScanResult {
        self.lexer().lex(source)
    }

    /// Read and lint one file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn lint_file(&self, path: &Path) -> Result<FileReport> {
        let source = std::fs::read_to_string(path).map_err(|source| BslintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let result = self.lint(&source);
        tracing::debug!(
            path = %path.display(),
            warnings = result.warnings.len(),
            errors = result.errors().len(),
            "linted file"
        );
        Ok(FileReport::new(path.to_path_buf(), result))
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
