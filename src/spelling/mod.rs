//! Dictionary-backed spell checking of identifiers and comments.

mod segment;

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::{DictionaryLanguage, SpellCheckRule};
use crate::error::{BslintError, Result};
use crate::lexer::TokenKind;
use crate::rules::{Diagnostic, ErrorKey};

pub use segment::{comment_body, comment_words, identifier_segments};

/// Recursion limit for stripping inflection suffixes.
const MAX_INFLECTION_DEPTH: usize = 2;

static COMMON: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| parse_word_list(include_str!("words/common.txt")).collect());
static EN_US: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| parse_word_list(include_str!("words/en_us.txt")).collect());
static EN_GB: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| parse_word_list(include_str!("words/en_gb.txt")).collect());

/// Words of a list: whitespace separated, `#` starts a comment line.
fn parse_word_list(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(str::split_whitespace)
}

/// Decides whether a token's text contains a spelling mistake.
pub trait SpellChecker: Send + Sync {
    /// Returns a `TYPO_IN_CODE` diagnostic when `text` has an unknown word.
    ///
    /// Only identifiers and comments are checked; every other kind, and any
    /// text without checkable words, yields `None`.
    fn check(&self, text: &str, kind: TokenKind) -> Option<Diagnostic>;
}

#[derive(Debug, Clone)]
pub struct DictionarySpellChecker {
    language: DictionaryLanguage,
    words: HashSet<String>,
    min_word_length: usize,
}

impl Default for DictionarySpellChecker {
    fn default() -> Self {
        Self::new(DictionaryLanguage::default())
    }
}

impl DictionarySpellChecker {
    #[must_use]
    pub fn new(language: DictionaryLanguage) -> Self {
        Self {
            language,
            words: HashSet::new(),
            min_word_length: SpellCheckRule::default().min_word_length,
        }
    }

    /// Build a checker from the `spell_check` rule, reading its word lists.
    ///
    /// # Errors
    /// Returns an error if a word list file cannot be read.
    pub fn from_rule(rule: &SpellCheckRule) -> Result<Self> {
        let mut checker = Self::new(rule.dictionary)
            .with_min_word_length(rule.min_word_length)
            .with_words(rule.words.iter().map(String::as_str));

        for path in &rule.word_lists {
            checker.load_word_list(path)?;
        }

        Ok(checker)
    }

    #[must_use]
    pub fn with_words<'w>(mut self, words: impl IntoIterator<Item = &'w str>) -> Self {
        self.words
            .extend(words.into_iter().map(str::to_lowercase));
        self
    }

    #[must_use]
    pub const fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Add every word of a word list file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load_word_list(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|source| BslintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let before = self.words.len();
        self.words
            .extend(parse_word_list(&text).map(str::to_lowercase));
        tracing::debug!(
            path = %path.display(),
            added = self.words.len() - before,
            "loaded word list"
        );
        Ok(())
    }

    /// Switch the regional dictionary.
    pub const fn set_language(&mut self, language: DictionaryLanguage) {
        self.language = language;
    }

    #[must_use]
    pub const fn language(&self) -> DictionaryLanguage {
        self.language
    }

    /// Whether `word` (any case) is in a dictionary or is an inflection of one.
    #[must_use]
    pub fn is_known(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.in_dictionary(&word) || self.is_inflection(&word, MAX_INFLECTION_DEPTH)
    }

    fn in_dictionary(&self, word: &str) -> bool {
        let regional = match self.language {
            DictionaryLanguage::EnUs => &*EN_US,
            DictionaryLanguage::EnGb => &*EN_GB,
        };
        COMMON.contains(word) || regional.contains(word) || self.words.contains(word)
    }

    fn is_inflection(&self, word: &str, depth: usize) -> bool {
        if depth == 0 {
            return false;
        }
        inflection_stems(word).iter().any(|stem| {
            stem.len() >= 2 && (self.in_dictionary(stem) || self.is_inflection(stem, depth - 1))
        })
    }

    fn segment_is_known(&self, segment: &str) -> bool {
        segment.chars().count() < self.min_word_length || self.is_known(segment)
    }

    fn identifier_is_known(&self, text: &str) -> bool {
        identifier_segments(text)
            .iter()
            .all(|segment| self.segment_is_known(segment))
    }

    fn comment_word_is_known(&self, word: &str) -> bool {
        if word.contains('\'') {
            if self.is_known(word) {
                return true;
            }
            let before = word.split('\'').next().unwrap_or_default();
            return self.identifier_is_known(before);
        }
        self.identifier_is_known(word)
    }

    fn first_unknown<'t>(&self, text: &'t str, kind: TokenKind) -> Option<&'t str> {
        match kind {
            TokenKind::Identifier => (!self.identifier_is_known(text)).then_some(text),
            TokenKind::Comment => comment_words(text)
                .into_iter()
                .find(|word| !self.comment_word_is_known(word)),
            _ => None,
        }
    }
}

impl SpellChecker for DictionarySpellChecker {
    fn check(&self, text: &str, kind: TokenKind) -> Option<Diagnostic> {
        let unknown = self.first_unknown(text, kind)?;
        tracing::trace!(word = unknown, language = %self.language, "unknown word");
        Some(Diagnostic::new(ErrorKey::TypoInCode))
    }
}

/// Candidate base forms of an inflected word.
fn inflection_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();

    if let Some(stem) = word.strip_suffix("ies") {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s').filter(|s| !s.ends_with('s')) {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ied") {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ed") {
        stems.push(stem.to_string());
        stems.extend(undouble(stem));
    }
    if let Some(stem) = word.strip_suffix('d') {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ing") {
        stems.push(stem.to_string());
        stems.push(format!("{stem}e"));
        stems.extend(undouble(stem));
    }
    if let Some(stem) = word.strip_suffix("er") {
        stems.push(stem.to_string());
        stems.push(format!("{stem}e"));
        stems.extend(undouble(stem));
    }
    if let Some(stem) = word.strip_suffix("ly") {
        stems.push(stem.to_string());
    }

    stems
}

/// `runn` -> `run`.
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    (chars.next() == Some(last) && !"aeiou".contains(last))
        .then(|| stem[..stem.len() - last.len_utf8()].to_string())
}

#[cfg(test)]
#[path = "spelling_tests.rs"]
mod tests;
