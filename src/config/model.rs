use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Config schema version. Missing means current.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Path of a parent config merged underneath this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    pub scanner: ScannerConfig,

    pub rules: RulesConfig,

    pub commands: CommandsConfig,

    /// Message template overrides keyed by error key (e.g. `TYPO_IN_CODE`).
    pub messages: BTreeMap<String, String>,
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScannerConfig {
    /// File extensions to lint.
    pub extensions: Vec<String>,

    /// Glob patterns excluded from linting.
    pub exclude: Vec<String>,

    /// Respect .gitignore rules.
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["brs".to_string()],
            exclude: Vec::new(),
            gitignore: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    pub max_line_length: MaxLineLengthRule,
    pub consecutive_empty_lines: ConsecutiveEmptyLinesRule,
    pub indentation: IndentationRule,
    pub spaces_around_operators: OperatorSpacingRule,
    pub comment_format: CommentFormatRule,
    pub spell_check: SpellCheckRule,
    pub trace_free: ToggleRule,
    pub method_declaration_spacing: ToggleRule,
}

/// A rule without parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToggleRule {
    pub active: bool,
}

impl Default for ToggleRule {
    fn default() -> Self {
        Self { active: true }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MaxLineLengthRule {
    pub active: bool,
    /// Maximum characters per line, terminator excluded.
    pub max: usize,
}

impl Default for MaxLineLengthRule {
    fn default() -> Self {
        Self {
            active: true,
            max: 120,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsecutiveEmptyLinesRule {
    pub active: bool,
    /// Longest allowed run of empty lines.
    pub max: usize,
}

impl Default for ConsecutiveEmptyLinesRule {
    fn default() -> Self {
        Self {
            active: true,
            max: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndentationRule {
    pub active: bool,
    /// Columns per block level. A tab counts as one level.
    pub indent_size: usize,
}

impl Default for IndentationRule {
    fn default() -> Self {
        Self {
            active: true,
            indent_size: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OperatorSpacingRule {
    pub active: bool,
    /// Spaces required on each side of a binary operator.
    pub spaces: usize,
}

impl Default for OperatorSpacingRule {
    fn default() -> Self {
        Self {
            active: true,
            spaces: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommentFormat {
    /// `' comment`
    #[default]
    Apostrophe,
    /// `REM comment`
    Rem,
    Either,
}

impl CommentFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apostrophe => "apostrophe",
            Self::Rem => "rem",
            Self::Either => "either",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CommentFormatRule {
    pub active: bool,
    pub format: CommentFormat,
}

impl Default for CommentFormatRule {
    fn default() -> Self {
        Self {
            active: true,
            format: CommentFormat::default(),
        }
    }
}

/// Regional spelling variant used by the spell checker.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DictionaryLanguage {
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "en_GB")]
    EnGb,
}

impl DictionaryLanguage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::EnGb => "en_GB",
        }
    }
}

impl fmt::Display for DictionaryLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DictionaryLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").to_lowercase().as_str() {
            "en_us" => Ok(Self::EnUs),
            "en_gb" => Ok(Self::EnGb),
            _ => Err(format!("Unknown dictionary: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SpellCheckRule {
    pub active: bool,
    pub dictionary: DictionaryLanguage,
    /// Word segments shorter than this are never checked.
    pub min_word_length: usize,
    /// Project-specific words accepted in addition to the dictionary.
    pub words: Vec<String>,
    /// Files with one accepted word per line.
    pub word_lists: Vec<PathBuf>,
}

impl Default for SpellCheckRule {
    fn default() -> Self {
        Self {
            active: true,
            dictionary: DictionaryLanguage::default(),
            min_word_length: 3,
            words: Vec::new(),
            word_lists: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CommandsConfig {
    pub skip_line: ToggleRule,
    pub skip_file: ToggleRule,
}
