use std::path::{Path, PathBuf};

use crate::lexer::{ScanOutcome, ScanResult};

/// Overall outcome for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileStatus {
    Passed,
    /// Style warnings only; the token stream is intact.
    Warning,
    /// At least one unmatched quotation mark, or the file could not be read.
    Error,
}

impl FileStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Result of linting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    path: PathBuf,
    result: ScanResult,
}

impl FileReport {
    #[must_use]
    pub const fn new(path: PathBuf, result: ScanResult) -> Self {
        Self { path, result }
    }

    /// Report for a file that could not be read, e.g. because it is not UTF-8.
    #[must_use]
    pub fn unreadable(path: PathBuf, error: &dyn std::error::Error) -> Self {
        let message = match error.source() {
            Some(source) => format!("{error}: {source}"),
            None => error.to_string(),
        };
        let result = ScanResult {
            outcome: ScanOutcome::Errors(vec![message]),
            warnings: Vec::new(),
        };
        Self::new(path, result)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn result(&self) -> &ScanResult {
        &self.result
    }

    #[must_use]
    pub fn status(&self) -> FileStatus {
        if !self.result.is_success() {
            FileStatus::Error
        } else if self.result.warnings.is_empty() {
            FileStatus::Passed
        } else {
            FileStatus::Warning
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        self.result.errors()
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.result.warnings
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status() == FileStatus::Passed
    }
}
