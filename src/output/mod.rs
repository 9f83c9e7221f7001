mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::linter::FileReport;

/// Trait for formatting lint reports into various output formats.
pub trait OutputFormatter {
    /// Format the lint reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Passed / warning / error file counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        use crate::linter::FileStatus;

        reports.iter().fold(Self::default(), |mut counts, report| {
            match report.status() {
                FileStatus::Passed => counts.passed += 1,
                FileStatus::Warning => counts.warnings += 1,
                FileStatus::Error => counts.errors += 1,
            }
            counts
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
