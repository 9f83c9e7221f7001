use std::io::Write;

use crate::error::Result;
use crate::linter::{FileReport, FileStatus};

use super::{OutputFormatter, StatusCounts};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// With `verbose >= 1` passed files are listed too.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(status: FileStatus) -> &'static str {
        match status {
            FileStatus::Passed => "✓",
            FileStatus::Warning => "⚠",
            FileStatus::Error => "✗",
        }
    }

    const fn status_color(status: FileStatus) -> &'static str {
        match status {
            FileStatus::Passed => ansi::GREEN,
            FileStatus::Warning => ansi::YELLOW,
            FileStatus::Error => ansi::RED,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_report(&self, report: &FileReport, output: &mut Vec<u8>) {
        let status = report.status();
        let label = match status {
            FileStatus::Passed => "PASSED",
            FileStatus::Warning => "WARNING",
            FileStatus::Error => "ERROR",
        };
        let colored = self.colorize(label, Self::status_color(status));

        writeln!(
            output,
            "{} {colored}: {}",
            Self::status_icon(status),
            report.path().display()
        )
        .ok();

        for error in report.errors() {
            writeln!(output, "   {} {error}", self.colorize("error:", ansi::RED)).ok();
        }
        for warning in report.warnings() {
            writeln!(
                output,
                "   {} {warning}",
                self.colorize("warning:", ansi::YELLOW)
            )
            .ok();
        }
    }

    fn format_summary(&self, total: usize, counts: StatusCounts) -> String {
        let passed = self.colorize(&counts.passed.to_string(), ansi::GREEN);
        let warnings = self.colorize(&counts.warnings.to_string(), ansi::YELLOW);
        let errors = self.colorize(&counts.errors.to_string(), ansi::RED);
        let summary = format!(
            "Summary: {total} files checked, {passed} passed, {warnings} with warnings, {errors} with errors"
        );
        if total == 0 {
            return self.colorize(&summary, ansi::DIM);
        }
        summary
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = Vec::new();

        for status in [FileStatus::Error, FileStatus::Warning] {
            for report in reports.iter().filter(|r| r.status() == status) {
                self.format_report(report, &mut output);
                writeln!(output).ok();
            }
        }

        if self.verbose >= 1 {
            for report in reports.iter().filter(|r| r.is_passed()) {
                self.format_report(report, &mut output);
                writeln!(output).ok();
            }
        }

        let summary = self.format_summary(reports.len(), StatusCounts::from_reports(reports));
        writeln!(output, "{summary}").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
