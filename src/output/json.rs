use serde::Serialize;

use crate::error::Result;
use crate::linter::FileReport;

use super::{OutputFormatter, StatusCounts};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    passed: usize,
    warnings: usize,
    errors: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    status: &'static str,
    errors: &'a [String],
    warnings: &'a [String],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let counts = StatusCounts::from_reports(reports);

        let output = JsonOutput {
            summary: Summary {
                files: reports.len(),
                passed: counts.passed,
                warnings: counts.warnings,
                errors: counts.errors,
            },
            results: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> FileResult<'_> {
    FileResult {
        path: report.path().display().to_string(),
        status: report.status().as_str(),
        errors: report.errors(),
        warnings: report.warnings(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
