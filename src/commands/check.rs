use std::path::PathBuf;

use rayon::prelude::*;

use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config_semantics};
use crate::linter::{FileReport, Linter};
use crate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::scanner::collect_files;
use crate::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Lint every file under `args.paths` and report the results.
///
/// # Errors
/// Returns an error if the configuration is invalid, a path cannot be scanned,
/// or the report cannot be written. Unreadable files are reported per file.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, args)?;

    let files = collect_files(&args.paths, &config.scanner)?;
    tracing::debug!(files = files.len(), "collected files");

    let linter = Linter::new(config)?;
    let reports = lint_files(&linter, &files);

    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &reports, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    let has_findings = reports.iter().any(|report| !report.is_passed());
    if has_findings && !args.warn_only {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Apply command-line overrides, then validate the result again.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) -> crate::Result<()> {
    if let Some(dictionary) = args.dictionary {
        config.rules.spell_check.dictionary = dictionary;
    }
    if let Some(max) = args.max_line_length {
        config.rules.max_line_length.max = max;
    }
    validate_config_semantics(config)
}

/// Lint files in parallel; each file gets its own scan state.
///
/// A file that cannot be read becomes an error report of its own instead of
/// aborting the run.
pub(crate) fn lint_files(linter: &Linter, files: &[PathBuf]) -> Vec<FileReport> {
    files
        .par_iter()
        .map(|path| {
            linter.lint_file(path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "could not lint file");
                FileReport::unreadable(path.clone(), &e)
            })
        })
        .collect()
}

pub(crate) fn format_output(
    format: OutputFormat,
    reports: &[FileReport],
    color_mode: ColorMode,
    verbose: u8,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
