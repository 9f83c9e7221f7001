use crate::cli::{Cli, TokensArgs};
use crate::linter::Linter;
use crate::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

use super::context::{load_config, write_output};

#[must_use]
pub fn run_tokens(args: &TokensArgs, cli: &Cli) -> i32 {
    match run_tokens_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the scan result of one file as JSON.
///
/// Exits with [`EXIT_FINDINGS`] only when the token stream is unreliable.
///
/// # Errors
/// Returns an error if the configuration or the file cannot be read.
pub fn run_tokens_impl(args: &TokensArgs, cli: &Cli) -> crate::Result<i32> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let linter = Linter::new(loaded.config)?;
    let report = linter.lint_file(&args.file)?;

    let json = serde_json::to_string_pretty(report.result())?;
    write_output(None, &format!("{json}\n"), cli.quiet)?;

    if report.result().is_success() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FINDINGS)
    }
}
