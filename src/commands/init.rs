use std::fs;

use crate::{BslintError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(BslintError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# bslint configuration file
version = "1"

# Inherit settings from another config file (relative to this file)
# extends = "../shared/bslint.toml"

[scanner]
# File extensions to lint
extensions = ["brs"]

# Glob patterns excluded from linting
exclude = ["**/out/**", "**/node_modules/**"]

# Respect .gitignore rules
gitignore = true

[rules.max_line_length]
active = true
max = 120

[rules.consecutive_empty_lines]
active = true
max = 1

[rules.indentation]
active = true
indent_size = 4

[rules.spaces_around_operators]
active = true
spaces = 1

[rules.comment_format]
active = true
# "apostrophe", "rem" or "either"
format = "apostrophe"

[rules.spell_check]
active = true
# "en_US" or "en_GB"
dictionary = "en_US"
min_word_length = 3
# Project vocabulary
words = []
# Word list files, one word per line
word_lists = []

[rules.trace_free]
active = true

[rules.method_declaration_spacing]
active = true

# In-source directives: 'BSLint_skip_line and 'BSLint_skip_file
[commands.skip_line]
active = true

[commands.skip_file]
active = true

# Message template overrides; {0}, {1}... are the message parameters
# and the last one is always the line number.
[messages]
# TRACE_FREE = "Remove debug output on line {0}"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
