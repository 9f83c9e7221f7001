//! Configuration semantic validation.
//!
//! Runs after parsing and `extends` merging; the loader rejects any config
//! that fails here.

use super::model::CONFIG_VERSION;
use crate::config::Config;
use crate::rules::ErrorKey;
use crate::{BslintError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error for an unsupported version, a zero-sized rule limit, an
/// invalid exclude glob, or an unknown `[messages]` key.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_version(config)?;
    validate_rules(config)?;
    validate_glob_patterns(config)?;
    validate_messages(config)?;
    Ok(())
}

fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(BslintError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_rules(config: &Config) -> Result<()> {
    let rules = &config.rules;
    let limits = [
        ("rules.max_line_length.max", rules.max_line_length.max),
        ("rules.indentation.indent_size", rules.indentation.indent_size),
        (
            "rules.spell_check.min_word_length",
            rules.spell_check.min_word_length,
        ),
    ];

    for (name, value) in limits {
        if value == 0 {
            return Err(BslintError::Config(format!(
                "{name} must be greater than 0"
            )));
        }
    }
    Ok(())
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| BslintError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_messages(config: &Config) -> Result<()> {
    for key in config.messages.keys() {
        key.parse::<ErrorKey>()
            .map_err(|e| BslintError::Config(format!("[messages] {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
