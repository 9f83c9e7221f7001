use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BslintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Circular extends detected: {}", chain.join(" -> "))]
    CircularExtends { chain: Vec<String> },

    #[error("Extends chain too deep ({depth} > {max}): {}", chain.join(" -> "))]
    ExtendsTooDeep {
        depth: usize,
        max: usize,
        chain: Vec<String>,
    },
}

impl BslintError {
    /// Short machine-readable name of the error variant.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::TomlSerialize(_) => "TomlSerialize",
            Self::JsonSerialize(_) => "JsonSerialize",
            Self::CircularExtends { .. } => "CircularExtends",
            Self::ExtendsTooDeep { .. } => "ExtendsTooDeep",
        }
    }
}

pub type Result<T> = std::result::Result<T, BslintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
