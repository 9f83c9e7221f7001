mod filesystem;
mod loader;
mod merge;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{
    ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, MAX_EXTENDS_DEPTH,
};
pub use merge::merge_toml_values;
pub use model::{
    CONFIG_VERSION, CommandsConfig, CommentFormat, CommentFormatRule, Config,
    ConsecutiveEmptyLinesRule, DictionaryLanguage, IndentationRule, MaxLineLengthRule,
    OperatorSpacingRule, RulesConfig, ScannerConfig, SpellCheckRule, ToggleRule,
};
pub use validation::validate_config_semantics;

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
