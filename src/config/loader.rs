use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::error::{BslintError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::merge::merge_toml_values;
use super::validation::validate_config_semantics;

/// A loaded configuration and the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when built-in defaults were used.
    pub source: Option<PathBuf>,
}

impl LoadResult {
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            config: Config::default(),
            source: None,
        }
    }
}

pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read, parsed or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path, resolving `extends`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".bslint.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Maximum depth of an `extends` chain.
///
/// Depth 0 is the initial config, so up to 11 files can take part in a chain.
pub const MAX_EXTENDS_DEPTH: usize = 10;

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.bslint.toml` in the current directory
/// 2. `config.toml` in the platform config directory for `bslint`
/// 3. `Config::default()`
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.fs
            .read_to_string(path)
            .map_err(|source| BslintError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Read `path` and merge its `extends` ancestors underneath it.
    fn load_with_extends(
        &self,
        path: &Path,
        visited: &mut IndexSet<String>,
        depth: usize,
    ) -> Result<toml::Value> {
        if depth > MAX_EXTENDS_DEPTH {
            return Err(BslintError::ExtendsTooDeep {
                depth,
                max: MAX_EXTENDS_DEPTH,
                chain: visited.iter().cloned().collect(),
            });
        }

        let canonical = self
            .fs
            .canonicalize(path)
            .map_err(|source| BslintError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let key = canonical.to_string_lossy().to_string();

        if !visited.insert(key.clone()) {
            // Insertion order makes the chain read as the traversal happened.
            let mut chain: Vec<String> = visited.iter().cloned().collect();
            chain.push(key);
            return Err(BslintError::CircularExtends { chain });
        }

        let content = self.read(path)?;
        let mut value: toml::Value = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), depth, "read config file");

        let extends = value
            .get("extends")
            .and_then(toml::Value::as_str)
            .map(PathBuf::from);

        if let Some(extends) = extends {
            let parent_path = if extends.is_absolute() {
                extends
            } else {
                path.parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join(extends)
            };
            let base = self.load_with_extends(&parent_path, visited, depth + 1)?;
            value = merge_toml_values(base, value);
        }

        if let Some(table) = value.as_table_mut() {
            table.remove("extends");
        }
        Ok(value)
    }

    fn finalize(value: &toml::Value) -> Result<Config> {
        let text = toml::to_string(value)?;
        let config: Config = toml::from_str(&text)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        if let Some(local_path) = self.local_config_path()
            && self.fs.exists(&local_path)
        {
            return self.load_from_path(&local_path);
        }

        if let Some(user_path) = self.user_config_path()
            && self.fs.exists(&user_path)
        {
            return self.load_from_path(&user_path);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(LoadResult::defaults())
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let mut visited = IndexSet::new();
        let value = self.load_with_extends(path, &mut visited, 0)?;
        let config = Self::finalize(&value)?;
        tracing::debug!(
            path = %path.display(),
            files = visited.len(),
            "loaded config"
        );

        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
