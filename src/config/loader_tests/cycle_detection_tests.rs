//! Cycle detection in `extends` chains.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::BslintError;

use super::mock_fs::MockFileSystem;

#[test]
fn extends_detects_direct_cycle() {
    let fs = MockFileSystem::new()
        .with_file("/configs/a.toml", "extends = \"/configs/b.toml\"\n")
        .with_file("/configs/b.toml", "extends = \"/configs/a.toml\"\n");

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/configs/a.toml"))
        .unwrap_err();

    match &err {
        BslintError::CircularExtends { chain } => {
            assert_eq!(chain.len(), 3, "Expected chain of length 3: [a, b, a]");
            assert!(chain[0].contains("a.toml"));
            assert!(chain[1].contains("b.toml"));
            assert!(chain[2].contains("a.toml"));
        }
        other => panic!("Expected CircularExtends error, got: {other:?}"),
    }
    assert!(err.to_string().contains(" -> "));
}

#[test]
fn extends_detects_self_reference() {
    let config = r#"
extends = "/configs/self.toml"

[rules.max_line_length]
max = 100
"#;
    let fs = MockFileSystem::new().with_file("/configs/self.toml", config);

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/configs/self.toml"))
        .unwrap_err();

    match &err {
        BslintError::CircularExtends { chain } => {
            assert_eq!(chain.len(), 2, "Expected chain of length 2: [self, self]");
        }
        other => panic!("Expected CircularExtends error, got: {other:?}"),
    }
}
