#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bslint binary.
#[macro_export]
macro_rules! bslint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bslint"))
    };
}

/// A source file that passes every default rule.
pub const CLEAN_SOURCE: &str = "\
' Entry point
sub main()
    screen = createObject(\"roSGScreen\")
    screen.show()
end sub
";

/// One operator-spacing warning on line 2.
pub const NOISY_SOURCE: &str = "\
sub main()
    total=1
end sub
";

/// Unterminated string on line 1.
pub const BROKEN_SOURCE: &str = "message = \"hello\nanswer = 42\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.bslint.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".bslint.toml", content)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
