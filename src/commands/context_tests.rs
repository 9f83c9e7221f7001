use tempfile::TempDir;

use super::*;
use crate::BslintError;

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn load_config_no_config_returns_default() {
    let result = load_config(None, true).unwrap();
    assert_eq!(result, LoadResult::defaults());
}

#[test]
fn load_config_no_config_ignores_explicit_path() {
    let result = load_config(Some(Path::new("nonexistent.toml")), true).unwrap();
    assert!(result.source.is_none());
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let result = load_config(Some(Path::new("nonexistent.toml")), false);
    assert!(matches!(result, Err(BslintError::FileRead { .. })));
}

#[test]
fn load_config_from_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(&config_path, "[rules.max_line_length]\nmax = 90\n").unwrap();

    let result = load_config(Some(&config_path), false).unwrap();
    assert_eq!(result.config.rules.max_line_length.max, 90);
    assert_eq!(result.source.as_deref(), Some(config_path.as_path()));
}

#[test]
fn write_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.txt");

    write_output(Some(&output_path), "test content", false).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(content, "test content");
}

#[test]
fn write_output_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("reports/lint/output.json");

    write_output(Some(&output_path), "{}", true).unwrap();

    assert!(output_path.exists());
}
