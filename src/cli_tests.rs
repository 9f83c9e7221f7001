use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn cli_check_default_path() {
    let cli = Cli::parse_from(["bslint", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.paths, vec![PathBuf::from(".")]);
            assert_eq!(args.format, OutputFormat::Text);
            assert!(!args.warn_only);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_paths() {
    let cli = Cli::parse_from(["bslint", "check", "source", "components"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.paths,
                vec![PathBuf::from("source"), PathBuf::from("components")]
            );
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_overrides() {
    let cli = Cli::parse_from([
        "bslint",
        "check",
        "--config",
        "custom.toml",
        "--dictionary",
        "en_GB",
        "--max-line-length",
        "80",
        "--format",
        "json",
        "--output",
        "report.json",
        "--warn-only",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
            assert_eq!(args.dictionary, Some(DictionaryLanguage::EnGb));
            assert_eq!(args.max_line_length, Some(80));
            assert_eq!(args.format, OutputFormat::Json);
            assert_eq!(args.output, Some(PathBuf::from("report.json")));
            assert!(args.warn_only);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_rejects_unknown_dictionary() {
    let result = Cli::try_parse_from(["bslint", "check", "--dictionary", "fr_FR"]);
    assert!(result.is_err());
}

#[test]
fn cli_tokens_requires_file() {
    assert!(Cli::try_parse_from(["bslint", "tokens"]).is_err());

    let cli = Cli::parse_from(["bslint", "tokens", "source/main.brs"]);
    match cli.command {
        Commands::Tokens(args) => assert_eq!(args.file, PathBuf::from("source/main.brs")),
        _ => panic!("Expected Tokens command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["bslint", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".bslint.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_validate_default_path() {
    let cli = Cli::parse_from(["bslint", "config", "validate"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { config },
        }) => assert_eq!(config, PathBuf::from(".bslint.toml")),
        _ => panic!("Expected Config Validate command"),
    }
}

#[test]
fn cli_config_show_json() {
    let cli = Cli::parse_from(["bslint", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { config, format },
        }) => {
            assert!(config.is_none());
            assert_eq!(format, ConfigOutputFormat::Json);
        }
        _ => panic!("Expected Config Show command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["bslint", "-vv", "--quiet", "--no-config", "check"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(cli.no_config);
    assert!(matches!(cli.color, ColorChoice::Auto));
}

#[test]
fn cli_color_after_subcommand() {
    let cli = Cli::parse_from(["bslint", "check", "--color", "never"]);
    assert!(matches!(cli.color, ColorChoice::Never));
}
