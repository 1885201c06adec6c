use chordforge::config::{Config, DecomposeParams, TypingCosts};
use chordforge::ChordError;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (TestCli, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli, matches)
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.decompose.max_one_hand_size, 10);
    assert_eq!(config.decompose.default_layer, 0);
    assert_eq!(config.costs.accord_ms, 120.0);
    assert_eq!(config.costs.extra_key_ms, 20.0);
    assert_eq!(config.costs.alternation_bonus_ms, 35.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (cli, _) = parse(&["test"]);
    assert_eq!(cli.config, Config::default());
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"costs": {{"accord_ms": 90.0}}}}"#).unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.costs.accord_ms, 90.0);
    assert_eq!(config.costs.extra_key_ms, 20.0);
    assert_eq!(config.decompose, DecomposeParams::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Config::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ChordError::Io(_)));
}

#[test]
fn test_malformed_file_is_json_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let err = Config::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ChordError::Json(_)));
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"decompose": {{"max_one_hand_size": 0}}}}"#).unwrap();
    let err = Config::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ChordError::Config(_)));
}

#[test]
fn test_validate_rejects_bad_costs() {
    let mut config = Config::default();
    config.costs.extra_key_ms = -1.0;
    assert!(config.validate().is_err());

    config.costs.extra_key_ms = f32::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_only_explicit_flags_override_file() {
    let (cli, matches) = parse(&["test", "--accord-ms", "99", "--max-one-hand-size", "4"]);

    let mut config = Config {
        decompose: DecomposeParams {
            max_one_hand_size: 7,
            default_layer: 2,
        },
        costs: TypingCosts {
            accord_ms: 10.0,
            extra_key_ms: 5.0,
            alternation_bonus_ms: 1.0,
        },
    };
    config.merge_from_cli(&cli.config, &matches);

    assert_eq!(config.costs.accord_ms, 99.0);
    assert_eq!(config.decompose.max_one_hand_size, 4);
    // Untouched by the command line
    assert_eq!(config.costs.extra_key_ms, 5.0);
    assert_eq!(config.costs.alternation_bonus_ms, 1.0);
    assert_eq!(config.decompose.default_layer, 2);
}
