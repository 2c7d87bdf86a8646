use clap::{CommandFactory, FromArgMatches, Parser};
use cueforge::config::Config;
use cueforge::error::CueForgeError;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn write_json(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{}", body).unwrap();
    file
}

#[test]
fn test_defaults_are_valid() {
    let cfg = Config::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.weights.bonus_target_clear, 2200.0);
    assert_eq!(cfg.power.power_min, 24.0);
    assert_eq!(cfg.fallback.center_power, 35.0);
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let cli = TestCli::try_parse_from(["test"]).unwrap();
    let cfg = Config::default();
    assert_eq!(
        serde_json::to_value(&cli.config).unwrap(),
        serde_json::to_value(&cfg).unwrap()
    );
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_json(
        r#"{ "power": { "power_max": 90.0 }, "weights": { "bank_shots": false } }"#,
    );
    let cfg = Config::load_from_file(file.path()).unwrap();
    assert_eq!(cfg.power.power_max, 90.0);
    assert_eq!(cfg.power.power_min, 24.0);
    assert!(!cfg.weights.bank_shots);
    assert_eq!(cfg.weights.weight_alignment, 320.0);
}

#[test]
fn test_inverted_power_range_is_rejected() {
    let file = write_json(r#"{ "power": { "power_min": 60.0, "power_max": 40.0 } }"#);
    assert!(matches!(
        Config::load_from_file(file.path()),
        Err(CueForgeError::Config(_))
    ));
}

#[test]
fn test_fallback_power_outside_range_is_rejected() {
    let mut cfg = Config::default();
    cfg.fallback.center_power = 10.0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.fallback.default_angle = 360.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_malformed_json_is_an_error() {
    let file = write_json("{ not json");
    assert!(matches!(
        Config::load_from_file(file.path()),
        Err(CueForgeError::Json(_))
    ));
}

#[test]
fn test_explicit_flags_override_file() {
    let file = write_json(
        r#"{ "power": { "power_max": 90.0 }, "weights": { "weight_alignment": 100.0 } }"#,
    );
    let mut cfg = Config::load_from_file(file.path()).unwrap();

    let matches = TestCli::command().get_matches_from([
        "test",
        "--power-max",
        "95",
        "--bank-shots",
        "false",
    ]);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    cfg.merge_from_cli(&cli.config, &matches);

    assert_eq!(cfg.power.power_max, 95.0);
    assert!(!cfg.weights.bank_shots);
    // Not typed on the command line: file value survives
    assert_eq!(cfg.weights.weight_alignment, 100.0);
}
