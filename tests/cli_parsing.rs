//! Tests for CLI option parsing.

use clap::Parser;
use photo_probe::{Config, LogFormat, LogLevel};

#[test]
fn test_cli_runs_with_no_arguments() {
    // Every option has a default, so a bare invocation must parse
    let args = ["photo_probe"];
    let config = Config::try_parse_from(args.iter()).expect("Should parse with no arguments");

    assert_eq!(config.api_host, "api.nasa.gov");
    assert_eq!(config.api_port, 443);
    assert!(!config.api_plain);
    assert_eq!(config.rover, "curiosity");
    assert_eq!(config.sol, 15);
    assert_eq!(config.api_key, None);
    assert_eq!(config.max_concurrency, 8);
    assert_eq!(config.timeout_seconds, 10);

    // LogLevel doesn't implement PartialEq, so compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Info)
    );
    match config.log_format {
        LogFormat::Plain => {}
        _ => panic!("Should default to plain format"),
    }
}

#[test]
fn test_cli_with_options() {
    let args = vec![
        "photo_probe",
        "--api-host",
        "127.0.0.1",
        "--api-port",
        "8080",
        "--api-plain",
        "--rover",
        "spirit",
        "--sol",
        "1000",
        "--api-key",
        "k123",
        "--max-concurrency",
        "2",
        "--timeout-seconds",
        "3",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let config = Config::try_parse_from(args.iter()).expect("Should parse all options");

    assert_eq!(config.api_host, "127.0.0.1");
    assert_eq!(config.api_port, 8080);
    assert!(config.api_plain);
    assert_eq!(config.rover, "spirit");
    assert_eq!(config.sol, 1000);
    assert_eq!(config.api_key, Some("k123".to_string()));
    assert_eq!(config.max_concurrency, 2);
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Debug)
    );
    match config.log_format {
        LogFormat::Json => {}
        _ => panic!("Should parse json format"),
    }
}

#[test]
fn test_cli_rejects_non_numeric_sol() {
    let args = ["photo_probe", "--sol", "abc"];
    let result = Config::try_parse_from(args.iter());

    assert!(result.is_err(), "Should fail on a non-numeric sol");
    let error_msg = result.unwrap_err().to_string();
    assert!(
        error_msg.contains("sol") || error_msg.contains("invalid"),
        "Error message should mention the offending option: {}",
        error_msg
    );
}

#[test]
fn test_cli_rejects_unknown_option() {
    let args = ["photo_probe", "--camera", "navcam"];
    let result = Config::try_parse_from(args.iter());

    assert!(result.is_err(), "Should fail on an unknown option");
}

#[test]
fn test_cli_log_level_values() {
    let test_cases = vec![
        ("error", log::LevelFilter::Error),
        ("warn", log::LevelFilter::Warn),
        ("info", log::LevelFilter::Info),
        ("debug", log::LevelFilter::Debug),
        ("trace", log::LevelFilter::Trace),
    ];

    for (arg_value, expected) in test_cases {
        let args = ["photo_probe", "--log-level", arg_value];
        let config = Config::try_parse_from(args.iter())
            .unwrap_or_else(|_| panic!("Should parse log-level={}", arg_value));

        assert_eq!(
            log::LevelFilter::from(config.log_level),
            expected,
            "log-level={} should parse correctly",
            arg_value
        );
    }
}

#[test]
fn test_cli_rejects_invalid_log_level() {
    let args = ["photo_probe", "--log-level", "loud"];
    let result = Config::try_parse_from(args.iter());

    assert!(result.is_err(), "Should fail on an unknown log level");
}
