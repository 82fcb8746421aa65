//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    API_KEY_ENV, DEFAULT_API_HOST, DEFAULT_MAX_CONCURRENCY, DEFAULT_ROVER, DEFAULT_SOL,
    DEFAULT_TIMEOUT_SECS, DEMO_API_KEY, HTTPS_PORT, LISTING_PATH_PREFIX,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// This struct is parsed by `clap` from the field attributes, and can equally
/// be constructed programmatically for library use. All options have defaults,
/// so the binary runs with no arguments at all.
///
/// # Examples
///
/// ```no_run
/// use photo_probe::Config;
///
/// let config = Config {
///     rover: "spirit".to_string(),
///     sol: 100,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "photo_probe",
    about = "Finds the largest photo a Mars rover shot on a given sol and prints its URL."
)]
pub struct Config {
    /// Host serving the photo listing
    #[arg(long, default_value = DEFAULT_API_HOST)]
    pub api_host: String,

    /// Port for the photo listing request
    #[arg(long, default_value_t = HTTPS_PORT)]
    pub api_port: u16,

    /// Speak plain TCP to the listing host instead of TLS
    ///
    /// Intended for local mirrors of the API; the real API requires TLS.
    #[arg(long)]
    pub api_plain: bool,

    /// Rover whose photos are listed
    #[arg(long, default_value = DEFAULT_ROVER)]
    pub rover: String,

    /// Martian day (sol) to list photos for
    #[arg(long, default_value_t = DEFAULT_SOL)]
    pub sol: u32,

    /// API key for the listing request
    ///
    /// Falls back to the NASA_API_KEY environment variable (a .env file works),
    /// then to the rate-limited public demo key.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Maximum concurrent image probes (1 probes strictly one at a time)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            api_port: HTTPS_PORT,
            api_plain: false,
            rover: DEFAULT_ROVER.to_string(),
            sol: DEFAULT_SOL,
            api_key: None,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Returns the path-plus-query of the listing request.
    pub fn listing_path(&self) -> String {
        format!(
            "{}/{}/photos?sol={}&api_key={}",
            LISTING_PATH_PREFIX,
            self.rover,
            self.sol,
            self.resolved_api_key()
        )
    }

    /// Returns the API key to send: the CLI flag wins, then the
    /// `NASA_API_KEY` environment variable, then the public demo key.
    pub fn resolved_api_key(&self) -> String {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
            .unwrap_or_else(|| DEMO_API_KEY.to_string())
    }

    /// Returns the per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        // Verify that log levels are ordered correctly (Error < Warn < Info < Debug < Trace)
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_host, "api.nasa.gov");
        assert_eq!(config.api_port, 443);
        assert!(!config.api_plain);
        assert_eq!(config.rover, "curiosity");
        assert_eq!(config.sol, 15);
        assert_eq!(config.api_key, None);
        assert_eq!(config.max_concurrency, 8);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_listing_path_with_explicit_key() {
        let config = Config {
            api_key: Some("k123".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.listing_path(),
            "/mars-photos/api/v1/rovers/curiosity/photos?sol=15&api_key=k123"
        );
    }

    #[test]
    fn test_listing_path_follows_rover_and_sol() {
        let config = Config {
            rover: "spirit".to_string(),
            sol: 1000,
            api_key: Some("k".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.listing_path(),
            "/mars-photos/api/v1/rovers/spirit/photos?sol=1000&api_key=k"
        );
    }

    #[test]
    fn test_resolved_api_key_flag_wins() {
        let config = Config {
            api_key: Some("from-flag".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_api_key(), "from-flag");
    }

    #[test]
    fn test_resolved_api_key_demo_fallback() {
        // No flag and no environment variable leaves the public demo key
        std::env::remove_var(API_KEY_ENV);
        let config = Config::default();
        assert_eq!(config.resolved_api_key(), "DEMO_KEY");
    }

    #[test]
    fn test_timeout_duration() {
        let config = Config {
            timeout_seconds: 3,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
