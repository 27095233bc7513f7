//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables
//! and command line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, csv, json")]
    InvalidFormat(String),

    #[error("Invalid seed: {0}. Must be a non-negative integer")]
    InvalidSeed(String),

    #[error("Invalid precision: {0}. Must be an integer between 0 and 17")]
    InvalidPrecision(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Largest number of decimal places that still changes an `f64` rendering.
pub const MAX_PRECISION: usize = 17;

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How sample points are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Output format
    pub format: OutputFormat,
    /// Default seed for random samplers; `None` uses the process default state
    pub seed: Option<u64>,
    /// Decimal places in table and CSV output
    pub precision: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
            seed: None,
            precision: 6,
        }
    }
}

/// Environment variable names
pub const ENV_LOG_LEVEL: &str = "SAMPLER_LOG_LEVEL";
pub const ENV_FORMAT: &str = "SAMPLER_FORMAT";
pub const ENV_SEED: &str = "SAMPLER_SEED";
pub const ENV_PRECISION: &str = "SAMPLER_PRECISION";

impl SamplerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SamplerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables, read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?,
            );
        }
        if let Some(precision) = lookup(ENV_PRECISION) {
            self.precision = precision
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPrecision(precision.clone()))?;
        }
        self.validate()
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        self.validate()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision.to_string()));
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Precision override
    pub precision: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<SamplerConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<SamplerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => SamplerConfig::from_file(path)?,
        None => SamplerConfig::default(),
    };
    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SamplerConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.seed, None);
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_from_toml() {
        let config = SamplerConfig::from_toml(
            r#"
            log_level = "debug"
            format = "json"
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            SamplerConfig::from_toml("format = \"xml\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            SamplerConfig::from_toml("precision = 40"),
            Err(ConfigError::InvalidPrecision(_))
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let path = std::env::temp_dir().join("sampler-config-does-not-exist.toml");
        assert!(matches!(
            SamplerConfig::from_file(&path),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_apply_env() {
        let mut config = SamplerConfig::default();
        config
            .apply_env(env(&[
                (ENV_LOG_LEVEL, "INFO"),
                (ENV_FORMAT, "csv"),
                (ENV_SEED, "7"),
                (ENV_PRECISION, "3"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_apply_env_invalid() {
        let mut config = SamplerConfig::default();
        assert!(matches!(
            config.apply_env(env(&[(ENV_SEED, "foo")])),
            Err(ConfigError::InvalidSeed(_))
        ));
        assert!(matches!(
            config.apply_env(env(&[(ENV_LOG_LEVEL, "loud")])),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_precedence() {
        let dir = std::env::temp_dir().join(format!("sampler-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sampler.toml");
        std::fs::write(&path, "format = \"json\"\nseed = 1\nprecision = 2\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path.clone()),
            log_level: None,
            format: Some("csv".to_string()),
            precision: None,
        };
        let config = build_config_with_env(&cli, env(&[(ENV_SEED, "5")])).unwrap();

        // CLI beats file, env beats file, file beats defaults.
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.precision, 2);
        assert_eq!(config.log_level, LogLevel::Warn);

        std::fs::remove_file(&path).unwrap();
    }
}
