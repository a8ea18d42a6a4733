//! Simulator configuration.
//!
//! Sources, highest priority first: the first command-line argument (days),
//! then environment variables, then defaults.

use core::str::FromStr;

use gilded_rose_observability::{LogFormat, UnknownLogFormat};
use thiserror::Error;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const OUTPUT_VAR: &str = "GILDED_ROSE_OUTPUT";
pub const LOG_VAR: &str = "GILDED_ROSE_LOG";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid day count `{value}` from {source_name}: expected a non-negative integer")]
    InvalidDays { source_name: String, value: String },

    #[error("unknown output format `{0}` (expected `text` or `json`)")]
    UnknownOutput(String),

    #[error(transparent)]
    LogFormat(#[from] UnknownLogFormat),

    #[error("unexpected argument `{0}` (usage: gilded-rose-simulator [DAYS])")]
    UnexpectedArgument(String),
}

/// How daily snapshots are written to stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per day, one per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub days: u32,
    pub output: OutputFormat,
    pub log_format: LogFormat,
    /// Variables that were unset, so their setting fell back to the default.
    pub defaulted: Vec<&'static str>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            output: OutputFormat::default(),
            log_format: LogFormat::default(),
            defaulted: vec![DAYS_VAR, OUTPUT_VAR, LOG_VAR],
        }
    }
}

impl SimulatorConfig {
    /// Build from the process arguments and environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(&args, |key| std::env::var(key).ok())
    }

    /// Build from explicit arguments (program name excluded) and an
    /// environment lookup.
    pub fn from_sources<F>(args: &[String], env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(extra) = args.get(1) {
            return Err(ConfigError::UnexpectedArgument(extra.clone()));
        }

        let mut defaulted = Vec::new();

        let days = match (args.first(), env(DAYS_VAR)) {
            (Some(arg), _) => parse_days(arg, "the command line")?,
            (None, Some(value)) => parse_days(&value, DAYS_VAR)?,
            (None, None) => {
                defaulted.push(DAYS_VAR);
                DEFAULT_DAYS
            }
        };

        let output = match env(OUTPUT_VAR) {
            Some(value) => value.parse::<OutputFormat>()?,
            None => {
                defaulted.push(OUTPUT_VAR);
                OutputFormat::default()
            }
        };

        let log_format = match env(LOG_VAR) {
            Some(value) => value.parse::<LogFormat>()?,
            None => {
                defaulted.push(LOG_VAR);
                LogFormat::default()
            }
        };

        Ok(Self {
            days,
            output,
            log_format,
            defaulted,
        })
    }

    /// Log a warning for every setting that fell back to its default.
    ///
    /// Call after the tracing subscriber is installed.
    pub fn warn_defaults(&self) {
        for var in &self.defaulted {
            let value = match *var {
                DAYS_VAR => self.days.to_string(),
                OUTPUT_VAR => format!("{:?}", self.output).to_lowercase(),
                _ => format!("{:?}", self.log_format).to_lowercase(),
            };
            tracing::warn!(%value, "{var} not set; using default");
        }
    }
}

fn parse_days(value: &str, source_name: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidDays {
            source_name: source_name.to_string(),
            value: value.to_string(),
        })
}
