//! Harness configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `PREDICATE_INLAY_`; command-line flags take precedence over both.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "PREDICATE_INLAY_LOG_LEVEL";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that reports on stdout are not drowned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every lexed token and binding decision.
    Trace,
    /// Parsed trees and unresolved predicates.
    Debug,
    /// Per-expression progress.
    Info,
    /// Expressions that failed to compile.
    #[default]
    Warn,
    /// Failures of the harness itself.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for the harness.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable contains an invalid
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };
        Ok(Self { log_level })
    }

    /// Apply optional command-line overrides.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("Info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn defaults_when_variable_missing() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn reads_log_level_from_lookup() {
        let config = CliConfig::from_lookup(|key| {
            (key == LOG_LEVEL_VAR).then(|| "debug".to_string())
        })
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn invalid_variable_is_reported() {
        let result = CliConfig::from_lookup(|_| Some("chatty".to_string()));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CliConfig::default().apply_overrides(Some(LogLevel::Trace));
        assert_eq!(config.log_level, LogLevel::Trace);
        let config = CliConfig::default().apply_overrides(None);
        assert_eq!(config.log_level, LogLevel::Warn);
    }
}
