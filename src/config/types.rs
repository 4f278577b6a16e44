//! Configuration types.
//!
//! This module defines the library configuration and the logging enums shared
//! with the command-line interface.

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS};
use crate::user_agent::{generate_user_agent, BrowserProfile};

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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use insta_query::{BrowserProfile, Config};
///
/// let config = Config {
///     language: "fr-FR".to_string(),
///     browser_profile: Some(BrowserProfile::Firefox),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL that usernames are appended to
    pub base_url: String,

    /// Browser language sent as `Accept-Language`
    pub language: String,

    /// Browser family used to generate the User-Agent (random when `None`)
    pub browser_profile: Option<BrowserProfile>,

    /// Explicit User-Agent header value; overrides `browser_profile`
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Returns the User-Agent to send: the explicit override if set, otherwise a
    /// freshly generated string for `browser_profile`.
    pub fn resolve_user_agent(&self) -> String {
        match self.user_agent.as_deref().map(str::trim) {
            Some(ua) if !ua.is_empty() => ua.to_string(),
            _ => generate_user_agent(self.browser_profile),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            browser_profile: None,
            user_agent: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
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
        assert_eq!(config.base_url, "https://www.instagram.com/");
        assert_eq!(config.language, "en-US");
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.browser_profile.is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_resolve_user_agent_prefers_override() {
        let config = Config {
            user_agent: Some("insta_query_test/1.0".to_string()),
            browser_profile: Some(BrowserProfile::Iphone),
            ..Default::default()
        };
        assert_eq!(config.resolve_user_agent(), "insta_query_test/1.0");
    }

    #[test]
    fn test_resolve_user_agent_blank_override_generates() {
        let config = Config {
            user_agent: Some("   ".to_string()),
            browser_profile: Some(BrowserProfile::Firefox),
            ..Default::default()
        };
        let ua = config.resolve_user_agent();
        assert!(ua.contains("Firefox/"));
    }
}
