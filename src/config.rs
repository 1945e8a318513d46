//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::api::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::app::AppOptions;
use crate::locale::Locale;
use crate::model::DEFAULT_PER_PAGE;

/// Errors found while validating the configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("page id must not be empty")]
    EmptyPageId,

    #[error("--per-page must be at least 1")]
    ZeroPerPage,

    #[error("--timeout-secs must be at least 1")]
    ZeroTimeout,

    #[error("API URL must start with http:// or https:// (got '{0}')")]
    InvalidApiUrl(String),
}

/// Browse a wiki article's revision history
#[derive(Debug, Clone, Parser)]
#[command(name = "article-history", version, about)]
pub struct Config {
    /// Article page identifier (e.g., "scp-173")
    pub page_id: String,

    /// Base URL of the wiki API
    #[arg(long, env = "ARTICLE_HISTORY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Entries per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// UI language (en, ru)
    #[arg(long, env = "ARTICLE_HISTORY_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Write logs to this file (logging is off without it)
    #[arg(long, env = "ARTICLE_HISTORY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g., "info", "article_history=debug")
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Reject values the application cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_id.trim().is_empty() {
            return Err(ConfigError::EmptyPageId);
        }
        if self.per_page == 0 {
            return Err(ConfigError::ZeroPerPage);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(self.api_url.clone()));
        }
        Ok(())
    }

    /// HTTP request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Display options for the history modal
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            per_page: self.per_page,
            locale: self.locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("article-history").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from([
            "article-history",
            "scp-173",
            "--api-url",
            "http://wiki.local",
        ])
        .unwrap();
        assert_eq!(config.page_id, "scp-173");
        assert_eq!(config.per_page, 25);
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "main",
            "--api-url",
            "https://wiki.example",
            "--per-page",
            "50",
            "--locale",
            "ru",
            "--timeout-secs",
            "3",
            "--log-file",
            "/tmp/history.log",
            "--log-level",
            "debug",
        ]);
        assert_eq!(config.api_url, "https://wiki.example");
        assert_eq!(
            config.app_options(),
            AppOptions {
                per_page: 50,
                locale: Locale::Ru
            }
        );
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/history.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_page_id_is_an_error() {
        assert!(Config::try_parse_from(["article-history"]).is_err());
    }

    #[test]
    fn test_unknown_locale_is_an_error() {
        assert!(Config::try_parse_from(["article-history", "main", "--locale", "de"]).is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = parse(&["main", "--api-url", "http://wiki.local"]);

        config.per_page = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPerPage));

        config.per_page = 25;
        config.timeout_secs = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));

        config.timeout_secs = 15;
        config.page_id = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPageId));

        config.page_id = "main".to_string();
        config.api_url = "wiki.local".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidApiUrl("wiki.local".to_string()))
        );
    }
}
