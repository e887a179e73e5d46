//! Configuration management for the tabecrawl crawler
//!
//! This module handles loading and validating configuration from environment
//! variables, files, and command-line arguments.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default page limit for pagination
pub const DEFAULT_MAX_PAGE: u32 = 60;

/// Default listing URL, sort/filter parameters included
const DEFAULT_BASE_URL: &str = "https://tabelog.com/tokyo/A1304/A130401/R5172/rstLst/?Srt=D&SrtT=rt&sort_mode=1";

/// Default browser-like user agent
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client configuration
    pub crawler: CrawlerConfig,

    /// Crawl traversal configuration
    pub crawl: CrawlConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Rate limit (requests per second)
    pub rate_limit: f64,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,

    /// Enable cookie persistence
    pub enable_cookies: bool,
}

/// Crawl traversal configuration, immutable once the run starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Base listing URL, page-independent query parameters included
    pub base_url: String,

    /// First listing page to visit (1-based)
    pub start_page: u32,

    /// Upper bound on listing pages visited
    pub max_page: u32,

    /// Cap per-page extraction and stop after one page
    pub test_mode: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, created if missing
    pub dir: String,

    /// Output file name pattern; `{now}` is replaced with a timestamp
    pub file_pattern: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let rate_limit = std::env::var("TABECRAWL_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(2.0);

        let request_timeout_secs = std::env::var("TABECRAWL_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let connect_timeout_secs = std::env::var("TABECRAWL_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let user_agent = std::env::var("TABECRAWL_USER_AGENT")
            .unwrap_or_else(|_| String::from(DEFAULT_USER_AGENT));

        let base_url = std::env::var("TABECRAWL_BASE_URL")
            .unwrap_or_else(|_| String::from(DEFAULT_BASE_URL));

        let start_page = std::env::var("TABECRAWL_START_PAGE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        let max_page = std::env::var("TABECRAWL_MAX_PAGE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_PAGE);

        let test_mode = std::env::var("TABECRAWL_TEST_MODE")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let output_dir =
            std::env::var("TABECRAWL_OUTPUT_DIR").unwrap_or_else(|_| String::from("output"));

        let file_pattern = std::env::var("TABECRAWL_FILE_PATTERN")
            .unwrap_or_else(|_| String::from("restaurant_data_{now}.csv"));

        let log_level =
            std::env::var("TABECRAWL_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("TABECRAWL_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            crawler: CrawlerConfig {
                rate_limit,
                request_timeout_secs,
                connect_timeout_secs,
                user_agent,
                enable_cookies: true,
            },
            crawl: CrawlConfig {
                base_url,
                start_page,
                max_page,
                test_mode,
            },
            output: OutputConfig {
                dir: output_dir,
                file_pattern,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.crawler.rate_limit <= 0.0 {
            anyhow::bail!("rate_limit must be positive");
        }

        if self.crawl.base_url.is_empty() {
            anyhow::bail!("base_url must not be empty");
        }

        if self.crawl.start_page == 0 {
            anyhow::bail!("start_page must be at least 1");
        }

        if self.crawl.max_page == 0 {
            anyhow::bail!("max_page must be at least 1");
        }

        if self.output.file_pattern.is_empty() {
            anyhow::bail!("file_pattern must not be empty");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.crawler.request_timeout_secs)
    }

    /// Get connect timeout as Duration
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.crawler.connect_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig {
                rate_limit: 2.0,
                request_timeout_secs: 30,
                connect_timeout_secs: 30,
                user_agent: String::from(DEFAULT_USER_AGENT),
                enable_cookies: true,
            },
            crawl: CrawlConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                start_page: 1,
                max_page: DEFAULT_MAX_PAGE,
                test_mode: false,
            },
            output: OutputConfig {
                dir: String::from("output"),
                file_pattern: String::from("restaurant_data_{now}.csv"),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
