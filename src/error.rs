//! Error types for the tabecrawl crawler
//!
//! This module defines custom error types used throughout the application.

use thiserror::Error;

/// Errors that can occur during HTTP fetching operations
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("request timed out")]
    Timeout,

    /// Server responded with a non-success status
    #[error("server returned status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// HTTP status code carried by this error, if a response was received.
    ///
    /// Transport-level failures (connection reset, timeout) have no status.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// General crawler errors
#[derive(Error, Debug)]
pub enum CrawlError {
    /// Fetch error
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
