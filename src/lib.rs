//! Readpace: a catalog-backed reading schedule planner
//!
//! This crate looks up book metadata (title, author, page count) on a book
//! catalog site and spreads the total page count over a date range, skipping
//! user-chosen weekdays, to produce a completion date per book.

pub mod catalog;
pub mod config;
pub mod output;
pub mod schedule;

use thiserror::Error;

/// Main error type for Readpace operations
#[derive(Debug, Error)]
pub enum ReadpaceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("No search result found for \"{term}\"")]
    MissingSearchResult { term: String },

    #[error("Catalog returned status {status} for {url}")]
    CatalogStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Unknown weekday name: '{0}' (expected monday..sunday or 'none')")]
    InvalidWeekday(String),
}

/// Errors from the scheduling core
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Book queue is empty: nothing to schedule")]
    EmptyQueue,

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("No viable reading days in range: every day is ignored")]
    NoViableDays,
}

/// Result type alias for Readpace operations
pub type Result<T> = std::result::Result<T, ReadpaceError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for scheduling-core operations
pub type CoreResult<T> = std::result::Result<T, ScheduleError>;

// Re-export commonly used types
pub use config::Config;
pub use schedule::{Book, BookQueue, Completion, ScheduleResult};
