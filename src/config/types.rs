use chrono::NaiveDate;
use serde::Deserialize;

/// Main configuration structure for Readpace
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub plan: PlanConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub books: Vec<BookEntry>,
}

/// The reading plan: date range and skipped weekdays
#[derive(Debug, Clone, Deserialize)]
pub struct PlanConfig {
    /// First reading day (inclusive), `YYYY-MM-DD`
    #[serde(rename = "start-date")]
    pub start_date: NaiveDate,

    /// Last reading day (inclusive), `YYYY-MM-DD`
    #[serde(rename = "end-date")]
    pub end_date: NaiveDate,

    /// Lowercase weekday names to skip; the single entry "none" (or an
    /// empty list) means no days are skipped
    #[serde(rename = "ignore-days", default)]
    pub ignore_days: Vec<String>,
}

/// Catalog site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog site, e.g. "https://www.goodreads.com"
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// User agent string sent with catalog requests
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("readpace/{}", env!("CARGO_PKG_VERSION"))
}

/// A book to schedule
#[derive(Debug, Clone, Deserialize)]
pub struct BookEntry {
    /// Search term sent to the catalog
    pub query: String,

    /// Title override; skips the catalog's top-result title
    #[serde(default)]
    pub title: Option<String>,

    /// Page-count override; with it set, no catalog lookup happens for
    /// this entry
    #[serde(default)]
    pub pages: Option<u32>,
}
