use crate::config::types::{BookEntry, CatalogConfig, Config, PlanConfig};
use crate::schedule::parse_weekday;
use crate::ConfigError;
use chrono::Weekday;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_plan(&config.plan)?;
    validate_catalog(&config.catalog)?;
    validate_books(&config.books)?;
    Ok(())
}

/// Validates the reading plan: date ordering and weekday names
fn validate_plan(plan: &PlanConfig) -> Result<(), ConfigError> {
    if plan.end_date < plan.start_date {
        return Err(ConfigError::Validation(format!(
            "end-date {} is before start-date {}",
            plan.end_date, plan.start_date
        )));
    }

    // Resolving checks every name; the resolved set is recomputed later.
    resolve_ignored_weekdays(&plan.ignore_days)?;

    Ok(())
}

/// Validates the catalog configuration
fn validate_catalog(catalog: &CatalogConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&catalog.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            catalog.base_url
        )));
    }

    if catalog.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates book entries
fn validate_books(books: &[BookEntry]) -> Result<(), ConfigError> {
    for entry in books {
        if entry.query.trim().is_empty() {
            return Err(ConfigError::Validation(
                "book query cannot be empty".to_string(),
            ));
        }
    }
    Ok(())
}

/// Resolves the ignored-weekday names into a set of weekdays
///
/// An empty list, or the single sentinel entry "none", resolves to an empty
/// set (no days skipped). Every other entry must be a lowercase English
/// weekday name; matching is case-insensitive and whitespace-tolerant.
///
/// # Returns
///
/// * `Ok(HashSet<Weekday>)` - The weekdays to skip
/// * `Err(ConfigError::InvalidWeekday)` - An entry is not a weekday name
pub fn resolve_ignored_weekdays(names: &[String]) -> Result<HashSet<Weekday>, ConfigError> {
    if names.len() == 1 && names[0].trim().eq_ignore_ascii_case("none") {
        return Ok(HashSet::new());
    }

    names
        .iter()
        .map(|name| {
            parse_weekday(name).ok_or_else(|| ConfigError::InvalidWeekday(name.clone()))
        })
        .collect()
}
