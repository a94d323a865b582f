use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a reading-plan file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML plan file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the plan
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use readpace::config::load_config;
///
/// let config = load_config(Path::new("plan.toml")).unwrap();
/// println!("Start date: {}", config.plan.start_date);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the plan file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Loads a comma-separated book list from a file
///
/// The file holds catalog search terms separated by commas; whitespace
/// around each term is trimmed and empty entries are dropped.
///
/// # Arguments
///
/// * `path` - Path to the book-list file
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The search terms, in file order
/// * `Err(ConfigError)` - Failed to read the file
pub fn load_book_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect())
}
