//! Reading-plan configuration
//!
//! A plan is a TOML file naming the date range, the weekdays to skip, the
//! catalog to query, and the books to read. Loading parses the TOML,
//! validates it, and normalizes the ignored-weekday names.

pub mod parser;
pub mod types;
pub mod validation;

pub use parser::{load_book_list, load_config};
pub use types::{BookEntry, CatalogConfig, Config, PlanConfig};
pub use validation::{resolve_ignored_weekdays, validate};
