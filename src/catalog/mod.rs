//! Catalog scraping boundary
//!
//! This module resolves a search term into book metadata by querying the
//! catalog site: fetch the search page, take the top result, follow its
//! link, and read the page count and author off the detail page. The
//! scheduling core never touches this module; it receives resolved books.

pub mod extract;
pub mod fetcher;

pub use extract::{extract_detail, top_search_result, BookDetail, SearchHit};
pub use fetcher::{build_http_client, CatalogClient};
