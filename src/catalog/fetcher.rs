//! HTTP fetcher for the catalog site
//!
//! Builds the HTTP client and drives the two-request lookup: search page
//! first, then the top result's detail page.

use crate::catalog::extract::{extract_detail, top_search_result};
use crate::config::CatalogConfig;
use crate::schedule::Book;
use crate::{ReadpaceError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with the configured user agent
///
/// # Arguments
///
/// * `user_agent` - The user agent string to send
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Client for one catalog site
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client for the configured catalog
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let client = build_http_client(&config.user_agent)?;
        Ok(Self { client, base_url })
    }

    /// Resolves a search term into book metadata
    ///
    /// # Request flow
    ///
    /// 1. GET `<base>/search?q=<term>` and take the top `.bookTitle` hit.
    /// 2. GET the hit's detail page (href joined against the base URL).
    /// 3. Extract page count and author from the detail page.
    ///
    /// A detail page without a parseable page count resolves to a zero-page
    /// book with a warning, matching the catalog's habit of leaving the
    /// field blank; a search page without any hit is an error.
    pub async fn lookup(&self, term: &str) -> Result<Book> {
        tracing::info!(%term, "looking up book metadata");

        let mut search_url = self.base_url.join("/search")?;
        search_url.query_pairs_mut().append_pair("q", term);

        let search_html = self.fetch_page(search_url).await?;
        let hit = top_search_result(&search_html).ok_or_else(|| {
            ReadpaceError::MissingSearchResult {
                term: term.to_string(),
            }
        })?;
        tracing::debug!(title = %hit.title, href = %hit.href, "top search result");

        let detail_url = self.base_url.join(&hit.href)?;
        let detail_html = self.fetch_page(detail_url).await?;
        let detail = extract_detail(&detail_html);

        let pages = match detail.pages {
            Some(pages) => pages,
            None => {
                tracing::warn!(title = %hit.title, "no page count on detail page, using 0");
                0
            }
        };

        let mut book = Book::new(hit.title, pages);
        if let Some(author) = detail.author {
            book = book.with_author(author);
        }
        Ok(book)
    }

    /// Fetches one page, mapping HTTP failures onto crate errors
    async fn fetch_page(&self, url: Url) -> Result<String> {
        let response =
            self.client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| ReadpaceError::Http {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReadpaceError::CatalogStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|source| ReadpaceError::Http {
            url: url.to_string(),
            source,
        })
    }
}
