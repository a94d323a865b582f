//! HTML extraction for catalog pages
//!
//! Two page shapes matter: the search results page, where the top
//! `.bookTitle` anchor names the best match and links to its detail page,
//! and the detail page, where `span[itemprop='numberOfPages']` holds text
//! like "412 pages" and `.authorName` holds the author.

use scraper::{Html, Selector};

/// The top hit on a search results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Book title as shown in the result list
    pub title: String,

    /// Link to the detail page, usually relative to the site root
    pub href: String,
}

/// Metadata extracted from a detail page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDetail {
    /// Page count, when the page exposes a parseable one
    pub pages: Option<u32>,

    /// Author name, when present
    pub author: Option<String>,
}

/// Extracts the top search result from a search page
///
/// Returns `None` when the page has no `.bookTitle` anchor with an href,
/// which the caller reports as a missing search result.
pub fn top_search_result(html: &str) -> Option<SearchHit> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a.bookTitle").ok()?;

    let element = document.select(&selector).next()?;
    let title = element.text().collect::<String>().trim().to_string();
    let href = element.value().attr("href")?.to_string();

    if title.is_empty() || href.is_empty() {
        return None;
    }

    Some(SearchHit { title, href })
}

/// Extracts page count and author from a detail page
///
/// Both fields are best-effort: a missing or unparseable page count yields
/// `None` rather than an error, mirroring how sparsely the catalog fills
/// these fields in.
pub fn extract_detail(html: &str) -> BookDetail {
    let document = Html::parse_document(html);

    BookDetail {
        pages: extract_page_count(&document),
        author: extract_author(&document),
    }
}

/// Reads the page count from the `numberOfPages` span
///
/// The span's text looks like "412 pages"; everything before the word
/// "pages" is trimmed and parsed.
fn extract_page_count(document: &Html) -> Option<u32> {
    let selector = Selector::parse("span[itemprop='numberOfPages']").ok()?;

    let text = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>();

    let number = match text.split_once("pages") {
        Some((before, _)) => before.trim().to_string(),
        None => text.trim().to_string(),
    };

    number.parse().ok()
}

/// Reads the author name from the first `.authorName` element
fn extract_author(document: &Html) -> Option<String> {
    let selector = Selector::parse(".authorName").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
