//! The ordered book queue
//!
//! Books are read strictly one at a time, in insertion order. The queue is
//! built once from resolved metadata and handed to the calculator; it is
//! never mutated during allocation.

use crate::ScheduleError;

/// A single book with resolved metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Display title (from the catalog's top search result)
    pub title: String,

    /// Author name, when the detail page exposed one
    pub author: Option<String>,

    /// Total page count
    pub pages: u32,
}

impl Book {
    /// Creates a book with a title and page count and no author
    pub fn new(title: impl Into<String>, pages: u32) -> Self {
        Self {
            title: title.into(),
            author: None,
            pages,
        }
    }

    /// Sets the author name
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// An insertion-ordered queue of books; the front book is the one
/// currently being read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQueue {
    books: Vec<Book>,
}

impl BookQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a book to the back of the queue
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Number of books in the queue
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the queue holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterates books in reading order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Sums page counts across the whole queue
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - Total pages over all books
    /// * `Err(ScheduleError::EmptyQueue)` - The queue holds no books; a
    ///   total over zero books is undefined
    pub fn total_pages(&self) -> Result<u64, ScheduleError> {
        if self.books.is_empty() {
            return Err(ScheduleError::EmptyQueue);
        }
        Ok(self.books.iter().map(|b| u64::from(b.pages)).sum())
    }
}

impl FromIterator<Book> for BookQueue {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_sums_all_books() {
        let queue: BookQueue = [Book::new("A", 120), Book::new("B", 80), Book::new("C", 0)]
            .into_iter()
            .collect();
        assert_eq!(queue.total_pages().unwrap(), 200);
    }

    #[test]
    fn test_total_pages_empty_queue_is_an_error() {
        let queue = BookQueue::new();
        assert!(matches!(
            queue.total_pages(),
            Err(ScheduleError::EmptyQueue)
        ));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut queue = BookQueue::new();
        queue.push(Book::new("First", 10));
        queue.push(Book::new("Second", 20));
        let titles: Vec<_> = queue.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_with_author() {
        let book = Book::new("Dune", 412).with_author("Frank Herbert");
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
    }
}
