//! Report generation for the terminal
//!
//! Derives the plan-wide statistics and prints the three tables.

use crate::output::table::AsciiTable;
use crate::schedule::{
    daily_quota, format_long_date, Book, BookQueue, Completion, DateRange, ScheduleResult,
};
use crate::ScheduleError;

/// Derived summary of a reading plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingStatistics {
    /// Viable reading days left in the range
    pub days_remaining: usize,

    /// Number of books queued
    pub book_count: usize,

    /// Total pages across the queue
    pub total_pages: u64,

    /// Daily page quota
    pub pages_per_day: u64,
}

/// Computes plan statistics from the queue and date range
///
/// # Returns
///
/// * `Ok(ReadingStatistics)` - The derived summary
/// * `Err(ScheduleError::EmptyQueue)` - No books queued
/// * `Err(ScheduleError::NoViableDays)` - Every day in the range is ignored
pub fn compute_statistics(
    queue: &BookQueue,
    range: &DateRange,
) -> Result<ReadingStatistics, ScheduleError> {
    let total_pages = queue.total_pages()?;
    let days_remaining = range.count_viable_days();
    let pages_per_day = daily_quota(total_pages, days_remaining)?;

    Ok(ReadingStatistics {
        days_remaining,
        book_count: queue.len(),
        total_pages,
        pages_per_day,
    })
}

/// Prints the "New Book Added!" table for one resolved book
pub fn print_book_added(book: &Book) {
    let mut table = AsciiTable::new("New Book Added!").set_heading(["Title", "Author", "Pages"]);
    table.add_row([
        book.title.clone(),
        book.author.clone().unwrap_or_else(|| "unknown".to_string()),
        book.pages.to_string(),
    ]);
    println!("\n{}\n", table.render());
}

/// Prints the "Statistics" table
pub fn print_statistics(stats: &ReadingStatistics) {
    let mut table = AsciiTable::new("Statistics").set_heading([
        "Days Remaining",
        "Total Books",
        "Total Pages",
        "Pages/Day",
    ]);
    table.add_row([
        stats.days_remaining.to_string(),
        stats.book_count.to_string(),
        stats.total_pages.to_string(),
        stats.pages_per_day.to_string(),
    ]);
    println!("\n{}\n", table.render());
}

/// Prints the "Goal Dates" table, one row per book
///
/// Completed books show their completion date in long form; books the range
/// could not fit show how many pages were left.
pub fn print_goal_dates(result: &ScheduleResult) {
    let mut table = AsciiTable::new("Goal Dates").set_heading(["Book Title", "Completion Date"]);
    for outcome in &result.outcomes {
        let date_cell = match &outcome.completion {
            Completion::Completed(date) => format_long_date(*date),
            Completion::Incomplete { pages_left } => {
                format!("incomplete ({} pages left)", pages_left)
            }
        };
        table.add_row([outcome.title.clone(), date_cell]);
    }
    println!("\n{}\n", table.render());
}
