//! Terminal presentation
//!
//! Renders the three reports: the per-book "New Book Added!" table, the
//! plan-wide "Statistics" table, and the "Goal Dates" table with one row
//! per book.

pub mod report;
pub mod table;

pub use report::{
    compute_statistics, print_book_added, print_goal_dates, print_statistics, ReadingStatistics,
};
pub use table::AsciiTable;
