//! Greedy sequential page allocation
//!
//! One book is read at a time. Each calendar day in the range spends the
//! daily quota against the front book; when a book runs out of pages its
//! completion date is recorded and any surplus quota is applied once to the
//! next book on the same day. The surplus never chains further: a single day
//! completes at most two books, the active one and its successor.

use crate::schedule::calendar::DateRange;
use crate::schedule::queue::BookQueue;
use crate::{CoreResult, ScheduleError};
use chrono::NaiveDate;

/// How a book's allocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// All pages consumed on this date
    Completed(NaiveDate),

    /// The range ended first; this many pages were left unread
    Incomplete { pages_left: u64 },
}

/// Per-book allocation outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOutcome {
    /// The book's display title
    pub title: String,

    /// Completion date or leftover pages
    pub completion: Completion,
}

/// The full schedule: one outcome per queued book, completed books first in
/// completion order, then unfinished books in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleResult {
    pub outcomes: Vec<BookOutcome>,
}

impl ScheduleResult {
    /// Looks up the completion date recorded for a title, if it completed
    pub fn completion_date(&self, title: &str) -> Option<NaiveDate> {
        self.outcomes.iter().find_map(|o| match o.completion {
            Completion::Completed(date) if o.title == title => Some(date),
            _ => None,
        })
    }

    /// Iterates only the completed outcomes, in completion order
    pub fn completed(&self) -> impl Iterator<Item = (&str, NaiveDate)> {
        self.outcomes.iter().filter_map(|o| match o.completion {
            Completion::Completed(date) => Some((o.title.as_str(), date)),
            Completion::Incomplete { .. } => None,
        })
    }

    /// Whether every queued book completed within the range
    pub fn all_completed(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.completion, Completion::Completed(_)))
    }
}

/// Computes the daily page quota: `ceil(total_pages / viable_days)`
///
/// Ceiling rounding keeps the schedule from being under-provisioned: reading
/// the quota every viable day always covers the total.
///
/// # Returns
///
/// * `Ok(u64)` - The per-day quota
/// * `Err(ScheduleError::NoViableDays)` - The range has no viable days, so
///   no finite quota exists
pub fn daily_quota(total_pages: u64, viable_days: usize) -> CoreResult<u64> {
    if viable_days == 0 {
        return Err(ScheduleError::NoViableDays);
    }
    let days = viable_days as u64;
    Ok(total_pages.div_ceil(days))
}

/// Computes a completion date for each book in the queue
///
/// # Algorithm
///
/// For each calendar day in the range (every day, not just viable ones; the
/// ignored weekdays have already shrunk the quota's denominator):
///
/// 1. Subtract `quota` from the front book's remaining pages.
/// 2. If it drops to zero or below, record the day as that book's completion
///    date, drop it from the queue, and add the (non-positive) overflow to
///    the next book's remaining pages. If that carryover already exhausts
///    the next book, it completes on the same day too; its own surplus is
///    not carried any further.
/// 3. Stop when the queue or the range is exhausted.
///
/// Books still holding pages when the range ends are reported as
/// [`Completion::Incomplete`] with their leftover page count.
///
/// The queue is read, never mutated; remaining-page bookkeeping lives in an
/// accumulator owned by this function, so repeated calls over equal inputs
/// yield equal results.
pub fn compute_schedule(
    queue: &BookQueue,
    range: &DateRange,
    quota: u64,
) -> CoreResult<ScheduleResult> {
    if queue.is_empty() {
        return Err(ScheduleError::EmptyQueue);
    }

    // Owned accumulator: (title, signed remaining pages), front = active book.
    let mut remaining: std::collections::VecDeque<(String, i64)> = queue
        .iter()
        .map(|b| (b.title.clone(), i64::from(b.pages)))
        .collect();

    let mut outcomes = Vec::with_capacity(queue.len());
    let quota = quota as i64;

    for day in range.days() {
        let Some(front) = remaining.front_mut() else {
            break;
        };
        front.1 -= quota;

        if front.1 > 0 {
            continue;
        }

        // Active book finished today; surplus quota moves one book forward.
        let (title, overflow) = remaining.pop_front().unwrap_or_default();
        tracing::debug!(%title, %day, "book completed");
        outcomes.push(BookOutcome {
            title,
            completion: Completion::Completed(day),
        });

        let Some(next) = remaining.front_mut() else {
            break;
        };
        next.1 += overflow;

        if next.1 <= 0 {
            // Single-hop carryover: the successor completes today as well,
            // but its own surplus does not propagate.
            let (title, _) = remaining.pop_front().unwrap_or_default();
            tracing::debug!(%title, %day, "book completed via carryover");
            outcomes.push(BookOutcome {
                title,
                completion: Completion::Completed(day),
            });
        }
    }

    // Whatever is left ran out of calendar, not pages.
    for (title, pages_left) in remaining {
        tracing::debug!(%title, pages_left, "book not finished within range");
        outcomes.push(BookOutcome {
            title,
            completion: Completion::Incomplete {
                pages_left: pages_left.max(0) as u64,
            },
        });
    }

    Ok(ScheduleResult { outcomes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::queue::Book;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end, HashSet::new()).unwrap()
    }

    #[test]
    fn test_daily_quota_rounds_up() {
        assert_eq!(daily_quota(100, 3).unwrap(), 34);
        assert_eq!(daily_quota(100, 4).unwrap(), 25);
        assert_eq!(daily_quota(1, 7).unwrap(), 1);
        assert_eq!(daily_quota(0, 7).unwrap(), 0);
    }

    #[test]
    fn test_daily_quota_never_under_provisions() {
        for total in [1u64, 7, 99, 100, 365, 1000] {
            for days in [1usize, 2, 3, 7, 30, 365] {
                let quota = daily_quota(total, days).unwrap();
                assert!(
                    quota * days as u64 >= total,
                    "quota {} * {} days < {} pages",
                    quota,
                    days,
                    total
                );
            }
        }
    }

    #[test]
    fn test_daily_quota_zero_days_is_an_error() {
        assert!(matches!(
            daily_quota(100, 0),
            Err(ScheduleError::NoViableDays)
        ));
    }

    #[test]
    fn test_single_book_completes_on_fourth_day() {
        let queue: BookQueue = [Book::new("Solaris", 100)].into_iter().collect();
        let range = range(date(2026, 9, 1), date(2026, 9, 4));
        let result = compute_schedule(&queue, &range, 25).unwrap();
        assert_eq!(result.completion_date("Solaris"), Some(date(2026, 9, 4)));
    }

    #[test]
    fn test_carryover_completes_two_books_on_one_day() {
        let queue: BookQueue = [Book::new("A", 50), Book::new("B", 50)].into_iter().collect();
        let range = range(date(2026, 9, 1), date(2026, 9, 30));
        let result = compute_schedule(&queue, &range, 100).unwrap();
        assert_eq!(result.completion_date("A"), Some(date(2026, 9, 1)));
        assert_eq!(result.completion_date("B"), Some(date(2026, 9, 1)));
    }

    #[test]
    fn test_carryover_does_not_chain() {
        // Quota 100 could cover all three 30-page books, but surplus only
        // moves one book forward per day: C waits for day 2.
        let queue: BookQueue = [
            Book::new("A", 30),
            Book::new("B", 30),
            Book::new("C", 30),
        ]
        .into_iter()
        .collect();
        let range = range(date(2026, 9, 1), date(2026, 9, 30));
        let result = compute_schedule(&queue, &range, 100).unwrap();
        assert_eq!(result.completion_date("A"), Some(date(2026, 9, 1)));
        assert_eq!(result.completion_date("B"), Some(date(2026, 9, 1)));
        assert_eq!(result.completion_date("C"), Some(date(2026, 9, 2)));
    }

    #[test]
    fn test_single_day_range_boundary() {
        let range1 = range(date(2026, 9, 1), date(2026, 9, 1));

        let fits: BookQueue = [Book::new("Short", 25)].into_iter().collect();
        let result = compute_schedule(&fits, &range1, 25).unwrap();
        assert_eq!(result.completion_date("Short"), Some(date(2026, 9, 1)));

        let too_long: BookQueue = [Book::new("Long", 26)].into_iter().collect();
        let result = compute_schedule(&too_long, &range1, 25).unwrap();
        assert_eq!(result.completion_date("Long"), None);
        assert_eq!(
            result.outcomes[0].completion,
            Completion::Incomplete { pages_left: 1 }
        );
    }

    #[test]
    fn test_unfinished_books_are_reported_incomplete() {
        let queue: BookQueue = [Book::new("A", 10), Book::new("B", 500)].into_iter().collect();
        let range = range(date(2026, 9, 1), date(2026, 9, 3));
        let result = compute_schedule(&queue, &range, 10).unwrap();

        assert_eq!(result.completion_date("A"), Some(date(2026, 9, 1)));
        assert!(!result.all_completed());
        // A's completion consumed day 1 with no surplus; B absorbs the quota
        // on days 2 and 3 only.
        assert_eq!(
            result.outcomes[1],
            BookOutcome {
                title: "B".to_string(),
                completion: Completion::Incomplete { pages_left: 480 },
            }
        );
    }

    #[test]
    fn test_empty_queue_is_an_error() {
        let queue = BookQueue::new();
        let range = range(date(2026, 9, 1), date(2026, 9, 3));
        assert!(matches!(
            compute_schedule(&queue, &range, 10),
            Err(ScheduleError::EmptyQueue)
        ));
    }

    #[test]
    fn test_idempotent_across_identical_queues() {
        let build = || -> BookQueue {
            [Book::new("A", 90), Book::new("B", 45), Book::new("C", 200)]
                .into_iter()
                .collect()
        };
        let range = range(date(2026, 9, 1), date(2026, 9, 20));
        let first = compute_schedule(&build(), &range, 30).unwrap();
        let second = compute_schedule(&build(), &range, 30).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_page_book_completes_immediately() {
        let queue: BookQueue = [Book::new("Pamphlet", 0), Book::new("Novel", 40)]
            .into_iter()
            .collect();
        let range = range(date(2026, 9, 1), date(2026, 9, 30));
        let result = compute_schedule(&queue, &range, 20).unwrap();
        assert_eq!(result.completion_date("Pamphlet"), Some(date(2026, 9, 1)));
        // The full day-1 quota carries into the novel: 40 - 20 = 20 left,
        // finished by day 2's quota.
        assert_eq!(result.completion_date("Novel"), Some(date(2026, 9, 2)));
    }
}
