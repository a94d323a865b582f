//! Reading schedule core
//!
//! This module owns the scheduling arithmetic: the ordered book queue,
//! viable-day counting over a calendar range, the daily page quota, and the
//! greedy allocation pass that assigns a completion date to each book.

pub mod calculator;
pub mod calendar;
pub mod queue;

pub use calculator::{compute_schedule, daily_quota, BookOutcome, Completion, ScheduleResult};
pub use calendar::{format_long_date, parse_weekday, weekday_name, DateRange};
pub use queue::{Book, BookQueue};
