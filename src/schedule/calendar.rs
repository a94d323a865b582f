//! Calendar range and viable-day counting
//!
//! A reading plan spans an inclusive date range; weekdays the reader wants
//! off are excluded from the viable-day count that sizes the daily quota.
//! Weekday names are lowercase English (`monday`..`sunday`), matching the
//! names accepted from config and prompts.

use crate::ScheduleError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// An inclusive calendar date range with a set of ignored weekdays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the plan (inclusive)
    pub start: NaiveDate,

    /// Last day of the plan (inclusive)
    pub end: NaiveDate,

    /// Weekdays that are not read on
    pub ignored: HashSet<Weekday>,
}

impl DateRange {
    /// Creates a date range, rejecting ranges whose end precedes their start
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        ignored: HashSet<Weekday>,
    ) -> Result<Self, ScheduleError> {
        if end < start {
            return Err(ScheduleError::InvalidDateRange { start, end });
        }
        Ok(Self {
            start,
            end,
            ignored,
        })
    }

    /// Iterates every calendar day in the range, inclusive of both ends
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Counts the days in the range whose weekday is not ignored
    ///
    /// Every calendar day from start to end is visited; a day counts unless
    /// its weekday is in the ignored set. An empty ignored set counts every
    /// day in the range.
    pub fn count_viable_days(&self) -> usize {
        self.days()
            .filter(|d| !self.ignored.contains(&d.weekday()))
            .count()
    }
}

/// Maps a weekday to its lowercase English name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Parses a lowercase English weekday name
///
/// Input is trimmed and lowercased before matching, so `" Saturday "` is
/// accepted. Returns `None` for anything that is not a weekday name.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Formats a date in long form: weekday, month name, day, year
///
/// e.g. `Tuesday, September 1, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let result = DateRange::new(date(2026, 9, 2), date(2026, 9, 1), HashSet::new());
        assert!(matches!(
            result,
            Err(ScheduleError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_single_day_range_has_one_day() {
        let range = DateRange::new(date(2026, 9, 1), date(2026, 9, 1), HashSet::new()).unwrap();
        assert_eq!(range.days().count(), 1);
        assert_eq!(range.count_viable_days(), 1);
    }

    #[test]
    fn test_seven_day_range_no_exclusions_counts_seven() {
        // Mon 2026-09-07 through Sun 2026-09-13
        let range = DateRange::new(date(2026, 9, 7), date(2026, 9, 13), HashSet::new()).unwrap();
        assert_eq!(range.count_viable_days(), 7);
    }

    #[test]
    fn test_weekend_exclusion_over_one_full_week() {
        // Mon 2026-09-07 through Sun 2026-09-13 contains exactly one
        // Saturday (the 12th) and one Sunday (the 13th).
        let ignored: HashSet<_> = [Weekday::Sat, Weekday::Sun].into_iter().collect();
        let range = DateRange::new(date(2026, 9, 7), date(2026, 9, 13), ignored).unwrap();
        assert_eq!(range.count_viable_days(), 5);
    }

    #[test]
    fn test_all_days_ignored_counts_zero() {
        // Sat 2026-09-12 through Sun 2026-09-13, both excluded
        let ignored: HashSet<_> = [Weekday::Sat, Weekday::Sun].into_iter().collect();
        let range = DateRange::new(date(2026, 9, 12), date(2026, 9, 13), ignored).unwrap();
        assert_eq!(range.count_viable_days(), 0);
    }

    #[test]
    fn test_weekday_name_round_trip() {
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(parse_weekday(weekday_name(weekday)), Some(weekday));
        }
    }

    #[test]
    fn test_parse_weekday_trims_and_lowercases() {
        assert_eq!(parse_weekday("  Saturday "), Some(Weekday::Sat));
    }

    #[test]
    fn test_parse_weekday_rejects_unknown() {
        assert_eq!(parse_weekday("caturday"), None);
        assert_eq!(parse_weekday(""), None);
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(
            format_long_date(date(2026, 9, 1)),
            "Tuesday, September 1, 2026"
        );
    }
}
