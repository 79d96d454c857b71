//! Pure calendar-day arithmetic: normalization, weekend tests and day scans.

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{CalendarDate, ParseError, RangeError};

/// Truncates any chrono date or datetime to its calendar day.
///
/// Zoned datetimes keep their own offset, so a `DateTime<Local>` yields the
/// local calendar day rather than the UTC one.
///
/// # Errors
/// Returns `ParseError::OutOfRange` if the year is outside `MIN_YEAR..=MAX_YEAR`.
pub fn normalize<D: Datelike>(date: &D) -> Result<CalendarDate, ParseError> {
    let year = date.year();
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .ok_or(ParseError::OutOfRange(year))
        .and_then(CalendarDate::try_from)
}

/// Saturday or Sunday
pub fn is_weekend(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `YYYY-MM-DD`, zero padded, from the date's own components
pub fn format_iso_date(date: CalendarDate) -> String {
    date.to_string()
}

/// Every calendar day from `from` to `to` inclusive, in order.
///
/// Empty when `from > to`. Cloning restarts from the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Days {
    front: CalendarDate,
    back:  CalendarDate,
    done:  bool,
}

impl Days {
    pub fn new(from: CalendarDate, to: CalendarDate) -> Self {
        Self {
            front: from,
            back:  to,
            done:  from > to,
        }
    }
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.front;
        match current.succ() {
            Some(next) if current < self.back => self.front = next,
            _ => self.done = true,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.done {
            0
        } else {
            let span = self.back.signed_duration_since(*self.front).num_days();
            usize::try_from(span).map_or(0, |span| span + 1)
        };
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.back;
        match current.pred() {
            Some(prev) if current > self.front => self.back = prev,
            _ => self.done = true,
        }
        Some(current)
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

/// All Saturdays and Sundays in `[from, to]`, ascending.
///
/// Walks the range one day at a time, so month ends, year ends and leap
/// days need no special casing.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if `from > to`.
pub fn weekends_in_range(from: CalendarDate, to: CalendarDate) -> Result<Vec<CalendarDate>, RangeError> {
    if from > to {
        return Err(RangeError::InvalidRange { from, to });
    }
    Ok(Days::new(from, to).filter(|&day| is_weekend(day)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone, Utc};

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn dates(items: &[&str]) -> Vec<CalendarDate> {
        items.iter().map(|s| date(s)).collect()
    }

    #[test]
    fn weekends_in_march_2024() {
        let result = weekends_in_range(date("2024-03-01"), date("2024-03-10")).unwrap();
        assert_eq!(
            result,
            dates(&["2024-03-02", "2024-03-03", "2024-03-09", "2024-03-10"])
        );
    }

    #[test]
    fn weekends_none_in_work_week() {
        // Mon Mar 11 through Fri Mar 15, 2024
        let result = weekends_in_range(date("2024-03-11"), date("2024-03-15")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn weekends_single_day() {
        assert_eq!(
            weekends_in_range(date("2024-03-16"), date("2024-03-16")).unwrap(),
            dates(&["2024-03-16"])
        );
        assert!(weekends_in_range(date("2024-03-15"), date("2024-03-15")).unwrap().is_empty());
    }

    #[test]
    fn weekends_across_year_and_leap_day() {
        let result = weekends_in_range(date("2023-12-29"), date("2024-01-02")).unwrap();
        assert_eq!(result, dates(&["2023-12-30", "2023-12-31"]));

        // Feb 29 2020 was a Saturday
        let result = weekends_in_range(date("2020-02-28"), date("2020-03-02")).unwrap();
        assert_eq!(result, dates(&["2020-02-29", "2020-03-01"]));
    }

    #[test]
    fn weekends_inverted_range_fails() {
        let result = weekends_in_range(date("2024-03-10"), date("2024-03-01"));
        assert_eq!(
            result,
            Err(RangeError::InvalidRange {
                from: date("2024-03-10"),
                to:   date("2024-03-01"),
            })
        );
    }

    #[test]
    fn weekends_count_matches_span_and_start_weekday() {
        let start = date("2023-11-01");
        for offset in 0..70_i64 {
            let from = start.checked_add_days(offset).unwrap();
            for span in 0..60_i64 {
                let to = from.checked_add_days(span).unwrap();
                let weekends = weekends_in_range(from, to).unwrap();

                let first = i64::from(from.days_from_sunday());
                let expected = (0..=span)
                    .filter(|i| matches!((first + i) % 7, 0 | 6))
                    .count();
                assert_eq!(weekends.len(), expected, "{from} .. {to}");
                assert!(weekends.windows(2).all(|w| w[0] < w[1]));
                assert!(weekends.iter().all(|&d| is_weekend(d)));
            }
        }
    }

    #[test]
    fn days_iterates_inclusive() {
        let days: Vec<_> = Days::new(date("2024-02-27"), date("2024-03-02")).collect();
        assert_eq!(
            days,
            dates(&["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"])
        );
    }

    #[test]
    fn days_empty_when_inverted() {
        let mut days = Days::new(date("2024-03-02"), date("2024-03-01"));
        assert_eq!(days.len(), 0);
        assert_eq!(days.next(), None);
    }

    #[test]
    fn days_is_restartable_and_double_ended() {
        let days = Days::new(date("2024-12-30"), date("2025-01-02"));
        assert_eq!(days.len(), 4);
        assert_eq!(days.clone().count(), 4);
        assert_eq!(days.clone().count(), 4);

        let reversed: Vec<_> = days.rev().collect();
        assert_eq!(
            reversed,
            dates(&["2025-01-02", "2025-01-01", "2024-12-31", "2024-12-30"])
        );
    }

    #[test]
    fn days_stops_at_last_supported_day() {
        let days: Vec<_> = Days::new(date("9999-12-30"), date("9999-12-31")).collect();
        assert_eq!(days, dates(&["9999-12-30", "9999-12-31"]));

        let days: Vec<_> = Days::new(date("0001-01-01"), date("0001-01-02")).rev().collect();
        assert_eq!(days, dates(&["0001-01-02", "0001-01-01"]));
    }

    #[test]
    fn days_meet_in_the_middle() {
        let mut days = Days::new(date("2024-03-01"), date("2024-03-03"));
        assert_eq!(days.next(), Some(date("2024-03-01")));
        assert_eq!(days.next_back(), Some(date("2024-03-03")));
        assert_eq!(days.next(), Some(date("2024-03-02")));
        assert_eq!(days.next_back(), None);
        assert_eq!(days.next(), None);
    }

    #[test]
    fn normalize_drops_time_of_day() {
        let naive = NaiveDateTime::parse_from_str("2024-03-15 23:59:59", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(normalize(&naive).unwrap(), date("2024-03-15"));

        let zoned = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 1).unwrap();
        assert_eq!(normalize(&zoned).unwrap(), date("2024-03-15"));
    }

    #[test]
    fn normalize_rejects_unsupported_years() {
        let naive = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert_eq!(normalize(&naive), Err(ParseError::OutOfRange(10_000)));
    }

    #[test]
    fn is_weekend_by_day_of_week() {
        assert!(is_weekend(date("2024-03-16"))); // Saturday
        assert!(is_weekend(date("2024-03-17"))); // Sunday
        assert!(!is_weekend(date("2024-03-18"))); // Monday
        assert!(!is_weekend(date("2024-03-15"))); // Friday
    }

    #[test]
    fn format_iso_date_pads() {
        assert_eq!(format_iso_date(date("2024-03-05")), "2024-03-05");
    }
}
