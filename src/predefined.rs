//! Predefined ranges ("Previous Week", "Next Month", ...) relative to an
//! injected `today`.
//!
//! Every generator is a pure function of `today`. Weeks run Sunday to
//! Saturday for the day-of-week offset (`0 = Sunday`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{CalendarDate, Month, RangeError, Year, prelude::*};

/// The kinds of predefined range, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Preset {
    #[display(fmt = "Previous Year")]
    PreviousYear,
    #[display(fmt = "Previous Month")]
    PreviousMonth,
    #[display(fmt = "Previous Week")]
    PreviousWeek,
    #[display(fmt = "Yesterday")]
    Yesterday,
    #[display(fmt = "Today")]
    Today,
    #[display(fmt = "Tomorrow")]
    Tomorrow,
    #[display(fmt = "Next Week")]
    NextWeek,
    #[display(fmt = "Next Month")]
    NextMonth,
    #[display(fmt = "Next Year")]
    NextYear,
}

impl Preset {
    pub const ALL: [Self; 9] = [
        Self::PreviousYear,
        Self::PreviousMonth,
        Self::PreviousWeek,
        Self::Yesterday,
        Self::Today,
        Self::Tomorrow,
        Self::NextWeek,
        Self::NextMonth,
        Self::NextYear,
    ];

    /// The fixed button label
    pub fn label(self) -> String {
        self.to_string()
    }

    /// Computes this preset's `(from, to)` relative to `today`.
    ///
    /// # Errors
    /// Returns `RangeError::OutOfBounds` if the range leaves the supported years.
    pub fn range(self, now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
        match self {
            Self::PreviousYear => previous_year(now),
            Self::PreviousMonth => previous_month(now),
            Self::PreviousWeek => previous_week(now),
            Self::Yesterday => yesterday(now),
            Self::Today => today(now),
            Self::Tomorrow => tomorrow(now),
            Self::NextWeek => next_week(now),
            Self::NextMonth => next_month(now),
            Self::NextYear => next_year(now),
        }
    }
}

impl FromStr for Preset {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.label() == s)
            .ok_or_else(|| RangeError::UnknownPreset(s.to_owned()))
    }
}

/// A labelled `(from, to)` pair offered to the user as a one-click range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedRange {
    pub label: String,
    pub from:  CalendarDate,
    pub to:    CalendarDate,
}

impl PredefinedRange {
    /// Wraps an externally computed pair. The order of `from` and `to` is
    /// checked only when the range is picked.
    pub fn new(label: impl Into<String>, from: CalendarDate, to: CalendarDate) -> Self {
        Self {
            label: label.into(),
            from,
            to,
        }
    }

    pub const fn range(&self) -> (CalendarDate, CalendarDate) {
        (self.from, self.to)
    }
}

/// The full catalog for `today`, in display order.
///
/// `today` is sampled by the caller once; the catalog is never re-evaluated.
/// A preset that would leave the supported years is left out.
pub fn catalog(today: CalendarDate) -> Vec<PredefinedRange> {
    Preset::ALL
        .into_iter()
        .filter_map(|preset| match preset.range(today) {
            Ok((from, to)) => Some(PredefinedRange::new(preset.label(), from, to)),
            Err(err) => {
                warn!(%preset, %today, %err, "skipping predefined range");
                None
            }
        })
        .collect()
}

fn offset(now: CalendarDate, days: i64) -> Result<CalendarDate, RangeError> {
    now.checked_add_days(days).ok_or(RangeError::OutOfBounds)
}

fn whole_month(year: i32, month: Month) -> Result<(CalendarDate, CalendarDate), RangeError> {
    let year = Year::try_from(year).map_err(|_| RangeError::OutOfBounds)?;
    let first = CalendarDate::first_of_month(year, month).map_err(|_| RangeError::OutOfBounds)?;
    let last = CalendarDate::last_of_month(year, month).map_err(|_| RangeError::OutOfBounds)?;
    Ok((first, last))
}

fn whole_year(now: CalendarDate, years: i32) -> Result<(CalendarDate, CalendarDate), RangeError> {
    let year = Year::new(now.year())
        .ok()
        .and_then(|year| year.offset(years))
        .ok_or(RangeError::OutOfBounds)?;
    let (first, _) = whole_month(i32::from(year.get()), Month::JANUARY)?;
    let (_, last) = whole_month(i32::from(year.get()), Month::DECEMBER)?;
    Ok((first, last))
}

fn adjacent_month(now: CalendarDate, months: i32) -> Result<(CalendarDate, CalendarDate), RangeError> {
    let (year, month) = now.month_typed().shifted(i32::from(now.year()), months);
    whole_month(year, month)
}

/// January 1 through December 31 of last year
pub fn previous_year(now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
    whole_year(now, -1)
}

/// First through last day of the previous month
pub fn previous_month(now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
    adjacent_month(now, -1)
}

/// `now - dow - 6` through `now - dow`
pub fn previous_week(now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
    let dow = i64::from(now.days_from_sunday());
    Ok((offset(now, -dow - 6)?, offset(now, -dow)?))
}

pub fn yesterday(now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
    let day = offset(now, -1)?;
    Ok((day, day))
}

pub fn today(now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
    Ok((now, now))
}

pub fn tomorrow(now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
    let day = offset(now, 1)?;
    Ok((day, day))
}

/// `now + (7 - dow) + 1` and the six days after it
pub fn next_week(now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
    let dow = i64::from(now.days_from_sunday());
    let start = offset(now, 7 - dow + 1)?;
    Ok((start, offset(start, 6)?))
}

/// First through last day of the next month
pub fn next_month(now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
    adjacent_month(now, 1)
}

/// January 1 through December 31 of next year
pub fn next_year(now: CalendarDate) -> Result<(CalendarDate, CalendarDate), RangeError> {
    whole_year(now, 1)
}
