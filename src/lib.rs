//! Date range selection core.
//!
//! A user picks two weekday endpoints from a calendar grid, or one of the
//! predefined ranges ("Previous Week", "Next Month", ...), and the crate
//! reports the committed range together with every weekend day inside it.
//!
//! ```ignore
//! use weekday_range::{CalendarDate, RangeSelector};
//!
//! let today: CalendarDate = "2024-03-13".parse()?;
//! let mut selector = RangeSelector::new(today);
//! selector.pick_date("2024-03-15".parse()?);
//! let change = selector.pick_date("2024-03-11".parse()?).unwrap();
//! assert_eq!(change.to_string(), "2024-03-11/2024-03-15");
//! ```

mod config;
mod consts;
mod date_math;
mod grid;
mod predefined;
mod prelude;
mod range;
mod selector;
mod types;
mod validation;

pub use config::PickerConfig;
pub use consts::*;
pub use date_math::{Days, format_iso_date, is_weekend, normalize, weekends_in_range};
pub use grid::{CalendarCell, CalendarGrid, MonthView, WEEKDAY_LABELS, build_grid, shift_month, shift_year};
pub use predefined::{
    PredefinedRange, Preset, catalog, next_month, next_week, next_year, previous_month, previous_week, previous_year,
    today, tomorrow, yesterday,
};
pub use range::{DateRange, RangeChange, RangeError};
pub use selector::{RangeSelector, SelectionState};
pub use types::{Month, Year};
pub use validation::{FieldStatus, TextRangeInput, ValidationReport, validate};

use crate::prelude::*;
use chrono::{Datelike, Days as DayCount, Local, Months, NaiveDate, Weekday};
use std::str::FromStr;

/// A calendar day with no time-of-day or timezone component.
///
/// Always lies within years `MIN_YEAR..=MAX_YEAR`, so every value has a
/// four-digit `YYYY-MM-DD` form. Ordering is by calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Year {_0} is outside the supported range")]
    OutOfRange(i32),
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from its components, validating each one.
    ///
    /// # Errors
    /// Returns the `ParseError` naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?.get();
        let month = Month::new(month)?.get();
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(ParseError::InvalidDay { year, month, day })
    }

    /// First day of `month` in `year`
    pub fn first_of_month(year: Year, month: Month) -> Result<Self, ParseError> {
        Self::new(year.get(), month.get(), MIN_DAY)
    }

    /// Last day of `month` in `year`: the day before the first of the next month
    pub fn last_of_month(year: Year, month: Month) -> Result<Self, ParseError> {
        let first = Self::first_of_month(year, month)?;
        // chrono reaches past MAX_YEAR, so December 9999 still has a successor month
        first
            .0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(ParseError::OutOfRange(i32::from(year.get())))
            .and_then(Self::try_from)
    }

    /// Samples the local wall clock. Call once per session and pass the
    /// result down; nothing else in the crate reads the clock.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` if the clock reports a year past `MAX_YEAR`.
    pub fn today() -> Result<Self, ParseError> {
        Self::try_from(Local::now().date_naive())
    }

    /// Returns the year component
    pub fn year(&self) -> u16 {
        // in MIN_YEAR..=MAX_YEAR by construction
        self.0.year() as u16
    }

    /// Returns the month component (1..=12)
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day-of-month component
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    pub fn month_typed(&self) -> Month {
        Month::from_calendar(self.month())
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Days since the most recent Sunday (0 = Sunday, 6 = Saturday)
    pub fn days_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns the date `days` away, or `None` outside the supported years.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let count = DayCount::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(count)
        } else {
            self.0.checked_sub_days(count)
        }?;
        Self::try_from(shifted).ok()
    }

    /// The following day
    pub fn succ(self) -> Option<Self> {
        self.checked_add_days(1)
    }

    /// The preceding day
    pub fn pred(self) -> Option<Self> {
        self.checked_add_days(-1)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = date.year();
        if year < i32::from(MIN_YEAR) || year > i32::from(MAX_YEAR) {
            return Err(ParseError::OutOfRange(year));
        }
        Ok(Self(date))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses exactly `DDDD-DD-DD`: no whitespace, no signs, no short fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let well_formed = s.len() == ISO_DATE_LEN
            && s.char_indices().all(|(i, c)| match i {
                4 | 7 => c == DATE_SEPARATOR,
                _ => c.is_ascii_digit(),
            });
        if !well_formed {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let field = |range: std::ops::Range<usize>| {
            s[range]
                .parse::<u16>()
                .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
        };
        let year = field(0..4)?;
        let month = u8::try_from(field(5..7)?).map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
        let day = u8::try_from(field(8..10)?).map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
