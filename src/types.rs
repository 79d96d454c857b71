use crate::consts::{DECEMBER, JANUARY, MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTH_NAMES};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;

/// Months per year as a signed value, for month arithmetic
const MONTHS_PER_YEAR: i64 = MAX_MONTH as i64;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns the year `offset` years away, or `None` when that leaves the valid range.
    pub fn offset(self, offset: i32) -> Option<Self> {
        let shifted = i32::from(self.get()).checked_add(offset)?;
        if shifted < i32::from(MIN_YEAR) {
            return None;
        }
        u16::try_from(shifted).ok().and_then(|y| Self::new(y).ok())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Year {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map_err(|_| ParseError::OutOfRange(value))
            .and_then(Self::new)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A month of the year, one-indexed (1 = January, 12 = December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Self = Self(JANUARY);
    pub const DECEMBER: Self = Self(DECEMBER);

    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub const fn new(value: u8) -> Result<Self, ParseError> {
        if value == 0 || value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(value))
    }

    /// Wraps a month number already known to be valid, such as one read back
    /// from a `CalendarDate`.
    pub(crate) const fn from_calendar(value: u8) -> Self {
        debug_assert!(value != 0 && value <= MAX_MONTH);
        Self(value)
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// English name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// Moves `offset` months away from (`year`, self), wrapping across year
    /// boundaries in either direction.
    pub fn shifted(self, year: i32, offset: i32) -> (i32, Self) {
        let index = i64::from(year) * MONTHS_PER_YEAR + i64::from(self.0 - 1) + i64::from(offset);
        let new_year = index.div_euclid(MONTHS_PER_YEAR);
        // rem_euclid keeps the index in 0..12
        let new_month = index.rem_euclid(MONTHS_PER_YEAR) as u8 + 1;
        let new_year = i32::try_from(new_year).unwrap_or(if new_year < 0 { i32::MIN } else { i32::MAX });
        (new_year, Self::from_calendar(new_month))
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
