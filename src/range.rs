use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// Marker written in place of a missing endpoint
const OPEN_ENDPOINT: &str = "..";

/// A possibly incomplete date range (inclusive).
///
/// When both endpoints are present, `from <= to`. A range with only `from`
/// is the pending state between the first and second pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    from: Option<CalendarDate>,
    to:   Option<CalendarDate>,
}

/// Error type for range selection and date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// `from` is after `to`.
    #[error("Invalid date range: from ({from}) is after to ({to})")]
    InvalidRange { from: CalendarDate, to: CalendarDate },

    /// An endpoint falls on a Saturday or Sunday.
    #[error("Endpoint {0} falls on a weekend")]
    WeekendEndpoint(CalendarDate),

    /// Endpoint text is not a real `YYYY-MM-DD` date.
    #[error(transparent)]
    Malformed(#[from] ParseError),

    /// No predefined range carries this label.
    #[error("Unknown predefined range: {0}")]
    UnknownPreset(String),

    /// Date arithmetic left the supported years.
    #[error("Date is outside the supported years")]
    OutOfBounds,
}

impl DateRange {
    /// The range with no endpoints.
    pub const fn empty() -> Self {
        Self { from: None, to: None }
    }

    /// A range with only its first endpoint picked.
    pub const fn partial(from: CalendarDate) -> Self {
        Self {
            from: Some(from),
            to:   None,
        }
    }

    /// Creates a complete range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if from > to.
    pub fn new(from: CalendarDate, to: CalendarDate) -> Result<Self, RangeError> {
        if from > to {
            return Err(RangeError::InvalidRange { from, to });
        }
        Ok(Self {
            from: Some(from),
            to:   Some(to),
        })
    }

    /// Creates a complete range from two picks in either order.
    pub fn ordered(a: CalendarDate, b: CalendarDate) -> Self {
        let (from, to) = if b < a { (b, a) } else { (a, b) };
        Self {
            from: Some(from),
            to:   Some(to),
        }
    }

    pub const fn from(&self) -> Option<CalendarDate> {
        self.from
    }

    pub const fn to(&self) -> Option<CalendarDate> {
        self.to
    }

    /// Both endpoints, when the range is complete
    pub const fn endpoints(&self) -> Option<(CalendarDate, CalendarDate)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    pub const fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub const fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// True if `date` is one of the endpoints
    pub fn is_endpoint(&self, date: CalendarDate) -> bool {
        self.from == Some(date) || self.to == Some(date)
    }

    /// True if the range is complete and `from <= date <= to`
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.endpoints()
            .is_some_and(|(from, to)| from <= date && date <= to)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endpoint = |date: Option<CalendarDate>| date.map_or_else(|| OPEN_ENDPOINT.to_owned(), |d| d.to_string());
        write!(f, "{}{RANGE_SEPARATOR}{}", endpoint(self.from), endpoint(self.to))
    }
}

/// Serialized as the two-element `[from, to]` array, `null` for a missing endpoint.
impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.from, self.to).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <(Option<CalendarDate>, Option<CalendarDate>)>::deserialize(deserializer)? {
            (Some(from), Some(to)) => Self::new(from, to).map_err(serde::de::Error::custom),
            (Some(from), None) => Ok(Self::partial(from)),
            (None, None) => Ok(Self::empty()),
            (None, Some(to)) => Err(serde::de::Error::custom(format!("range ends at {to} without a start"))),
        }
    }
}

/// What the core emits to the view layer on every committing action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display(fmt = "{selected_range}")]
#[serde(rename_all = "camelCase")]
pub struct RangeChange {
    pub selected_range: DateRange,
    pub weekends:       Vec<CalendarDate>,
}

impl RangeChange {
    /// The output of `clear()`: no endpoints, no weekends.
    pub const fn cleared() -> Self {
        Self {
            selected_range: DateRange::empty(),
            weekends:       Vec::new(),
        }
    }

    /// `selectedRange` as ISO strings, `None` for a missing endpoint
    pub fn selected_iso(&self) -> [Option<String>; 2] {
        [
            self.selected_range.from().map(|d| d.to_string()),
            self.selected_range.to().map(|d| d.to_string()),
        ]
    }

    pub fn weekends_iso(&self) -> Vec<String> {
        self.weekends.iter().map(ToString::to_string).collect()
    }
}
