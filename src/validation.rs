//! Validation of typed `from`/`to` text.
//!
//! Applies the same rules as calendar clicks (real date, weekday endpoints,
//! `from <= to`) so both input paths agree on what a valid range is.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateRange, ParseError, RangeError, is_weekend};

/// The state of one text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    /// Nothing typed yet
    Empty,
    /// Not a real `YYYY-MM-DD` date
    Malformed(ParseError),
    /// A real date on a Saturday or Sunday
    Weekend(CalendarDate),
    Valid(CalendarDate),
}

impl FieldStatus {
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }
        match text.parse::<CalendarDate>() {
            Ok(date) if is_weekend(date) => Self::Weekend(date),
            Ok(date) => Self::Valid(date),
            Err(err) => Self::Malformed(err),
        }
    }

    /// The date, if the field is usable as an endpoint
    pub const fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::Valid(date) => Some(*date),
            _ => None,
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The field-level error, if any. An empty field is not an error.
    pub fn error(&self) -> Option<RangeError> {
        match self {
            Self::Empty | Self::Valid(_) => None,
            Self::Malformed(err) => Some(RangeError::Malformed(err.clone())),
            Self::Weekend(date) => Some(RangeError::WeekendEndpoint(*date)),
        }
    }
}

/// The raw contents of the two text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRangeInput {
    pub from: String,
    pub to:   String,
}

impl TextRangeInput {
    /// Field text mirroring a range: ISO dates, empty for a missing endpoint.
    pub fn from_range(range: &DateRange) -> Self {
        let text = |date: Option<CalendarDate>| date.map(|d| d.to_string()).unwrap_or_default();
        Self {
            from: text(range.from()),
            to:   text(range.to()),
        }
    }

    pub fn validate(&self) -> ValidationReport {
        validate(&self.from, &self.to)
    }
}

/// Per-field statuses plus the cross-field order check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub from:     FieldStatus,
    pub to:       FieldStatus,
    /// Both fields are valid but `to` is earlier than `from`
    pub inverted: bool,
}

impl ValidationReport {
    /// Both fields valid and in order
    pub const fn is_committable(&self) -> bool {
        self.from.is_valid() && self.to.is_valid() && !self.inverted
    }

    /// Exactly one field filled in with a valid date: not an error, just not done.
    pub const fn is_incomplete(&self) -> bool {
        (self.from.is_valid() && self.to.is_empty()) || (self.from.is_empty() && self.to.is_valid())
    }

    /// The range to commit, when committable
    pub fn range(&self) -> Option<(CalendarDate, CalendarDate)> {
        if !self.is_committable() {
            return None;
        }
        self.from.date().zip(self.to.date())
    }

    /// Field errors (`from` first), then the cross-field error.
    pub fn errors(&self) -> Vec<RangeError> {
        let mut errors: Vec<_> = [self.from.error(), self.to.error()].into_iter().flatten().collect();
        if let (true, Some(from), Some(to)) = (self.inverted, self.from.date(), self.to.date()) {
            errors.push(RangeError::InvalidRange { from, to });
        }
        errors
    }
}

/// Validates the two fields independently, then checks their order.
pub fn validate(from: &str, to: &str) -> ValidationReport {
    let from = FieldStatus::of(from);
    let to = FieldStatus::of(to);
    let inverted = matches!((from.date(), to.date()), (Some(f), Some(t)) if t < f);
    ValidationReport { from, to, inverted }
}
