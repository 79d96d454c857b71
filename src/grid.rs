//! The six-row month grid shown by the calendar.
//!
//! The grid is derived fresh for every render from the displayed month and the
//! current range; it holds no state of its own.

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, DAYS_PER_WEEK, DateRange, Days, GRID_CELLS, Month, RangeError, Year, is_weekend,
};

/// Column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently displayed. The year is unbounded so navigation can
/// never fail; only building a grid checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthView {
    pub year:  i32,
    pub month: Month,
}

impl MonthView {
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month `date` falls in
    pub fn containing(date: CalendarDate) -> Self {
        Self::new(i32::from(date.year()), date.month_typed())
    }

    #[must_use]
    pub fn shift_month(self, offset: i32) -> Self {
        let (year, month) = shift_month(self.year, self.month, offset);
        Self::new(year, month)
    }

    #[must_use]
    pub const fn shift_year(self, offset: i32) -> Self {
        Self::new(shift_year(self.year, offset), self.month)
    }

    /// Header text, e.g. "March 2024"
    pub fn title(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }
}

/// One day cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date:               CalendarDate,
    pub is_weekend:         bool,
    /// The cell is `from` or `to`
    pub is_selected:        bool,
    /// Strictly inside a complete range; endpoints report `is_selected` instead
    pub is_in_range:        bool,
    /// False for the padding days of the previous and next month
    pub in_displayed_month: bool,
}

impl CalendarCell {
    fn new(date: CalendarDate, view: MonthView, range: &DateRange) -> Self {
        let is_selected = range.is_endpoint(date);
        Self {
            date,
            is_weekend: is_weekend(date),
            is_selected,
            is_in_range: !is_selected && range.contains(date),
            in_displayed_month: i32::from(date.year()) == view.year && date.month_typed() == view.month,
        }
    }

    /// Weekend cells can never be picked, whichever month they belong to.
    pub const fn is_selectable(&self) -> bool {
        !self.is_weekend
    }
}

/// The 42 cells for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    view:  MonthView,
    cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub const fn view(&self) -> MonthView {
        self.view
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Six weeks of seven cells, Sunday first
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn title(&self) -> String {
        self.view.title()
    }
}

/// Builds the grid for `view`, flagging cells against `range`.
///
/// The first cell is the Sunday on or before the 1st; padding runs back into
/// the previous month and forward into the next until 42 cells are filled.
///
/// # Errors
/// Returns `RangeError::OutOfBounds` if any cell would fall outside the
/// supported years.
pub fn build_grid(view: MonthView, range: &DateRange) -> Result<CalendarGrid, RangeError> {
    let year = Year::try_from(view.year).map_err(|_| RangeError::OutOfBounds)?;
    let first = CalendarDate::first_of_month(year, view.month).map_err(|_| RangeError::OutOfBounds)?;
    let start = first
        .checked_add_days(-i64::from(first.days_from_sunday()))
        .ok_or(RangeError::OutOfBounds)?;
    let end = start
        .checked_add_days(GRID_CELLS as i64 - 1)
        .ok_or(RangeError::OutOfBounds)?;

    let cells = Days::new(start, end)
        .map(|date| CalendarCell::new(date, view, range))
        .collect();
    Ok(CalendarGrid { view, cells })
}

/// Moves `offset` months from (`year`, `month`), wrapping across years.
pub fn shift_month(year: i32, month: Month, offset: i32) -> (i32, Month) {
    month.shifted(year, offset)
}

pub const fn shift_year(year: i32, offset: i32) -> i32 {
    year.saturating_add(offset)
}
