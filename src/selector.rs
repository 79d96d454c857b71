//! The range selection state machine.
//!
//! Calendar clicks, predefined ranges and typed text all end in the same
//! commit, so every path produces the same `Complete` state and output.

use tracing::{debug, trace};

use crate::{
    CalendarDate, CalendarGrid, DateRange, FieldStatus, MonthView, PickerConfig, PredefinedRange,
    RangeChange, RangeError, TextRangeInput, ValidationReport, build_grid, catalog, is_weekend,
    weekends_in_range,
};

/// Where the selection stands between user actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Empty,
    /// First endpoint picked, waiting for the second
    PartialFrom(CalendarDate),
    /// Committed range; `from <= to`
    Complete { from: CalendarDate, to: CalendarDate },
}

impl SelectionState {
    pub fn range(&self) -> DateRange {
        match *self {
            Self::Empty => DateRange::empty(),
            Self::PartialFrom(from) => DateRange::partial(from),
            Self::Complete { from, to } => DateRange::ordered(from, to),
        }
    }
}

/// One picker session: selection state, displayed month, text fields and
/// the predefined-range catalog computed from the session's `today`.
#[derive(Debug, Clone)]
pub struct RangeSelector {
    today:   CalendarDate,
    state:   SelectionState,
    view:    MonthView,
    text:    TextRangeInput,
    presets: Vec<PredefinedRange>,
}

impl RangeSelector {
    /// Starts a session with the default config. `today` is used as given
    /// for the whole session.
    pub fn new(today: CalendarDate) -> Self {
        Self::with_config(today, &PickerConfig::default())
    }

    pub fn with_config(today: CalendarDate, config: &PickerConfig) -> Self {
        let presets = if config.show_predefined {
            catalog(today)
        } else {
            Vec::new()
        };
        Self {
            today,
            state: SelectionState::Empty,
            view: config.initial_view.unwrap_or_else(|| MonthView::containing(today)),
            text: TextRangeInput::default(),
            presets,
        }
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn state(&self) -> SelectionState {
        self.state
    }

    pub fn range(&self) -> DateRange {
        self.state.range()
    }

    pub const fn view(&self) -> MonthView {
        self.view
    }

    pub const fn text(&self) -> &TextRangeInput {
        &self.text
    }

    /// The catalog for the view's buttons, in display order
    pub fn presets(&self) -> &[PredefinedRange] {
        &self.presets
    }

    /// Handles a calendar click.
    ///
    /// Weekend days are ignored in every state. The second weekday click
    /// commits the range, in whichever order the two days were picked.
    pub fn pick_date(&mut self, date: CalendarDate) -> Option<RangeChange> {
        if is_weekend(date) {
            debug!(%date, state = ?self.state, "ignoring weekend pick");
            return None;
        }

        match self.state {
            SelectionState::Empty | SelectionState::Complete { .. } => {
                trace!(%date, "starting new selection");
                self.state = SelectionState::PartialFrom(date);
                self.text = TextRangeInput::from_range(&self.state.range());
                None
            }
            SelectionState::PartialFrom(from) => {
                let (from, to) = if date < from { (date, from) } else { (from, date) };
                self.commit(from, to).ok()
            }
        }
    }

    /// Applies a predefined range as-is: weekend endpoints are allowed. The
    /// displayed month jumps to the month containing `to`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `from > to`; the selection is
    /// left unchanged.
    pub fn pick_predefined(&mut self, preset: &PredefinedRange) -> Result<RangeChange, RangeError> {
        let (from, to) = preset.range();
        let change = self.commit(from, to).inspect_err(|err| {
            debug!(label = %preset.label, %err, "rejecting predefined range");
        })?;
        self.view = MonthView::containing(to);
        Ok(change)
    }

    /// Picks the catalog entry with this label.
    ///
    /// # Errors
    /// Returns `RangeError::UnknownPreset` if the session has no such entry.
    pub fn pick_preset(&mut self, label: &str) -> Result<RangeChange, RangeError> {
        let preset = self
            .presets
            .iter()
            .find(|preset| preset.label == label)
            .cloned()
            .ok_or_else(|| RangeError::UnknownPreset(label.to_owned()))?;
        self.pick_predefined(&preset)
    }

    /// Drops both endpoints and empties the text fields.
    pub fn clear(&mut self) -> RangeChange {
        trace!("clearing selection");
        self.state = SelectionState::Empty;
        self.text = TextRangeInput::default();
        RangeChange::cleared()
    }

    pub fn navigate_month(&mut self, offset: i32) {
        self.view = self.view.shift_month(offset);
    }

    pub fn navigate_year(&mut self, offset: i32) {
        self.view = self.view.shift_year(offset);
    }

    /// Replaces the `from` text and commits if both fields now form a valid
    /// range. A typed start replaces a clicked one.
    pub fn set_from_text(&mut self, text: &str) -> Option<RangeChange> {
        text.clone_into(&mut self.text.from);
        self.commit_text()
    }

    /// Replaces the `to` text and commits if both fields now form a valid range.
    pub fn set_to_text(&mut self, text: &str) -> Option<RangeChange> {
        text.clone_into(&mut self.text.to);
        self.commit_text()
    }

    /// Current validation of the text fields, for the view's error messages
    pub fn validation(&self) -> ValidationReport {
        self.text.validate()
    }

    /// The grid for the displayed month and current selection
    ///
    /// # Errors
    /// Returns `RangeError::OutOfBounds` when the displayed month is at the
    /// edge of the supported years.
    pub fn grid(&self) -> Result<CalendarGrid, RangeError> {
        build_grid(self.view, &self.range())
    }

    /// Commits a valid typed range. Otherwise the pending state follows the
    /// text: a valid `from` with an empty `to` is the pending start, and
    /// outside `Complete` an unusable `from` drops the pending start.
    fn commit_text(&mut self) -> Option<RangeChange> {
        let report = self.text.validate();
        if let Some((from, to)) = report.range() {
            return self.commit(from, to).ok();
        }

        let pending = match (report.from.date(), &report.to) {
            (Some(from), FieldStatus::Empty) => Some(SelectionState::PartialFrom(from)),
            _ if matches!(self.state, SelectionState::Complete { .. }) => None,
            (from, _) => Some(from.map_or(SelectionState::Empty, SelectionState::PartialFrom)),
        };
        if let Some(state) = pending {
            self.state = state;
        }
        trace!(state = ?self.state, errors = ?report.errors(), "text range not committed");
        None
    }

    /// The single place a range becomes `Complete`.
    fn commit(&mut self, from: CalendarDate, to: CalendarDate) -> Result<RangeChange, RangeError> {
        let weekends = weekends_in_range(from, to)?;
        let selected_range = DateRange::new(from, to)?;
        self.state = SelectionState::Complete { from, to };
        self.text = TextRangeInput::from_range(&selected_range);
        trace!(%selected_range, weekends = weekends.len(), "committed range");
        Ok(RangeChange {
            selected_range,
            weekends,
        })
    }
}
