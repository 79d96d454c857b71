use serde::{Deserialize, Serialize};

use crate::MonthView;

/// Session options for a `RangeSelector`.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PickerConfig {
    /// Offer the predefined-range catalog. Without it `pick_preset` knows no labels.
    pub show_predefined: bool,
    /// Month displayed at startup; defaults to the month containing today.
    pub initial_view:    Option<MonthView>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            show_predefined: true,
            initial_view:    None,
        }
    }
}

impl PickerConfig {
    /// Parses a JSON config document.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed JSON, unknown keys or an
    /// invalid month.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
