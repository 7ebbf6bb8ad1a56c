//! Top-level UI state.

use crate::controller::{Control, Controller};
use crate::integration::LoadOutcome;
use crate::render::TableBody;
use crate::state::search_input_handler::SearchLine;
use crate::store::Store;

/// Everything the view draws, apart from the master roster itself.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Rows currently shown.
    pub body: TableBody,
    /// The search line.
    pub search: SearchLine,
    /// Selected row in `body`, if any.
    pub selected: Option<usize>,
    /// Control that produced `body`.
    pub active: Option<Control>,
    /// Help overlay visible.
    pub help_visible: bool,
    /// Why the roster failed to load, shown in place of the rows.
    pub load_error: Option<String>,
    /// Number of payload elements skipped as malformed.
    pub rejected: usize,
    /// Where the roster came from, for the header.
    pub source_name: String,
    /// Number of records in the master roster.
    pub total: usize,
}

impl AppState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// State after the initial load, before the first render.
    pub fn from_load(outcome: &LoadOutcome, source_name: impl Into<String>) -> Self {
        Self {
            load_error: outcome.error.as_ref().map(ToString::to_string),
            rejected: outcome.rejected,
            source_name: source_name.into(),
            total: outcome.store.len(),
            ..Self::default()
        }
    }

    /// Message shown when the table has no rows.
    pub fn empty_message(&self) -> String {
        if let Some(err) = &self.load_error {
            return format!("No records loaded: {err}");
        }
        match self.active {
            Some(Control::Search) if !self.search.query.trim().is_empty() => {
                format!("No students match \"{}\"", self.search.query.trim())
            }
            _ if self.total == 0 => "No records".to_string(),
            _ => "No students to show".to_string(),
        }
    }
}

/// Run `control` against the master roster and show the result.
///
/// The search line's text is the search term. The selection moves to the
/// first row, or clears when there are none.
pub fn apply_control(
    state: &mut AppState,
    controller: &Controller,
    store: &Store,
    control: Control,
) {
    if controller
        .trigger(store, control, &state.search.query, &mut state.body)
        .is_some()
    {
        state.active = Some(control);
        state.total = store.len();
        state.selected = if state.body.is_empty() { None } else { Some(0) };
    }
}
