//! Row selection handler.
//!
//! Pure functions that move the selected row in response to navigation
//! actions. The selection always stays inside the rendered rows.

use crate::model::KeyAction;
use crate::state::AppState;

/// Move the selection for a navigation `action`.
///
/// `page_height` is the number of rows visible at once; page moves jump by
/// that many rows (at least one). Non-navigation actions are ignored.
pub fn handle_selection_action(state: &mut AppState, action: KeyAction, page_height: usize) {
    let len = state.body.len();
    if len == 0 {
        state.selected = None;
        return;
    }

    let last = len - 1;
    let current = state.selected.unwrap_or(0).min(last);
    let page = page_height.max(1);

    let next = match action {
        KeyAction::SelectNext => (current + 1).min(last),
        KeyAction::SelectPrev => current.saturating_sub(1),
        KeyAction::PageDown => (current + page).min(last),
        KeyAction::PageUp => current.saturating_sub(page),
        KeyAction::SelectFirst => 0,
        KeyAction::SelectLast => last,
        _ => return,
    };

    state.selected = Some(next);
}
