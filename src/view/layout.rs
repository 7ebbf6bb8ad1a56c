//! Screen layout rendering.
//!
//! Header line, search line, roster table, and status bar, top to bottom.

use super::constants::{HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::search_input::SearchInput;
use super::styles::TableStyles;
use super::table::RosterTable;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, TableState},
    Frame,
};

/// Screen regions, as computed for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenAreas {
    /// Header line.
    pub header: Rect,
    /// Search line, including its border.
    pub search: Rect,
    /// Roster table, including its border.
    pub table: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split `area` into header, search line, table and status bar.
pub fn split_screen(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        table: chunks[2],
        status: chunks[3],
    }
}

/// Render the whole screen and return the regions it used.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    styles: &TableStyles,
    table_state: &mut TableState,
) -> ScreenAreas {
    let areas = split_screen(frame.area());

    render_header(frame, areas.header, state, styles);
    frame.render_widget(SearchInput::new(&state.search, styles), areas.search);

    let message = state.empty_message();
    let title = match state.active {
        Some(control) => format!(" Students ({}) ", control.label()),
        None => " Students ".to_string(),
    };
    let table = RosterTable::new(&state.body, styles, &message)
        .title(title)
        .empty_is_error(state.load_error.is_some());
    frame.render_stateful_widget(table, areas.table, table_state);

    render_status_bar(frame, areas.status, state, styles);

    areas
}

/// Header text: where the roster came from and how much of it loaded.
pub fn header_text(state: &AppState) -> String {
    let source = if state.source_name.is_empty() {
        "roster"
    } else {
        state.source_name.as_str()
    };
    let mut text = format!("rollcall | {source} | {} students", state.total);
    if state.rejected > 0 {
        text.push_str(&format!(" | {} rejected", state.rejected));
    }
    text
}

/// Status bar text: active view, row count, and the selected avatar.
pub fn status_text(state: &AppState) -> String {
    let view = state.active.map_or("none", |control| control.label());
    let mut text = format!(
        "view: {view} | {}/{} shown",
        state.body.len(),
        state.total
    );

    if let Some(row) = state.selected.and_then(|index| state.body.rows().get(index)) {
        text.push_str(&format!(" | avatar: {}", row.avatar));
    }

    text.push_str(" | ?: help  q: quit");
    text
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &TableStyles) {
    let paragraph = Paragraph::new(Line::from(Span::styled(header_text(state), styles.header)));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &TableStyles) {
    let paragraph = Paragraph::new(Line::from(status_text(state))).style(styles.muted);
    frame.render_widget(paragraph, area);
}
