//! Roster table widget.
//!
//! Draws a [`TableBody`] with a header row and a selection highlight, or an
//! empty-state message when there are no rows.

use super::constants::COLUMN_SPACING;
use super::styles::TableStyles;
use crate::render::{TableBody, TableRow, COLUMN_TITLES};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Index of the email column, which takes the remaining width.
const EMAIL_COLUMN: usize = 6;

/// Stateful widget over a rendered table body.
pub struct RosterTable<'a> {
    body: &'a TableBody,
    styles: &'a TableStyles,
    empty_message: &'a str,
    empty_is_error: bool,
    title: String,
}

impl<'a> RosterTable<'a> {
    /// Create the widget.
    pub fn new(body: &'a TableBody, styles: &'a TableStyles, empty_message: &'a str) -> Self {
        Self {
            body,
            styles,
            empty_message,
            empty_is_error: false,
            title: " Students ".to_string(),
        }
    }

    /// Block title, e.g. the active view.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Draw the empty-state message in the error style.
    pub fn empty_is_error(mut self, is_error: bool) -> Self {
        self.empty_is_error = is_error;
        self
    }
}

impl StatefulWidget for RosterTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.as_str());

        if self.body.is_empty() {
            let style = if self.empty_is_error {
                self.styles.error
            } else {
                self.styles.muted
            };
            Paragraph::new(Line::styled(self.empty_message, style))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(COLUMN_TITLES).style(self.styles.header);
        let rows = self.body.rows().iter().map(|row| table_row(row, self.styles));

        let table = Table::new(rows, column_widths(self.body))
            .header(header)
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(self.styles.selected);

        StatefulWidget::render(table, area, buf, state);
    }
}

fn table_row<'a>(row: &'a TableRow, styles: &TableStyles) -> Row<'a> {
    let cells = row.cells();
    Row::new(cells.into_iter().enumerate().map(|(index, text)| {
        let cell = Cell::from(text);
        if index == 5 {
            cell.style(styles.status(text))
        } else {
            cell
        }
    }))
}

/// Column constraints sized to the widest cell of each column.
///
/// Every column but the email gets exactly its content width; the email
/// column takes what is left.
pub fn column_widths(body: &TableBody) -> [Constraint; 7] {
    let mut widths = COLUMN_TITLES.map(|title| title.width());
    for row in body.rows() {
        for (index, text) in row.cells().into_iter().enumerate() {
            widths[index] = widths[index].max(text.width());
        }
    }

    let mut constraints = widths.map(|w| Constraint::Length(u16::try_from(w).unwrap_or(u16::MAX)));
    constraints[EMAIL_COLUMN] = Constraint::Min(
        u16::try_from(COLUMN_TITLES[EMAIL_COLUMN].width()).unwrap_or(u16::MAX),
    );
    constraints
}
