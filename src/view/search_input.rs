//! Search line widget.

use super::styles::TableStyles;
use crate::state::SearchLine;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the search line.
///
/// While editing, the character under the cursor is drawn reversed. When the
/// line is unfocused it shows its text, or a hint if it is empty.
pub struct SearchInput<'a> {
    line: &'a SearchLine,
    styles: &'a TableStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(line: &'a SearchLine, styles: &'a TableStyles) -> Self {
        Self { line, styles }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = if self.line.editing {
            let before: String = self.line.query.chars().take(self.line.cursor).collect();
            let mut after = self.line.query.chars().skip(self.line.cursor);
            let under_cursor = after.next().map_or_else(|| " ".to_string(), String::from);
            let rest: String = after.collect();

            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    under_cursor,
                    Style::default().add_modifier(Modifier::REVERSED),
                ),
                Span::raw(rest),
            ])
        } else if self.line.query.is_empty() {
            Line::styled("Press / to search by name", self.styles.muted)
        } else {
            Line::from(self.line.query.as_str())
        };

        let block = Block::default().borders(Borders::ALL);
        let block = if self.line.editing {
            block
                .title(" Search (Enter to run, Esc to leave) ")
                .border_style(self.styles.focus_border)
        } else {
            block.title(" Search ")
        };

        Paragraph::new(content).block(block).render(area, buf);
    }
}
