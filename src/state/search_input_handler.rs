//! Search line editing (pure state transitions).
//!
//! Handles text input while the search line has focus. Editing never runs
//! the search; only activating or submitting the line does.

/// The search line: its text, a cursor, and whether it has focus.
///
/// The text survives losing focus, the way an input field keeps its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchLine {
    /// Current text.
    pub query: String,
    /// Cursor position in characters, `0..=query.chars().count()`.
    pub cursor: usize,
    /// Whether keystrokes go to the line.
    pub editing: bool,
}

impl SearchLine {
    /// Unfocused line holding `query`, cursor at the end.
    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        let cursor = query.chars().count();
        Self {
            query,
            cursor,
            editing: false,
        }
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.query
            .char_indices()
            .nth(cursor)
            .map_or(self.query.len(), |(offset, _)| offset)
    }
}

/// Insert `ch` at the cursor and advance the cursor.
///
/// No-op unless the line is being edited.
pub fn handle_char_input(mut line: SearchLine, ch: char) -> SearchLine {
    if line.editing {
        let offset = line.byte_offset(line.cursor);
        line.query.insert(offset, ch);
        line.cursor += 1;
    }
    line
}

/// Delete the character before the cursor.
///
/// No-op at position 0 or when the line is not being edited.
pub fn handle_backspace(mut line: SearchLine) -> SearchLine {
    if line.editing && line.cursor > 0 {
        let offset = line.byte_offset(line.cursor - 1);
        line.query.remove(offset);
        line.cursor -= 1;
    }
    line
}

/// Move cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(mut line: SearchLine) -> SearchLine {
    if line.editing {
        line.cursor = line.cursor.saturating_sub(1);
    }
    line
}

/// Move cursor right by one character. Saturates at the end of the text.
pub fn handle_cursor_right(mut line: SearchLine) -> SearchLine {
    if line.editing {
        line.cursor = (line.cursor + 1).min(line.query.chars().count());
    }
    line
}

/// Give the line focus, keeping its text.
pub fn activate_search_input(mut line: SearchLine) -> SearchLine {
    line.editing = true;
    line.cursor = line.cursor.min(line.query.chars().count());
    line
}

/// Take focus away from the line, keeping its text.
pub fn cancel_search(mut line: SearchLine) -> SearchLine {
    line.editing = false;
    line
}

/// Leave the line after submitting. The caller runs the search.
pub fn submit_search(line: SearchLine) -> SearchLine {
    cancel_search(line)
}
