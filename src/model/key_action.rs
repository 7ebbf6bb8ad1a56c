//! Domain-level keyboard actions independent of key bindings.

use crate::controller::Control;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Table navigation
    /// Select the next row. Default: j/↓
    SelectNext,
    /// Select the previous row. Default: k/↑
    SelectPrev,
    /// Move the selection down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Move the selection up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Select the first row. Default: Home
    SelectFirst,
    /// Select the last row. Default: End
    SelectLast,

    // Search
    /// Focus the search line and run the search with its current text. Default: //Ctrl+f
    StartSearch,
    /// Run the search and leave the search line. Only acts while typing. Default: Enter
    SubmitSearch,
    /// Leave the search line without searching. Default: Esc
    CancelSearch,

    // Roster views
    /// Sort by display name, A to Z. Default: a
    SortAscending,
    /// Sort by display name, Z to A. Default: z
    SortDescending,
    /// Sort by marks, lowest first. Default: m
    SortByScore,
    /// Show passing students only. Default: p
    FilterPassing,
    /// Sort by class. Default: c
    SortByGroup,
    /// Female students, then male students. Default: g
    PartitionByGender,
    /// Show the roster as loaded. Default: r
    ShowAll,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Controller binding triggered by this action, if any.
    ///
    /// Search actions resolve to [`Control::Search`]; navigation and
    /// application actions have no binding.
    pub fn control(self) -> Option<Control> {
        match self {
            KeyAction::StartSearch | KeyAction::SubmitSearch => Some(Control::Search),
            KeyAction::SortAscending => Some(Control::SortAscending),
            KeyAction::SortDescending => Some(Control::SortDescending),
            KeyAction::SortByScore => Some(Control::SortByScore),
            KeyAction::FilterPassing => Some(Control::FilterPassing),
            KeyAction::SortByGroup => Some(Control::SortByGroup),
            KeyAction::PartitionByGender => Some(Control::PartitionByGender),
            KeyAction::ShowAll => Some(Control::ShowAll),
            KeyAction::SelectNext
            | KeyAction::SelectPrev
            | KeyAction::PageDown
            | KeyAction::PageUp
            | KeyAction::SelectFirst
            | KeyAction::SelectLast
            | KeyAction::CancelSearch
            | KeyAction::Help
            | KeyAction::Quit => None,
        }
    }
}
