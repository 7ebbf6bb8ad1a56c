//! Layout dimension constants for TUI rendering.

/// Height of the header line.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search line widget (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Lines the table spends on borders and its header row.
///
/// Subtracted from the table area to get the page height.
pub const TABLE_CHROME_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Spacing between table columns.
pub const COLUMN_SPACING: u16 = 2;
