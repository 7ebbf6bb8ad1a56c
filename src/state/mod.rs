//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod search_input_handler;
pub mod selection_handler;

// Re-export for convenience
pub use app_state::{apply_control, AppState};
pub use search_input_handler::SearchLine;
pub use selection_handler::handle_selection_action;
