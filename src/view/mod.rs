//! TUI rendering and event handling (impure shell)

pub mod constants;
mod help;
mod layout;
mod search_input;
mod styles;
mod table;

pub use help::{centered_rect, render_help_overlay};
pub use layout::{header_text, render_layout, split_screen, status_text, ScreenAreas};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, TableStyles};
pub use table::{column_widths, RosterTable};

use crate::config::keybindings::KeyBindings;
use crate::controller::{Control, Controller};
use crate::integration::{self, LoadOutcome};
use crate::model::{AppError, KeyAction};
use crate::source::InputSource;
use crate::state::{apply_control, handle_selection_action, search_input_handler, AppState};
use crate::store::Store;
use constants::TABLE_CHROME_HEIGHT;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Position, Rect},
    widgets::TableState,
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(err) => AppError::Terminal(err),
            TuiError::Input(err) => AppError::Input(err),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    store: Store,
    controller: Controller,
    key_bindings: KeyBindings,
    styles: TableStyles,
    table_state: TableState,
    /// Regions of the last drawn frame (for mouse hit testing and paging)
    areas: ScreenAreas,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Fetches the roster once, then sets up the terminal in raw mode with
    /// alternate screen.
    pub fn new(mut input_source: InputSource, args: &CliArgs) -> Result<Self, TuiError> {
        let source_name = input_source.describe();
        let payload = input_source.read_payload()?;
        let outcome = integration::load_payload(&payload);

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        if args.mouse {
            stdout.execute(EnableMouseCapture)?;
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::assemble(terminal, outcome, source_name, args))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal events;
    /// nothing is redrawn between them.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the app around a loaded roster and show the initial view.
    ///
    /// The roster is shown as loaded; with an initial search term the
    /// search runs immediately instead.
    fn assemble(
        terminal: Terminal<B>,
        outcome: LoadOutcome,
        source_name: String,
        args: &CliArgs,
    ) -> Self {
        let mut app_state = AppState::from_load(&outcome, source_name);
        let store = outcome.store;
        let controller = Controller::new();

        apply_control(&mut app_state, &controller, &store, Control::ShowAll);
        if let Some(term) = &args.search {
            app_state.search = search_input_handler::SearchLine::with_query(term.as_str());
            apply_control(&mut app_state, &controller, &store, Control::Search);
        }

        let areas = terminal
            .size()
            .map(|size| split_screen(Rect::new(0, 0, size.width, size.height)))
            .unwrap_or_default();

        info!(
            records = store.len(),
            rejected = app_state.rejected,
            source = %app_state.source_name,
            "Roster ready"
        );

        Self {
            terminal,
            app_state,
            store,
            controller,
            key_bindings: KeyBindings::default(),
            styles: TableStyles::with_color_config(ColorConfig::new(args.colors)),
            table_state: TableState::default(),
            areas,
        }
    }

    /// Rows visible in the table at once.
    fn page_height(&self) -> usize {
        usize::from(self.areas.table.height.saturating_sub(TABLE_CHROME_HEIGHT))
    }

    fn apply(&mut self, control: Control) {
        apply_control(&mut self.app_state, &self.controller, &self.store, control);
        *self.table_state.offset_mut() = 0;
    }

    /// Focus the search line and run the search with its current text.
    fn start_search(&mut self) {
        self.app_state.search =
            search_input_handler::activate_search_input(self.app_state.search.clone());
        self.apply(Control::Search);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let action = self.key_bindings.get(key);

        // The help overlay swallows everything but closing it and quitting
        if self.app_state.help_visible {
            match (key.code, action) {
                (KeyCode::Esc, _) | (_, Some(KeyAction::Help)) => {
                    self.app_state.help_visible = false;
                }
                (_, Some(KeyAction::Quit)) => return true,
                _ => {}
            }
            return false;
        }

        if self.app_state.search.editing {
            let line = self.app_state.search.clone();
            match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app_state.search = search_input_handler::handle_char_input(line, ch);
                    return false;
                }
                KeyCode::Backspace => {
                    self.app_state.search = search_input_handler::handle_backspace(line);
                    return false;
                }
                KeyCode::Left => {
                    self.app_state.search = search_input_handler::handle_cursor_left(line);
                    return false;
                }
                KeyCode::Right => {
                    self.app_state.search = search_input_handler::handle_cursor_right(line);
                    return false;
                }
                _ => {} // Fall through to key binding dispatch
            }
        }

        let Some(action) = action else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::CancelSearch => {
                self.app_state.search =
                    search_input_handler::cancel_search(self.app_state.search.clone());
            }
            KeyAction::StartSearch => self.start_search(),
            KeyAction::SubmitSearch => {
                if self.app_state.search.editing {
                    self.app_state.search =
                        search_input_handler::submit_search(self.app_state.search.clone());
                    self.apply(Control::Search);
                }
            }
            KeyAction::SelectNext
            | KeyAction::SelectPrev
            | KeyAction::PageDown
            | KeyAction::PageUp
            | KeyAction::SelectFirst
            | KeyAction::SelectLast => {
                let page = self.page_height();
                handle_selection_action(&mut self.app_state, action, page);
            }
            other => {
                if let Some(control) = other.control() {
                    self.apply(control);
                }
            }
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// A left click on the search line runs the search; a click on a row
    /// selects it. The scroll wheel moves the selection.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                handle_selection_action(&mut self.app_state, KeyAction::SelectNext, 1);
            }
            MouseEventKind::ScrollUp => {
                handle_selection_action(&mut self.app_state, KeyAction::SelectPrev, 1);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                if self.areas.search.contains(position) {
                    self.start_search();
                } else if let Some(row) = self.row_at(position) {
                    self.app_state.selected = Some(row);
                }
            }
            _ => {}
        }
    }

    /// Body row under `position`, if any.
    fn row_at(&self, position: Position) -> Option<usize> {
        let table = self.areas.table;
        // Top border and header row precede the first body row
        let first_row_y = table.y.saturating_add(2);
        let last_row_y = table.bottom().saturating_sub(1);
        if !table.contains(position) || position.y < first_row_y || position.y >= last_row_y {
            return None;
        }

        let index = self.table_state.offset() + usize::from(position.y - first_row_y);
        (index < self.app_state.body.len()).then_some(index)
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        self.table_state.select(self.app_state.selected);

        let Self {
            terminal,
            app_state,
            styles,
            table_state,
            ..
        } = self;

        let mut areas = ScreenAreas::default();
        terminal.draw(|frame| {
            areas = render_layout(frame, app_state, styles, table_state);
            if app_state.help_visible {
                render_help_overlay(frame, styles);
            }
        })?;
        self.areas = areas;

        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        outcome: LoadOutcome,
        source_name: &str,
        args: &CliArgs,
    ) -> Self {
        Self::assemble(terminal, outcome, source_name.to_string(), args)
    }

    /// Get reference to app state.
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Get reference to the terminal (for buffer inspection).
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Startup options for the TUI, resolved from config, environment and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Search term to run right after loading.
    pub search: Option<String>,
    /// Color output.
    pub colors: bool,
    /// Mouse capture (click the search line, wheel to move).
    pub mouse: bool,
}

impl CliArgs {
    /// Create new CliArgs
    pub fn new(search: Option<String>, colors: bool, mouse: bool) -> Self {
        Self {
            search,
            colors,
            mouse,
        }
    }
}

impl Default for CliArgs {
    fn default() -> Self {
        Self::new(None, true, true)
    }
}

/// Initialize and run the TUI application with input source and args
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(input_source: InputSource, args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(input_source, &args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal(args.mouse)?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal(mouse: bool) -> Result<(), TuiError> {
    disable_raw_mode()?;
    if mouse {
        io::stdout().execute(DisableMouseCapture)?;
    }
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
