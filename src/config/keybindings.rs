//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let plain = |code: KeyCode| KeyEvent::new(code, KeyModifiers::NONE);
        let ctrl = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        let bindings = HashMap::from([
            // Row selection
            (plain(KeyCode::Char('j')), KeyAction::SelectNext),
            (plain(KeyCode::Down), KeyAction::SelectNext),
            (plain(KeyCode::Char('k')), KeyAction::SelectPrev),
            (plain(KeyCode::Up), KeyAction::SelectPrev),
            (plain(KeyCode::PageDown), KeyAction::PageDown),
            (ctrl('d'), KeyAction::PageDown),
            (plain(KeyCode::PageUp), KeyAction::PageUp),
            (ctrl('u'), KeyAction::PageUp),
            (plain(KeyCode::Home), KeyAction::SelectFirst),
            (plain(KeyCode::End), KeyAction::SelectLast),
            // Search
            (plain(KeyCode::Char('/')), KeyAction::StartSearch),
            (ctrl('f'), KeyAction::StartSearch),
            (plain(KeyCode::Enter), KeyAction::SubmitSearch),
            (plain(KeyCode::Esc), KeyAction::CancelSearch),
            // Roster views
            (plain(KeyCode::Char('a')), KeyAction::SortAscending),
            (plain(KeyCode::Char('z')), KeyAction::SortDescending),
            (plain(KeyCode::Char('m')), KeyAction::SortByScore),
            (plain(KeyCode::Char('p')), KeyAction::FilterPassing),
            (plain(KeyCode::Char('c')), KeyAction::SortByGroup),
            (plain(KeyCode::Char('g')), KeyAction::PartitionByGender),
            (plain(KeyCode::Char('r')), KeyAction::ShowAll),
            // Application
            (plain(KeyCode::Char('?')), KeyAction::Help),
            (plain(KeyCode::Char('q')), KeyAction::Quit),
            (ctrl('c'), KeyAction::Quit),
        ]);

        Self { bindings }
    }
}
