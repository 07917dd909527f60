//! Key binding definitions for the artwork table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An action on the artwork table triggered by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Toggle the row under the cursor.
    ToggleRow,
    /// Toggle every row on the page (header checkbox).
    TogglePage,
    /// Open the "select first N rows" popup.
    OpenBulkSelect,
    /// Open the artwork under the cursor on artic.edu.
    OpenInBrowser,
    Help,
    Quit,
}

/// Where keyboard focus currently is, for contextual hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Table,
    BulkSelect,
    Help,
}

/// Key binding configuration.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    /// Whether vim-style bindings (h/j/k/l) are enabled.
    pub vim_mode: bool,
}

impl KeyBindings {
    /// Create new key bindings.
    pub fn new(vim_mode: bool) -> Self {
        Self { vim_mode }
    }

    /// Map a key press in the table view to an action.
    pub fn action_for(&self, key: KeyEvent) -> Option<KeyAction> {
        let action = match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Up, _) => KeyAction::MoveUp,
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Right, _) | (KeyCode::PageDown, _) => KeyAction::NextPage,
            (KeyCode::Left, _) | (KeyCode::PageUp, _) => KeyAction::PrevPage,
            (KeyCode::Home, _) => KeyAction::FirstPage,
            (KeyCode::End, _) => KeyAction::LastPage,
            (KeyCode::Char(' '), _) => KeyAction::ToggleRow,
            (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::TogglePage,
            (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::OpenBulkSelect,
            (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::NextPage,
            (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::PrevPage,
            (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::OpenInBrowser,
            (KeyCode::Char('?'), _) => KeyAction::Help,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if self.vim_mode => {
                match c {
                    'j' => KeyAction::MoveDown,
                    'k' => KeyAction::MoveUp,
                    'l' => KeyAction::NextPage,
                    'h' => KeyAction::PrevPage,
                    'g' => KeyAction::FirstPage,
                    'G' => KeyAction::LastPage,
                    _ => return None,
                }
            }
            _ => return None,
        };
        Some(action)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Short key hints for the help bar. Keys are in brackets.
pub fn context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Table => {
            "[space] select  [a] page  [s] select N  [n/p] page  [o] open  [?] help  [q] quit"
        }
        KeyContext::BulkSelect => "[Enter] submit  [Esc] cancel",
        KeyContext::Help => "[Esc/q/?] close",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.action_for(key(KeyCode::Char(' '))),
            Some(KeyAction::ToggleRow)
        );
        assert_eq!(
            bindings.action_for(key(KeyCode::Char('a'))),
            Some(KeyAction::TogglePage)
        );
        assert_eq!(
            bindings.action_for(key(KeyCode::Char('s'))),
            Some(KeyAction::OpenBulkSelect)
        );
        assert_eq!(
            bindings.action_for(key(KeyCode::Right)),
            Some(KeyAction::NextPage)
        );
        assert_eq!(bindings.action_for(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let bindings = KeyBindings::default();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.action_for(event), Some(KeyAction::Quit));
    }

    #[test]
    fn test_vim_bindings() {
        let bindings = KeyBindings::new(true);
        assert_eq!(
            bindings.action_for(key(KeyCode::Char('j'))),
            Some(KeyAction::MoveDown)
        );
        let shift_g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(bindings.action_for(shift_g), Some(KeyAction::LastPage));
    }

    #[test]
    fn test_vim_bindings_disabled() {
        let bindings = KeyBindings::new(false);
        assert_eq!(bindings.action_for(key(KeyCode::Char('j'))), None);
        assert_eq!(
            bindings.action_for(key(KeyCode::Down)),
            Some(KeyAction::MoveDown)
        );
    }

    #[test]
    fn test_context_hints_have_keys() {
        assert!(context_hints(KeyContext::Table).contains("[space]"));
        assert!(context_hints(KeyContext::BulkSelect).contains("[Enter]"));
    }
}
