//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextPanel,
    PrevPanel,
    /// Jump to the panel at this tab index.
    ShowPanel(usize),
    /// Hover the next record.
    SelectNext,
    /// Hover the previous record.
    SelectPrev,
    /// Click the hovered record, or the first one.
    Activate,
    /// Leave the hovered record.
    ClearSelection,
    ToggleScale,
    NextScenario,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Tab => KeyAction::NextPanel,
        KeyCode::BackTab => KeyAction::PrevPanel,
        KeyCode::Char(c @ '1'..='4') => KeyAction::ShowPanel(c as usize - '1' as usize),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            KeyAction::SelectNext
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            KeyAction::SelectPrev
        }
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
        KeyCode::Esc => KeyAction::ClearSelection,
        KeyCode::Char('s') => KeyAction::ToggleScale,
        KeyCode::Char('n') => KeyAction::NextScenario,
        _ => KeyAction::None,
    }
}
