//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;
use crate::pointer::PointerAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiMessage {
    /// Periodic wake-up; advances animation timers.
    Tick,
    /// Quit the application.
    Quit,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// Mouse input forwarded from the event loop.
    Pointer(PointerAction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));

        let msg = TuiMessage::KeyPress(KeyAction::NextPanel);
        assert!(matches!(msg, TuiMessage::KeyPress(KeyAction::NextPanel)));

        let msg = TuiMessage::Pointer(PointerAction::Click { x: 1, y: 2 });
        assert!(matches!(msg, TuiMessage::Pointer(_)));
    }
}
