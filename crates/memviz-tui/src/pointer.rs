//! Mouse input mapping.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Pointer input in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Pointer moved (or dragged) over a cell.
    Move { x: u16, y: u16 },
    /// Left button pressed on a cell.
    Click { x: u16, y: u16 },
}

/// Map a mouse event to a pointer action; scrolls and other buttons are dropped.
#[must_use]
pub fn map_mouse(event: MouseEvent) -> Option<PointerAction> {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerAction::Move { x, y }),
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Click { x, y }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn moves_and_clicks() {
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Moved)),
            Some(PointerAction::Move { x: 7, y: 3 })
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(PointerAction::Click { x: 7, y: 3 })
        );
    }

    #[test]
    fn other_events_are_dropped() {
        assert_eq!(map_mouse(mouse(MouseEventKind::ScrollDown)), None);
        assert_eq!(map_mouse(mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(map_mouse(mouse(MouseEventKind::Up(MouseButton::Left))), None);
    }
}
