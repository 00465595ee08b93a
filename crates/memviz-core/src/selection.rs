//! Single-record selection state machine.

use serde::Serialize;

/// Which record, if any, has its detail tooltip open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "index")]
pub enum Selection {
    #[default]
    Unselected,
    Selected(usize),
}

/// Pointer and keyboard input that drives [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Pointer entered record `i`.
    HoverEnter(usize),
    /// Pointer left the record it was over.
    HoverLeave,
    /// Record `i` was clicked.
    Click(usize),
}

impl Selection {
    /// Next state after `event`.
    #[must_use]
    pub fn apply(self, event: SelectionEvent) -> Self {
        match (self, event) {
            (_, SelectionEvent::HoverEnter(i)) => Self::Selected(i),
            (_, SelectionEvent::HoverLeave) => Self::Unselected,
            (Self::Selected(current), SelectionEvent::Click(i)) if current == i => Self::Unselected,
            (_, SelectionEvent::Click(i)) => Self::Selected(i),
        }
    }

    /// Like [`apply`](Self::apply), ignoring events that name an index `>= len`.
    #[must_use]
    pub fn apply_bounded(self, event: SelectionEvent, len: usize) -> Self {
        match event {
            SelectionEvent::HoverEnter(i) | SelectionEvent::Click(i) if i >= len => self,
            _ => self.apply(event),
        }
    }

    /// Selected index, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Unselected => None,
            Self::Selected(i) => Some(i),
        }
    }

    /// Whether record `i` is selected.
    #[must_use]
    pub fn is_selected(self, i: usize) -> bool {
        self == Self::Selected(i)
    }
}
