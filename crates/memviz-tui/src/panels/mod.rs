//! Dashboard panels, one per visualization.
//!
//! Each panel owns its renderers and is the only thing that mutates them.
//! Selection always lives in a panel's primary renderer.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use memviz_core::charts::ChartOptions;
use memviz_core::error::VizError;
use memviz_core::renderer::{BarRenderer, Tooltip};
use memviz_core::selection::{Selection, SelectionEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::geometry::Hitbox;
use crate::keymap::KeyAction;

pub mod cache;
pub mod hierarchy;
pub mod latency;
pub mod layout;

pub use cache::CachePanel;
pub use hierarchy::HierarchyPanel;
pub use latency::LatencyPanel;
pub use layout::LayoutPanel;

/// Which visualization a panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelKind {
    #[default]
    Hierarchy,
    Latency,
    Cache,
    Layout,
}

impl PanelKind {
    /// Tab order.
    pub const ALL: [Self; 4] = [Self::Hierarchy, Self::Latency, Self::Cache, Self::Layout];

    /// Tab title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Hierarchy => "Hierarchy",
            Self::Latency => "Latency",
            Self::Cache => "Cache",
            Self::Layout => "Layout",
        }
    }

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Hierarchy => 0,
            Self::Latency => 1,
            Self::Cache => 2,
            Self::Layout => 3,
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for PanelKind {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hierarchy" => Ok(Self::Hierarchy),
            "latency" => Ok(Self::Latency),
            "cache" => Ok(Self::Cache),
            "layout" => Ok(Self::Layout),
            _ => Err(VizError::UnknownPanel(s.to_string())),
        }
    }
}

/// A mountable, interactive visualization.
pub trait Panel {
    /// Which visualization this is.
    fn kind(&self) -> PanelKind;

    /// Renderer that owns the selection.
    fn primary(&self) -> &BarRenderer;

    /// Mutable access to the selection owner.
    fn primary_mut(&mut self) -> &mut BarRenderer;

    /// Start every animation from zero.
    fn mount(&mut self, now: Instant);

    /// Cancel pending animations.
    fn unmount(&mut self);

    /// Advance timers. Returns whether any fired.
    fn tick(&mut self, now: Instant) -> bool;

    /// Hit boxes of the records when drawn into `area` at `now`.
    fn hitboxes(&self, area: Rect, now: Instant) -> Vec<Hitbox>;

    /// Draw into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, now: Instant);

    /// Handle a panel-specific key. Returns whether it was consumed.
    fn handle_action(&mut self, _action: KeyAction, _now: Instant) -> bool {
        false
    }

    /// Extra footer hints.
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Apply a selection event to the primary renderer.
    fn select(&mut self, event: SelectionEvent) {
        self.primary_mut().select(event);
    }

    /// Current selection.
    fn selection(&self) -> Selection {
        self.primary().selection()
    }

    /// Number of selectable records.
    fn record_count(&self) -> usize {
        self.primary().len()
    }

    /// Tooltip of the selected record.
    fn tooltip(&self) -> Option<Tooltip> {
        self.primary().selected_tooltip()
    }

    /// First record under `(x, y)`; with `hover_only`, click-only boxes are skipped.
    fn hit_test(&self, area: Rect, now: Instant, x: u16, y: u16, hover_only: bool) -> Option<usize> {
        self.hitboxes(area, now)
            .into_iter()
            .find(|hb| (hb.hover || !hover_only) && hb.contains(x, y))
            .map(|hb| hb.index)
    }
}

/// Build every panel in tab order.
#[must_use]
pub fn build_panels(opts: &ChartOptions) -> Vec<Box<dyn Panel>> {
    vec![
        Box::new(HierarchyPanel::new(opts)),
        Box::new(LatencyPanel::new(opts)),
        Box::new(CachePanel::new(opts)),
        Box::new(LayoutPanel::new(opts)),
    ]
}
