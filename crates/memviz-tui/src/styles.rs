//! TUI styles and color themes.

use memviz_core::record::ColorTag;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub track: Color,
    pub tooltip_bg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            track: Color::Rgb(55, 65, 81),
            tooltip_bg: Color::Rgb(31, 41, 55),
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style of a panel's outer border.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style of a bar filled with `color` over the empty track.
    #[must_use]
    pub fn bar_style(&self, color: Color) -> Style {
        Style::default().fg(color).bg(self.track)
    }

    /// Border style of a selected element.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of the tooltip box.
    #[must_use]
    pub fn tooltip_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.tooltip_bg)
    }
}

/// Terminal colour of a record colour family.
#[must_use]
pub fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Red => Color::Rgb(239, 68, 68),
        ColorTag::Orange => Color::Rgb(249, 115, 22),
        ColorTag::Yellow => Color::Rgb(234, 179, 8),
        ColorTag::Green => Color::Rgb(16, 185, 129),
        ColorTag::Blue => Color::Rgb(59, 130, 246),
        ColorTag::Purple => Color::Rgb(168, 85, 247),
        ColorTag::Gray => Color::Rgb(156, 163, 175),
    }
}
