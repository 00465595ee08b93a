//! Process memory layout: a segmented strip over the address space plus one card per segment.

use std::time::Instant;

use memviz_core::charts::{self, ChartOptions};
use memviz_core::renderer::BarRenderer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::{Panel, PanelKind};
use crate::geometry::{partition_cells, Hitbox};
use crate::styles::{tag_color, ColorTheme};

const CARD_COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 4;

const STACK_NOTE: &str =
    "Stack grows downward from high memory addresses. Each function call pushes a new frame.";
const HEAP_NOTE: &str =
    "Heap grows upward from low memory. Dynamic allocation can lead to fragmentation.";

struct Regions {
    strip: Rect,
    addresses: Rect,
    cards: Rect,
    notes: Rect,
}

/// Address-space strip panel.
pub struct LayoutPanel {
    segments: BarRenderer,
}

impl LayoutPanel {
    #[must_use]
    pub fn new(opts: &ChartOptions) -> Self {
        Self {
            segments: charts::process_layout(opts),
        }
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(ColorTheme::default().border_style())
            .title(" Process Memory Layout ")
    }

    fn regions(area: Rect) -> Regions {
        let inner = Self::block().inner(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(CARD_HEIGHT * 2),
                Constraint::Min(0),
            ])
            .split(inner);
        Regions {
            strip: rows[0],
            addresses: rows[1],
            cards: rows[2],
            notes: rows[3],
        }
    }

    /// Cell span of each strip segment at `now`, left to right.
    fn segment_rects(&self, strip: Rect, now: Instant) -> Vec<Rect> {
        let widths = partition_cells(&self.segments.extents(now), strip.width);
        let mut x = strip.x;
        widths
            .into_iter()
            .map(|w| {
                let rect = Rect::new(x, strip.y, w, strip.height);
                x += w;
                rect
            })
            .collect()
    }

    fn card_rects(&self, cards: Rect) -> Vec<Rect> {
        let rows = self.segments.len().div_ceil(CARD_COLUMNS);
        let mut rects = Vec::with_capacity(self.segments.len());
        for row in 0..rows {
            let Ok(offset) = u16::try_from(row) else { break };
            let y = cards.y + offset * CARD_HEIGHT;
            if y + CARD_HEIGHT > cards.y + cards.height {
                break;
            }
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 3); CARD_COLUMNS])
                .split(Rect::new(cards.x, y, cards.width, CARD_HEIGHT));
            let remaining = self.segments.len() - row * CARD_COLUMNS;
            rects.extend(columns.iter().take(remaining.min(CARD_COLUMNS)).copied());
        }
        rects
    }

    fn render_strip(&self, frame: &mut Frame, strip: Rect, now: Instant) {
        for (i, rect) in self.segment_rects(strip, now).into_iter().enumerate() {
            let Some(record) = self.segments.dataset().get(i) else {
                continue;
            };
            if rect.width == 0 {
                continue;
            }
            let selected = self.segments.selection().is_selected(i);
            let bg = tag_color(record.color);
            let mut style = Style::default().bg(bg).fg(Color::White);
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let fits = record.label.chars().count() <= usize::from(rect.width);
            let label = if self.segments.label_visible(i) && fits {
                Span::styled(record.label.clone(), style.add_modifier(Modifier::BOLD))
            } else {
                Span::raw("")
            };
            let mut lines = vec![Line::default(); usize::from(rect.height)];
            if let Some(middle) = lines.get_mut(usize::from(rect.height / 2)) {
                *middle = Line::from(label);
            }
            frame.render_widget(
                Paragraph::new(lines).style(style).alignment(Alignment::Center),
                rect,
            );
        }
    }

    fn render_addresses(frame: &mut Frame, area: Rect) {
        let theme = ColorTheme::default();
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        frame.render_widget(
            Paragraph::new(Span::styled("Low Memory (0x0000)", theme.muted_style())),
            halves[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled("High Memory (0xFFFF)", theme.muted_style()))
                .alignment(Alignment::Right),
            halves[1],
        );
    }

    fn render_cards(&self, frame: &mut Frame, cards: Rect) {
        let theme = ColorTheme::default();
        for (i, rect) in self.card_rects(cards).into_iter().enumerate() {
            let Some(record) = self.segments.dataset().get(i) else {
                continue;
            };
            let border = if self.segments.selection().is_selected(i) {
                theme.selected_style()
            } else {
                theme.muted_style()
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled("■ ", Style::default().fg(tag_color(record.color))),
                    Span::styled(record.label.clone(), theme.text_style().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}%", record.value), theme.text_style()),
                ]),
                Line::from(Span::styled(record.description.clone(), theme.muted_style())),
            ];
            frame.render_widget(
                Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(border)),
                rect,
            );
        }
    }

    fn render_notes(frame: &mut Frame, area: Rect) {
        if area.height < 3 {
            return;
        }
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        for (rect, title, text, color) in [
            (halves[0], " Stack Growth ", STACK_NOTE, Color::Green),
            (halves[1], " Heap Growth ", HEAP_NOTE, Color::Rgb(249, 115, 22)),
        ] {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(title, Style::default().fg(color)));
            frame.render_widget(
                Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
                rect,
            );
        }
    }
}

impl Panel for LayoutPanel {
    fn kind(&self) -> PanelKind {
        PanelKind::Layout
    }

    fn primary(&self) -> &BarRenderer {
        &self.segments
    }

    fn primary_mut(&mut self) -> &mut BarRenderer {
        &mut self.segments
    }

    fn mount(&mut self, now: Instant) {
        self.segments.mount(now);
    }

    fn unmount(&mut self) {
        self.segments.unmount();
    }

    fn tick(&mut self, now: Instant) -> bool {
        self.segments.tick(now)
    }

    /// Strip segments answer hover and click; cards answer clicks only.
    fn hitboxes(&self, area: Rect, now: Instant) -> Vec<Hitbox> {
        let regions = Self::regions(area);
        let strip = self
            .segment_rects(regions.strip, now)
            .into_iter()
            .enumerate()
            .filter(|(_, rect)| rect.width > 0)
            .map(|(i, rect)| Hitbox::new(i, rect));
        let cards = self
            .card_rects(regions.cards)
            .into_iter()
            .enumerate()
            .map(|(i, rect)| Hitbox::click_only(i, rect));
        strip.chain(cards).collect()
    }

    fn render(&self, frame: &mut Frame, area: Rect, now: Instant) {
        frame.render_widget(Self::block(), area);
        let regions = Self::regions(area);
        self.render_strip(frame, regions.strip, now);
        Self::render_addresses(frame, regions.addresses);
        self.render_cards(frame, regions.cards);
        Self::render_notes(frame, regions.notes);
    }
}

#[cfg(test)]
mod tests {
    use memviz_core::selection::{Selection, SelectionEvent};

    use super::*;
    use crate::panels::test_support::{render_rows, settle};

    #[test]
    fn strip_is_empty_before_fire() {
        let panel = LayoutPanel::new(&ChartOptions::default());
        let boxes = panel.hitboxes(Rect::new(0, 0, 102, 24), Instant::now());
        assert!(boxes.iter().all(|hb| !hb.hover));
        assert_eq!(boxes.len(), 6);
    }

    #[test]
    fn settled_strip_fills_width() {
        let mut panel = LayoutPanel::new(&ChartOptions::default());
        let now = settle(&mut panel, Instant::now());
        let area = Rect::new(0, 0, 102, 24);
        let strip = LayoutPanel::regions(area).strip;
        let rects = panel.segment_rects(strip, now);
        assert_eq!(rects.iter().map(|r| r.width).sum::<u16>(), 100);
        assert_eq!(rects[1].width, 45);
        assert_eq!(rects.last().map(|r| r.x + r.width), Some(strip.x + strip.width));
    }

    #[test]
    fn labels_and_addresses_render() {
        let mut panel = LayoutPanel::new(&ChartOptions::default());
        let now = settle(&mut panel, Instant::now());
        let rows = render_rows(&panel, 102, 24, now);
        assert!(rows[2].contains("Free Space"));
        assert!(rows[2].contains("Heap"));
        assert!(rows[4].contains("Low Memory (0x0000)"));
        assert!(rows[4].contains("High Memory (0xFFFF)"));
        assert!(rows.concat().contains("Stack Growth"));
    }

    #[test]
    fn cards_show_authored_share_before_fire() {
        let panel = LayoutPanel::new(&ChartOptions::default());
        let text = render_rows(&panel, 102, 24, Instant::now()).concat();
        assert!(text.contains("Free Space  45%"));
        assert!(text.contains("Stack  8%"));
        assert!(!text.contains(" 0%"));
    }

    #[test]
    fn narrow_segments_drop_their_label() {
        let mut panel = LayoutPanel::new(&ChartOptions::default());
        let now = settle(&mut panel, Instant::now());
        // 7% of 40 cells is 3 cells, too few for "Text"
        let rows = render_rows(&panel, 42, 24, now);
        assert!(!rows[2].contains("Text"));
    }

    #[test]
    fn cards_are_click_only() {
        let mut panel = LayoutPanel::new(&ChartOptions::default());
        let now = settle(&mut panel, Instant::now());
        let area = Rect::new(0, 0, 102, 24);
        let card = panel
            .hitboxes(area, now)
            .into_iter()
            .find(|hb| !hb.hover && hb.index == 4)
            .unwrap();
        let (x, y) = (card.area.x + 1, card.area.y + 1);
        assert_eq!(panel.hit_test(area, now, x, y, true), None);
        assert_eq!(panel.hit_test(area, now, x, y, false), Some(4));

        panel.select(SelectionEvent::Click(4));
        assert_eq!(panel.selection(), Selection::Selected(4));
        assert_eq!(panel.tooltip().unwrap().value, "7% of address space");
    }
}
