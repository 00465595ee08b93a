//! Percent-to-cell conversion and hit boxes.

use ratatui::layout::{Position, Rect};

/// Clickable region of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    /// Record index.
    pub index: usize,
    /// Covered cells.
    pub area: Rect,
    /// Whether pointer hover selects the record (otherwise click only).
    pub hover: bool,
}

impl Hitbox {
    #[must_use]
    pub fn new(index: usize, area: Rect) -> Self {
        Self {
            index,
            area,
            hover: true,
        }
    }

    #[must_use]
    pub fn click_only(index: usize, area: Rect) -> Self {
        Self {
            index,
            area,
            hover: false,
        }
    }

    #[must_use]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.contains(Position::new(x, y))
    }
}

/// Number of cells `percent` of `total` covers, rounded.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cells(percent: f64, total: u16) -> u16 {
    if !percent.is_finite() || percent <= 0.0 {
        return 0;
    }
    let n = (percent.min(100.0) * f64::from(total) / 100.0).round();
    (n as u16).min(total)
}

/// Split `total` cells between segments whose extents are given in percent.
///
/// Uses largest remainders so the widths add up to the rounded share of the
/// strip (all of it once the extents sum to 100). A segment with a positive
/// extent gets at least one cell, taken from the widest segment.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn partition_cells(extents: &[f64], total: u16) -> Vec<u16> {
    if extents.is_empty() || total == 0 {
        return vec![0; extents.len()];
    }
    let total_f = f64::from(total);
    let ideal: Vec<f64> = extents
        .iter()
        .map(|e| {
            if e.is_finite() {
                e.clamp(0.0, 100.0) * total_f / 100.0
            } else {
                0.0
            }
        })
        .collect();
    let target = ideal.iter().sum::<f64>().round().min(total_f) as u16;

    let mut widths: Vec<u16> = ideal.iter().map(|v| v.floor() as u16).collect();
    let mut assigned: u16 = widths.iter().sum();

    let mut order: Vec<usize> = (0..ideal.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = ideal[a] - ideal[a].floor();
        let rb = ideal[b] - ideal[b].floor();
        rb.total_cmp(&ra)
    });
    for &i in &order {
        if assigned >= target {
            break;
        }
        widths[i] += 1;
        assigned += 1;
    }

    for i in 0..widths.len() {
        if widths[i] > 0 || ideal[i] <= 0.0 {
            continue;
        }
        let donor = (0..widths.len())
            .filter(|&j| widths[j] > 1)
            .max_by_key(|&j| widths[j]);
        if let Some(j) = donor {
            widths[j] -= 1;
            widths[i] = 1;
        } else if assigned < total {
            widths[i] = 1;
            assigned += 1;
        }
    }
    widths
}

/// Place a `width` x `height` box below `anchor`, or above it when there is no
/// room, horizontally centred on it and kept inside `bounds`.
#[must_use]
pub fn tooltip_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let centre = anchor.x + anchor.width / 2;
    let max_x = bounds.x + bounds.width - width;
    let x = centre.saturating_sub(width / 2).clamp(bounds.x, max_x);

    let below = anchor.y + anchor.height;
    let bottom = bounds.y + bounds.height;
    let y = if below + height <= bottom {
        below
    } else if anchor.y >= bounds.y + height {
        anchor.y - height
    } else {
        bottom - height
    };

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_round_and_clamp() {
        assert_eq!(cells(50.0, 10), 5);
        assert_eq!(cells(2.0, 10), 0);
        assert_eq!(cells(5.0, 10), 1);
        assert_eq!(cells(150.0, 10), 10);
        assert_eq!(cells(f64::NAN, 10), 0);
        assert_eq!(cells(-1.0, 10), 0);
    }

    #[test]
    fn settled_layout_fills_strip() {
        let shares = [8.0, 45.0, 25.0, 8.0, 7.0, 7.0];
        for width in [20u16, 37, 60, 100, 133] {
            let widths = partition_cells(&shares, width);
            assert_eq!(widths.iter().sum::<u16>(), width, "width {width}");
            assert!(widths.iter().all(|w| *w >= 1));
        }
        assert_eq!(partition_cells(&shares, 100), vec![8, 45, 25, 8, 7, 7]);
    }

    #[test]
    fn partially_grown_strip_leaves_room() {
        let widths = partition_cells(&[10.0, 20.0], 50);
        assert_eq!(widths, vec![5, 10]);
    }

    #[test]
    fn tiny_segments_get_one_cell() {
        let widths = partition_cells(&[0.5, 99.5], 20);
        assert_eq!(widths[0], 1);
        assert_eq!(widths.iter().sum::<u16>(), 20);
    }

    #[test]
    fn zero_segments_stay_empty() {
        assert_eq!(partition_cells(&[0.0, 0.0], 20), vec![0, 0]);
        assert!(partition_cells(&[], 20).is_empty());
        assert_eq!(partition_cells(&[50.0], 0), vec![0]);
    }

    #[test]
    fn tooltip_goes_below_then_above() {
        let bounds = Rect::new(0, 0, 80, 20);
        let below = tooltip_rect(Rect::new(10, 2, 6, 2), 20, 5, bounds);
        assert_eq!(below.y, 4);
        let above = tooltip_rect(Rect::new(10, 16, 6, 3), 20, 5, bounds);
        assert_eq!(above.y, 11);
    }

    #[test]
    fn tooltip_stays_inside_bounds() {
        let bounds = Rect::new(2, 1, 40, 10);
        let rect = tooltip_rect(Rect::new(40, 1, 2, 9), 30, 20, bounds);
        assert!(rect.x >= bounds.x);
        assert!(rect.x + rect.width <= bounds.x + bounds.width);
        assert!(rect.y + rect.height <= bounds.y + bounds.height);
    }

    #[test]
    fn hitbox_contains() {
        let hb = Hitbox::new(3, Rect::new(5, 5, 2, 2));
        assert!(hb.contains(5, 6));
        assert!(!hb.contains(7, 5));
        assert!(!Hitbox::click_only(0, Rect::default()).hover);
    }
}
