//! Bar geometry

use plotters::style::RGBColor;

use super::colors::bar_color;
use super::{Frame, Rect};
use crate::abricate::{DisplayRange, Table, cell_value};

/// Above this many series one extra slot of padding is reserved per sample
/// and bars are drawn two slots wide, overlapping their neighbour.
const DENSE_SERIES: usize = 3;

/// One filled rectangle of the graph
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GraphBar {
    pub label: String,
    pub value: f64,
    pub rect: Rect,
    pub color: RGBColor,
}

/// Horizontal sizing shared by every bar of one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BarMetrics {
    /// Offset between neighbouring series inside a sample slot
    pub slot_width: i32,
    pub bar_width: i32,
}

impl BarMetrics {
    pub(crate) fn new(frame: &Frame, series_count: usize) -> Self {
        let usable = (frame.entry_width() - 4 * frame.thickness).max(0);
        let dense = series_count > DENSE_SERIES;
        let divisor = (series_count + usize::from(dense)).max(1) as i32;

        let slot_width = usable / divisor;
        let bar_width = if dense { 2 * slot_width } else { slot_width };

        Self {
            slot_width,
            bar_width: bar_width.max(1),
        }
    }
}

/// Pixel height of a bar for `value`, clamped to the frame
pub(crate) fn bar_height(value: f64, range: &DisplayRange, frame_height: i32) -> i32 {
    let span = range.span();
    if span <= 0.0 {
        return 0;
    }
    let height = (frame_height as f64 * (value - range.min) / span) as i32;
    height.clamp(0, frame_height)
}

/// One bar per non-zero series cell. Bars of a sample sit side by side in
/// series order, starting at the sample's column.
pub(crate) fn layout_bars(frame: &Frame, table: &Table) -> Vec<GraphBar> {
    let metrics = BarMetrics::new(frame, table.series_count());
    let mut bars = Vec::new();

    for (series, label, cells) in table.series() {
        let color = bar_color(series);
        let offset = frame.inset() + series as i32 * metrics.slot_width;

        for (raw, sample) in cells.iter().zip(&frame.samples) {
            let value = cell_value(raw);
            if value == 0.0 {
                continue;
            }

            let height = bar_height(value, &frame.range, frame.rect.height);
            bars.push(GraphBar {
                label: label.to_string(),
                value,
                rect: Rect::new(
                    sample.x + offset,
                    frame.rect.y + (frame.rect.height - height) + 1,
                    metrics.bar_width,
                    height,
                ),
                color,
            });
        }
    }

    bars
}

/// Order bars tallest first so short bars are painted over tall ones.
/// Ties keep their layout order.
pub(crate) fn sort_bars(bars: &mut [GraphBar]) {
    bars.sort_by(|a, b| b.rect.height.cmp(&a.rect.height));
}
